// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Endpoint, application and subscription configuration C FFI bindings.
//!
//! # Usage from C
//!
//! ```c
//! EdgeEndpointConfig* cfg = edge_endpoint_config_create(60000, 12686);
//! edge_endpoint_config_set_server_name(cfg, "edge-opc-server");
//!
//! EdgeEndpointInfo* info = edge_endpoint_info_create();
//! edge_endpoint_info_set_endpoint_config(info, cfg); // cfg is consumed
//! edge_endpoint_info_free(info);
//! ```

use std::ffi::c_char;
use std::ptr;

use edge_model::{ApplicationConfig, EndpointConfig, EndpointInfo, SecurityMode, SubRequest};

use crate::{clone_handle, free_handle, into_handle, owned_text, set_text, EdgeError};

/// Opaque handle to an endpoint transport config
#[repr(C)]
pub struct EdgeEndpointConfig {
    _private: [u8; 0],
}

/// Opaque handle to an application config
#[repr(C)]
pub struct EdgeApplicationConfig {
    _private: [u8; 0],
}

/// Opaque handle to an endpoint description
#[repr(C)]
pub struct EdgeEndpointInfo {
    _private: [u8; 0],
}

/// Opaque handle to subscription parameters
#[repr(C)]
pub struct EdgeSubRequest {
    _private: [u8; 0],
}

// =============================================================================
// EndpointConfig
// =============================================================================

/// Create an endpoint config. Free with `edge_endpoint_config_free`
/// unless it is attached to an endpoint info.
#[no_mangle]
pub extern "C" fn edge_endpoint_config_create(
    request_timeout: u32,
    bind_port: u16,
) -> *mut EdgeEndpointConfig {
    let config = EndpointConfig {
        request_timeout,
        bind_port,
        ..EndpointConfig::default()
    };
    into_handle(config, "edge_endpoint_config_create")
}

/// # Safety
/// - `config` must be a valid handle. `name` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn edge_endpoint_config_set_server_name(
    config: *mut EdgeEndpointConfig,
    name: *const c_char,
) -> EdgeError {
    set_text(config, name, |c: &mut EndpointConfig| &mut c.server_name)
}

/// # Safety
/// - `config` must be a valid handle. `address` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn edge_endpoint_config_set_bind_address(
    config: *mut EdgeEndpointConfig,
    address: *const c_char,
) -> EdgeError {
    set_text(config, address, |c: &mut EndpointConfig| &mut c.bind_address)
}

/// Deep-clone an endpoint config. Returns NULL on NULL input or allocation failure.
///
/// # Safety
/// - `config` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_endpoint_config_clone(
    config: *const EdgeEndpointConfig,
) -> *mut EdgeEndpointConfig {
    clone_handle::<_, EndpointConfig>(config, "edge_endpoint_config_clone")
}

/// # Safety
/// - `config` must be a valid handle not yet freed or consumed, or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_endpoint_config_free(config: *mut EdgeEndpointConfig) {
    free_handle::<_, EndpointConfig>(config);
}

// =============================================================================
// ApplicationConfig
// =============================================================================

/// Create an empty application config with no discovery URL array.
#[no_mangle]
pub extern "C" fn edge_application_config_create() -> *mut EdgeApplicationConfig {
    into_handle(ApplicationConfig::default(), "edge_application_config_create")
}

/// # Safety
/// - `config` must be a valid handle. `uri` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn edge_application_config_set_application_uri(
    config: *mut EdgeApplicationConfig,
    uri: *const c_char,
) -> EdgeError {
    set_text(config, uri, |c: &mut ApplicationConfig| &mut c.application_uri)
}

/// # Safety
/// - `config` must be a valid handle. `uri` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn edge_application_config_set_product_uri(
    config: *mut EdgeApplicationConfig,
    uri: *const c_char,
) -> EdgeError {
    set_text(config, uri, |c: &mut ApplicationConfig| &mut c.product_uri)
}

/// # Safety
/// - `config` must be a valid handle. `name` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn edge_application_config_set_application_name(
    config: *mut EdgeApplicationConfig,
    name: *const c_char,
) -> EdgeError {
    set_text(config, name, |c: &mut ApplicationConfig| {
        &mut c.application_name
    })
}

/// Append a discovery URL, creating the array on first use.
///
/// # Safety
/// - `config` must be a valid handle. `url` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn edge_application_config_add_discovery_url(
    config: *mut EdgeApplicationConfig,
    url: *const c_char,
) -> EdgeError {
    if config.is_null() {
        return EdgeError::InvalidArgument;
    }
    match owned_text(url) {
        Ok(url) => {
            (*config.cast::<ApplicationConfig>()).push_discovery_url(url);
            EdgeError::Ok
        }
        Err(err) => err,
    }
}

/// Number of discovery URL slots. A NULL handle or missing array reads as 0.
///
/// # Safety
/// - `config` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_application_config_discovery_url_count(
    config: *const EdgeApplicationConfig,
) -> usize {
    if config.is_null() {
        return 0;
    }
    (*config.cast::<ApplicationConfig>()).discovery_url_count()
}

/// Deep-clone an application config. Returns NULL on NULL input or allocation failure.
///
/// # Safety
/// - `config` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_application_config_clone(
    config: *const EdgeApplicationConfig,
) -> *mut EdgeApplicationConfig {
    clone_handle::<_, ApplicationConfig>(config, "edge_application_config_clone")
}

/// Release an application config, its texts and every discovery URL.
///
/// # Safety
/// - `config` must be a valid handle not yet freed or consumed, or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_application_config_free(config: *mut EdgeApplicationConfig) {
    free_handle::<_, ApplicationConfig>(config);
}

// =============================================================================
// EndpointInfo
// =============================================================================

/// Create an empty endpoint info.
#[no_mangle]
pub extern "C" fn edge_endpoint_info_create() -> *mut EdgeEndpointInfo {
    into_handle(EndpointInfo::default(), "edge_endpoint_info_create")
}

/// # Safety
/// - `info` must be a valid handle. `uri` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn edge_endpoint_info_set_endpoint_uri(
    info: *mut EdgeEndpointInfo,
    uri: *const c_char,
) -> EdgeError {
    set_text(info, uri, |i: &mut EndpointInfo| &mut i.endpoint_uri)
}

/// # Safety
/// - `info` must be a valid handle. `uri` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn edge_endpoint_info_set_security_policy_uri(
    info: *mut EdgeEndpointInfo,
    uri: *const c_char,
) -> EdgeError {
    set_text(info, uri, |i: &mut EndpointInfo| &mut i.security_policy_uri)
}

/// Set security mode (OPC UA wire value 0-3) and level.
///
/// # Safety
/// - `info` must be a valid handle.
#[no_mangle]
pub unsafe extern "C" fn edge_endpoint_info_set_security(
    info: *mut EdgeEndpointInfo,
    mode: u8,
    level: u8,
) -> EdgeError {
    if info.is_null() {
        return EdgeError::InvalidArgument;
    }
    let Some(mode) = SecurityMode::from_value(mode) else {
        return EdgeError::InvalidArgument;
    };
    let info = &mut *info.cast::<EndpointInfo>();
    info.security_mode = mode;
    info.security_level = level;
    EdgeError::Ok
}

/// Attach a transport config. `config` is consumed, do NOT free it.
///
/// `config` is consumed on every return, including `InvalidArgument` for a
/// NULL `info`.
///
/// # Safety
/// - `info` must be a valid handle or NULL.
/// - `config` must be a valid handle from `edge_endpoint_config_create`.
#[no_mangle]
pub unsafe extern "C" fn edge_endpoint_info_set_endpoint_config(
    info: *mut EdgeEndpointInfo,
    config: *mut EdgeEndpointConfig,
) -> EdgeError {
    if info.is_null() {
        edge_endpoint_config_free(config);
        return EdgeError::InvalidArgument;
    }
    if config.is_null() {
        return EdgeError::InvalidArgument;
    }
    let config = Box::from_raw(config.cast::<EndpointConfig>());
    (*info.cast::<EndpointInfo>()).endpoint_config = Some(*config);
    EdgeError::Ok
}

/// Attach an application config. `config` is consumed, do NOT free it.
///
/// `config` is consumed on every return, including `InvalidArgument` for a
/// NULL `info`.
///
/// # Safety
/// - `info` must be a valid handle or NULL.
/// - `config` must be a valid handle from `edge_application_config_create`.
#[no_mangle]
pub unsafe extern "C" fn edge_endpoint_info_set_app_config(
    info: *mut EdgeEndpointInfo,
    config: *mut EdgeApplicationConfig,
) -> EdgeError {
    if info.is_null() {
        edge_application_config_free(config);
        return EdgeError::InvalidArgument;
    }
    if config.is_null() {
        return EdgeError::InvalidArgument;
    }
    let config = Box::from_raw(config.cast::<ApplicationConfig>());
    (*info.cast::<EndpointInfo>()).app_config = Some(*config);
    EdgeError::Ok
}

/// Deep-clone an endpoint info with both nested configs.
/// Returns NULL on NULL input or allocation failure.
///
/// # Safety
/// - `info` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_endpoint_info_clone(
    info: *const EdgeEndpointInfo,
) -> *mut EdgeEndpointInfo {
    clone_handle::<_, EndpointInfo>(info, "edge_endpoint_info_clone")
}

/// Release an endpoint info and everything it owns.
///
/// # Safety
/// - `info` must be a valid handle not yet freed, or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_endpoint_info_free(info: *mut EdgeEndpointInfo) {
    free_handle::<_, EndpointInfo>(info);
}

// =============================================================================
// SubRequest
// =============================================================================

/// Create subscription parameters with default values.
#[no_mangle]
pub extern "C" fn edge_sub_request_create() -> *mut EdgeSubRequest {
    into_handle(SubRequest::default(), "edge_sub_request_create")
}

/// Copy subscription parameters. Returns NULL on NULL input.
///
/// # Safety
/// - `sub` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_sub_request_clone(sub: *const EdgeSubRequest) -> *mut EdgeSubRequest {
    if sub.is_null() {
        return ptr::null_mut();
    }
    let copy = *sub.cast::<SubRequest>();
    into_handle(copy, "edge_sub_request_clone")
}

/// # Safety
/// - `sub` must be a valid handle not yet freed, or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_sub_request_free(sub: *mut EdgeSubRequest) {
    free_handle::<_, SubRequest>(sub);
}
