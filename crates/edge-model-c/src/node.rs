// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Node identifier C FFI bindings.

use std::ffi::c_char;
use std::ptr;

use edge_model::{identifier_type_from_code, NodeId, NodeIdType, NodeInfo};

use crate::{clone_handle, free_handle, into_handle, owned_text, set_text, EdgeError};

/// Identifier payload kind of a node id
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeNodeIdType {
    Integer = 0,
    String = 1,
    ByteString = 2,
    Uuid = 3,
}

impl From<NodeIdType> for EdgeNodeIdType {
    fn from(ty: NodeIdType) -> Self {
        match ty {
            NodeIdType::Integer => Self::Integer,
            NodeIdType::String => Self::String,
            NodeIdType::ByteString => Self::ByteString,
            NodeIdType::Uuid => Self::Uuid,
        }
    }
}

/// Opaque handle to a node id
#[repr(C)]
pub struct EdgeNodeId {
    _private: [u8; 0],
}

/// Opaque handle to node info
#[repr(C)]
pub struct EdgeNodeInfo {
    _private: [u8; 0],
}

/// Map an identifier code (`S`, `B`, `G`) to its type. Any other code is `Integer`.
#[no_mangle]
pub extern "C" fn edge_node_id_type_from_code(code: c_char) -> EdgeNodeIdType {
    identifier_type_from_code(char::from(code as u8)).into()
}

// =============================================================================
// NodeId
// =============================================================================

/// Create a numeric node id. Free with `edge_node_id_free`.
#[no_mangle]
pub extern "C" fn edge_node_id_create_numeric(namespace: u16, value: u32) -> *mut EdgeNodeId {
    into_handle(NodeId::numeric(namespace, value), "edge_node_id_create_numeric")
}

/// Create a text node id. Returns NULL if `value` is NULL or not UTF-8.
///
/// # Safety
/// - `value` must be a valid NUL-terminated string or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_node_id_create_string(
    namespace: u16,
    value: *const c_char,
) -> *mut EdgeNodeId {
    match owned_text(value) {
        Ok(value) => into_handle(NodeId::string(namespace, value), "edge_node_id_create_string"),
        Err(_) => ptr::null_mut(),
    }
}

/// Set the namespace URI of a node id.
///
/// # Safety
/// - `node_id` must be a valid handle. `uri` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn edge_node_id_set_node_uri(
    node_id: *mut EdgeNodeId,
    uri: *const c_char,
) -> EdgeError {
    set_text(node_id, uri, |id: &mut NodeId| &mut id.node_uri)
}

/// Identifier payload kind of a node id. A NULL handle reads as `Integer`.
///
/// # Safety
/// - `node_id` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_node_id_get_type(node_id: *const EdgeNodeId) -> EdgeNodeIdType {
    if node_id.is_null() {
        return EdgeNodeIdType::Integer;
    }
    (*node_id.cast::<NodeId>()).identifier_type().into()
}

/// Deep-clone a node id. Returns NULL on NULL input or allocation failure.
///
/// # Safety
/// - `node_id` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_node_id_clone(node_id: *const EdgeNodeId) -> *mut EdgeNodeId {
    clone_handle::<_, NodeId>(node_id, "edge_node_id_clone")
}

/// Release a node id and its identifier payload.
///
/// # Safety
/// - `node_id` must be a valid handle not yet freed or consumed, or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_node_id_free(node_id: *mut EdgeNodeId) {
    free_handle::<_, NodeId>(node_id);
}

// =============================================================================
// NodeInfo
// =============================================================================

/// Create an empty node info. Free with `edge_node_info_free`.
#[no_mangle]
pub extern "C" fn edge_node_info_create() -> *mut EdgeNodeInfo {
    into_handle(NodeInfo::default(), "edge_node_info_create")
}

/// Set the method name of a node info.
///
/// # Safety
/// - `info` must be a valid handle. `name` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn edge_node_info_set_method_name(
    info: *mut EdgeNodeInfo,
    name: *const c_char,
) -> EdgeError {
    set_text(info, name, |info: &mut NodeInfo| &mut info.method_name)
}

/// Set the value alias of a node info.
///
/// # Safety
/// - `info` must be a valid handle. `alias` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn edge_node_info_set_value_alias(
    info: *mut EdgeNodeInfo,
    alias: *const c_char,
) -> EdgeError {
    set_text(info, alias, |info: &mut NodeInfo| &mut info.value_alias)
}

/// Attach a node id to a node info. `node_id` is consumed, do NOT free it.
///
/// `node_id` is consumed on every return, including `InvalidArgument` for a
/// NULL `info`.
///
/// # Safety
/// - `info` must be a valid handle or NULL.
/// - `node_id` must be a valid handle from `edge_node_id_*`.
#[no_mangle]
pub unsafe extern "C" fn edge_node_info_set_node_id(
    info: *mut EdgeNodeInfo,
    node_id: *mut EdgeNodeId,
) -> EdgeError {
    if info.is_null() {
        edge_node_id_free(node_id);
        return EdgeError::InvalidArgument;
    }
    if node_id.is_null() {
        return EdgeError::InvalidArgument;
    }
    let node_id = Box::from_raw(node_id.cast::<NodeId>());
    (*info.cast::<NodeInfo>()).node_id = Some(*node_id);
    EdgeError::Ok
}

/// Deep-clone a node info. Returns NULL on NULL input or allocation failure.
///
/// # Safety
/// - `info` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_node_info_clone(info: *const EdgeNodeInfo) -> *mut EdgeNodeInfo {
    clone_handle::<_, NodeInfo>(info, "edge_node_info_clone")
}

/// Release a node info and the node id it owns.
///
/// # Safety
/// - `info` must be a valid handle not yet freed, or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_node_info_free(info: *mut EdgeNodeInfo) {
    free_handle::<_, NodeInfo>(info);
}
