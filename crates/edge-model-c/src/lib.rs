// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # Edge Model C FFI Bindings
//!
//! C-compatible bindings for the OPC UA edge data model. Every model value
//! crosses the boundary as an opaque handle; C code never sees the layout.
//!
//! # Usage
//!
//! ```c
//! #include "edge_model.h"
//!
//! EdgeApplicationConfig* app = edge_application_config_create();
//! edge_application_config_set_application_uri(app, "urn:edge:gateway");
//! edge_application_config_add_discovery_url(app, "opc.tcp://localhost:12686/discovery");
//!
//! EdgeEndpointInfo* info = edge_endpoint_info_create();
//! edge_endpoint_info_set_endpoint_uri(info, "opc.tcp://localhost:12686/edge-opc-server");
//! edge_endpoint_info_set_app_config(info, app); // app is consumed
//!
//! EdgeEndpointInfo* copy = edge_endpoint_info_clone(info);
//! edge_endpoint_info_free(info);
//! edge_endpoint_info_free(copy);
//! ```
//!
//! # Safety
//!
//! All exported functions are `unsafe` and require the caller to uphold the
//! invariants documented in each function's safety comment. Handles are
//! released only through their matching `*_free` function.

#![allow(clippy::missing_safety_doc)]

mod endpoint;
#[cfg(feature = "logging")]
mod logging;
mod message;
mod node;

pub use endpoint::*;
#[cfg(feature = "logging")]
pub use logging::*;
pub use message::*;
pub use node::*;

use std::alloc::{self, Layout};
use std::ffi::{c_char, c_int, c_void, CStr};
use std::ptr;

use edge_model::CloneError;

// =============================================================================
// ERROR CODES
// =============================================================================

/// Error codes returned by edge model functions
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeError {
    /// Success (no error)
    Ok = 0,
    /// Null pointer or malformed argument
    InvalidArgument = 1,
    /// Memory allocation failed
    OutOfMemory = 2,
    /// Byte length shorter than 1
    InvalidLength = 3,
    /// Operation could not be completed (e.g. logger already installed)
    OperationFailed = 4,
}

impl From<CloneError> for EdgeError {
    fn from(err: CloneError) -> Self {
        match err {
            CloneError::OutOfMemory { .. } => Self::OutOfMemory,
            CloneError::InvalidLength(_) => Self::InvalidLength,
        }
    }
}

// =============================================================================
// RAW PRIMITIVES
// =============================================================================

/// Duplicate a NUL-terminated string into memory owned by the C allocator.
///
/// Returns NULL if `src` is NULL or the allocation fails. Release the result
/// with `edge_free`.
///
/// # Safety
/// - `src` must be a valid NUL-terminated string or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_clone_string(src: *const c_char) -> *mut c_char {
    if src.is_null() {
        return ptr::null_mut();
    }

    let bytes = CStr::from_ptr(src).to_bytes_with_nul();
    let dst = libc::malloc(bytes.len()).cast::<c_char>();
    if dst.is_null() {
        log::warn!("[edge_clone_string] allocation of {} bytes failed", bytes.len());
        return ptr::null_mut();
    }
    ptr::copy_nonoverlapping(bytes.as_ptr().cast::<c_char>(), dst, bytes.len());
    dst
}

/// Duplicate `len` bytes into memory owned by the C allocator.
///
/// Returns NULL if `src` is NULL, `len` is less than 1, or the allocation
/// fails. Release the result with `edge_free`.
///
/// # Safety
/// - `src` must be valid for reads of `len` bytes, or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_clone_data(src: *const c_void, len: c_int) -> *mut c_void {
    if src.is_null() {
        return ptr::null_mut();
    }
    let Ok(len) = usize::try_from(len) else {
        log::debug!("[edge_clone_data] negative length {}", len);
        return ptr::null_mut();
    };
    if len == 0 {
        log::debug!("[edge_clone_data] zero length");
        return ptr::null_mut();
    }

    let dst = libc::malloc(len);
    if dst.is_null() {
        log::warn!("[edge_clone_data] allocation of {} bytes failed", len);
        return ptr::null_mut();
    }
    ptr::copy_nonoverlapping(src.cast::<u8>(), dst.cast::<u8>(), len);
    dst
}

/// Release memory returned by `edge_clone_string` or `edge_clone_data`.
///
/// # Safety
/// - `ptr` must come from one of those functions and not be freed yet, or be NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_free(ptr: *mut c_void) {
    if !ptr.is_null() {
        libc::free(ptr);
    }
}

/// Library version as a static NUL-terminated string.
#[no_mangle]
pub extern "C" fn edge_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr().cast::<c_char>()
}

// =============================================================================
// HANDLE HELPERS
// =============================================================================

/// Read a C string argument into an owned `String`.
///
/// NULL and non-UTF-8 input are `InvalidArgument`; an allocation failure is
/// `OutOfMemory`.
pub(crate) unsafe fn owned_text(src: *const c_char) -> Result<String, EdgeError> {
    if src.is_null() {
        return Err(EdgeError::InvalidArgument);
    }
    let Ok(text) = CStr::from_ptr(src).to_str() else {
        return Err(EdgeError::InvalidArgument);
    };
    Ok(edge_model::clone_text(text)?)
}

/// Set an optional text field of the value behind `handle`.
pub(crate) unsafe fn set_text<H, T>(
    handle: *mut H,
    src: *const c_char,
    field: impl FnOnce(&mut T) -> &mut Option<String>,
) -> EdgeError {
    if handle.is_null() {
        return EdgeError::InvalidArgument;
    }
    match owned_text(src) {
        Ok(text) => {
            *field(&mut *handle.cast::<T>()) = Some(text);
            EdgeError::Ok
        }
        Err(err) => err,
    }
}

/// Move `value` into a heap handle, or return NULL if the allocator refuses.
///
/// The block has the layout of `Box<T>`, so [`free_handle`] releases it.
pub(crate) fn into_handle<T, H>(value: T, what: &str) -> *mut H {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Box::into_raw(Box::new(value)).cast::<H>();
    }

    // SAFETY: layout has a non-zero size
    let raw = unsafe { alloc::alloc(layout) }.cast::<T>();
    if raw.is_null() {
        log::warn!(
            "[{}] handle allocation of {} bytes failed",
            what,
            layout.size()
        );
        return ptr::null_mut();
    }
    // SAFETY: raw is non-null, aligned for T and uninitialized
    unsafe { raw.write(value) };
    raw.cast::<H>()
}

/// Deep-clone the value behind `handle` into a new handle.
///
/// NULL input and clone failure both return NULL. A failure after the deep
/// copy succeeded drops the copy before returning.
pub(crate) unsafe fn clone_handle<H, T>(handle: *const H, what: &str) -> *mut H
where
    T: edge_model::TryClone,
{
    if handle.is_null() {
        return ptr::null_mut();
    }
    match (*handle.cast::<T>()).try_clone() {
        Ok(clone) => into_handle::<T, H>(clone, what),
        Err(err) => {
            log::warn!("[{}] {}", what, err);
            ptr::null_mut()
        }
    }
}

/// Drop the value behind `handle`, if any.
pub(crate) unsafe fn free_handle<H, T>(handle: *mut H) {
    if !handle.is_null() {
        let _ = Box::from_raw(handle.cast::<T>());
    }
}
