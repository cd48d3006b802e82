// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Message envelope C FFI bindings.
//!
//! Messages are built by the protocol engine on the Rust side and handed to
//! C with [`edge_message_into_raw`]. C code only inspects and releases them.

use edge_model::Message;

use crate::{free_handle, into_handle};

/// Opaque handle to a message envelope
#[repr(C)]
pub struct EdgeMessage {
    _private: [u8; 0],
}

/// Transfer ownership of `msg` to C. Release it with `edge_message_free`.
///
/// Returns NULL if the handle cannot be allocated; `msg` is dropped then.
pub fn edge_message_into_raw(msg: Message) -> *mut EdgeMessage {
    into_handle(msg, "edge_message_into_raw")
}

/// Number of requests carried. A NULL handle reads as 0.
///
/// # Safety
/// - `msg` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_message_request_count(msg: *const EdgeMessage) -> usize {
    if msg.is_null() {
        return 0;
    }
    (*msg.cast::<Message>()).request_count()
}

/// Number of responses carried. A NULL handle reads as 0.
///
/// # Safety
/// - `msg` must be a valid handle or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_message_response_count(msg: *const EdgeMessage) -> usize {
    if msg.is_null() {
        return 0;
    }
    (*msg.cast::<Message>()).response_count()
}

/// Release a message and every request, response and browse result it owns.
///
/// # Safety
/// - `msg` must come from `edge_message_into_raw` and not be freed yet, or be NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_message_free(msg: *mut EdgeMessage) {
    free_handle::<_, Message>(msg);
}
