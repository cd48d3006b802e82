// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test code readability over pedantic
#![allow(clippy::missing_panics_doc)] // Tests panic on failure
#![allow(clippy::cast_possible_wrap)] // Test conversions

//! Handle allocation under a refusing allocator.
//!
//! Every C entry point that hands out a handle must return NULL when the
//! allocator refuses, and leave no live allocation behind.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::ptr;

use edge_model::{CommandType, Message, MessagePayload, MessageType, Response, Variant};
use edge_model_c::*;

struct AccountingAllocator;

thread_local! {
    static ALLOCS: Cell<usize> = const { Cell::new(0) };
    static DEALLOCS: Cell<usize> = const { Cell::new(0) };
    static FAIL_AT: Cell<Option<usize>> = const { Cell::new(None) };
}

unsafe impl GlobalAlloc for AccountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let index = ALLOCS.try_with(Cell::get).unwrap_or(0);
        let refuse = FAIL_AT
            .try_with(|fail_at| {
                if fail_at.get() == Some(index) {
                    fail_at.set(None);
                    true
                } else {
                    false
                }
            })
            .unwrap_or(false);
        if refuse {
            return ptr::null_mut();
        }

        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let _ = ALLOCS.try_with(|n| n.set(n.get() + 1));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = DEALLOCS.try_with(|n| n.set(n.get() + 1));
        System.dealloc(ptr, layout);
    }
}

#[global_allocator]
static GLOBAL: AccountingAllocator = AccountingAllocator;

fn live() -> isize {
    ALLOCS.with(Cell::get) as isize - DEALLOCS.with(Cell::get) as isize
}

/// Run `f`, refusing the `step`-th allocation it performs (0-based).
fn with_failure_at<R>(step: usize, f: impl FnOnce() -> R) -> R {
    FAIL_AT.with(|fail_at| fail_at.set(Some(ALLOCS.with(Cell::get) + step)));
    let out = f();
    FAIL_AT.with(|fail_at| fail_at.set(None));
    out
}

/// Refuse each allocation of `clone(src)` in turn until it succeeds.
/// Returns the number of allocations a successful clone performs.
unsafe fn assert_null_at_every_step<H>(
    src: *const H,
    clone: unsafe extern "C" fn(*const H) -> *mut H,
    free: unsafe extern "C" fn(*mut H),
) -> usize {
    let mut step = 0;
    loop {
        let baseline = live();
        let copy = with_failure_at(step, || clone(src));
        if copy.is_null() {
            assert_eq!(live(), baseline, "leak after refusing allocation {}", step);
        } else {
            free(copy);
            assert_eq!(live(), baseline, "clone leaked after free");
            return step;
        }
        step += 1;
    }
}

#[test]
fn test_numeric_node_id_clone_returns_null() {
    unsafe {
        let id = edge_node_id_create_numeric(0, 85);
        assert!(!id.is_null());

        let baseline = live();
        // a numeric id owns no heap data, so the handle is the only allocation
        assert!(with_failure_at(0, || edge_node_id_clone(id)).is_null());
        assert_eq!(live(), baseline);

        edge_node_id_free(id);
    }
}

#[test]
fn test_string_node_id_clone_rollback() {
    unsafe {
        let id = edge_node_id_create_string(2, c"defaultRootNode".as_ptr());
        assert_eq!(
            edge_node_id_set_node_uri(id, c"edge-namespace".as_ptr()),
            EdgeError::Ok
        );

        // node uri, identifier payload, handle
        let steps = assert_null_at_every_step(id.cast_const(), edge_node_id_clone, edge_node_id_free);
        assert_eq!(steps, 3);
        edge_node_id_free(id);
    }
}

#[test]
fn test_endpoint_info_clone_rollback() {
    unsafe {
        let cfg = edge_endpoint_config_create(60_000, 12686);
        edge_endpoint_config_set_server_name(cfg, c"edge-opc-server".as_ptr());
        let app = edge_application_config_create();
        edge_application_config_set_application_uri(app, c"urn:edge:gateway".as_ptr());
        edge_application_config_add_discovery_url(app, c"opc.tcp://localhost:12686/".as_ptr());

        let info = edge_endpoint_info_create();
        edge_endpoint_info_set_endpoint_uri(info, c"opc.tcp://localhost:12686/edge".as_ptr());
        assert_eq!(edge_endpoint_info_set_endpoint_config(info, cfg), EdgeError::Ok);
        assert_eq!(edge_endpoint_info_set_app_config(info, app), EdgeError::Ok);

        // endpoint uri, server name, app uri, url array, url, handle
        let steps = assert_null_at_every_step(
            info.cast_const(),
            edge_endpoint_info_clone,
            edge_endpoint_info_free,
        );
        assert_eq!(steps, 6);
        edge_endpoint_info_free(info);
    }
}

#[test]
fn test_node_info_and_app_config_clone_rollback() {
    unsafe {
        let info = edge_node_info_create();
        edge_node_info_set_method_name(info, c"reset".as_ptr());
        edge_node_info_set_node_id(info, edge_node_id_create_numeric(2, 1001));
        // method name, handle
        let steps =
            assert_null_at_every_step(info.cast_const(), edge_node_info_clone, edge_node_info_free);
        assert_eq!(steps, 2);
        edge_node_info_free(info);

        let app = edge_application_config_create();
        edge_application_config_set_product_uri(app, c"urn:edge:sdk".as_ptr());
        // product uri, handle
        assert_eq!(
            assert_null_at_every_step(
                app.cast_const(),
                edge_application_config_clone,
                edge_application_config_free
            ),
            2
        );
        edge_application_config_free(app);
    }
}

#[test]
fn test_sub_request_clone_returns_null() {
    unsafe {
        let sub = edge_sub_request_create();
        let steps =
            assert_null_at_every_step(sub.cast_const(), edge_sub_request_clone, edge_sub_request_free);
        assert_eq!(steps, 1);
        edge_sub_request_free(sub);
    }
}

#[test]
fn test_create_returns_null() {
    let baseline = live();
    assert!(with_failure_at(0, || edge_node_id_create_numeric(0, 85)).is_null());
    assert!(with_failure_at(0, || edge_node_info_create()).is_null());
    assert!(with_failure_at(0, || edge_endpoint_config_create(1000, 4840)).is_null());
    assert!(with_failure_at(0, || edge_application_config_create()).is_null());
    assert!(with_failure_at(0, || edge_endpoint_info_create()).is_null());
    assert!(with_failure_at(0, || edge_sub_request_create()).is_null());
    assert_eq!(live(), baseline);
}

#[test]
fn test_message_handoff_returns_null_and_drops() {
    let baseline = live();
    let msg = Message::new(MessageType::GeneralResponse, CommandType::Read).with_payload(
        MessagePayload::Responses(vec![Response::new(1, Variant::String("Running".into()))]),
    );

    let raw = with_failure_at(0, || edge_message_into_raw(msg));
    assert!(raw.is_null());
    assert_eq!(live(), baseline);
}

#[test]
fn test_consuming_setters_release_argument_on_null_target() {
    unsafe {
        let baseline = live();

        let cfg = edge_endpoint_config_create(60_000, 12686);
        edge_endpoint_config_set_server_name(cfg, c"edge-opc-server".as_ptr());
        assert_eq!(
            edge_endpoint_info_set_endpoint_config(ptr::null_mut(), cfg),
            EdgeError::InvalidArgument
        );

        let app = edge_application_config_create();
        edge_application_config_add_discovery_url(app, c"opc.tcp://a:4840".as_ptr());
        assert_eq!(
            edge_endpoint_info_set_app_config(ptr::null_mut(), app),
            EdgeError::InvalidArgument
        );

        let id = edge_node_id_create_string(1, c"Robot.Arm".as_ptr());
        assert_eq!(
            edge_node_info_set_node_id(ptr::null_mut(), id),
            EdgeError::InvalidArgument
        );

        assert_eq!(live(), baseline);
    }
}
