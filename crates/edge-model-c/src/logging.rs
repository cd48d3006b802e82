// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Logging initialization for the edge model C FFI

use std::ffi::{c_char, CStr};

use crate::EdgeError;

/// Log level for edge model logging
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl From<EdgeLogLevel> for log::LevelFilter {
    fn from(level: EdgeLogLevel) -> Self {
        match level {
            EdgeLogLevel::Off => log::LevelFilter::Off,
            EdgeLogLevel::Error => log::LevelFilter::Error,
            EdgeLogLevel::Warn => log::LevelFilter::Warn,
            EdgeLogLevel::Info => log::LevelFilter::Info,
            EdgeLogLevel::Debug => log::LevelFilter::Debug,
            EdgeLogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Install a console logger at `level`.
///
/// Returns `OperationFailed` if a logger is already installed.
///
/// # Example (C)
/// ```c
/// edge_logging_init(EDGE_LOG_LEVEL_WARN);
/// ```
#[no_mangle]
pub extern "C" fn edge_logging_init(level: EdgeLogLevel) -> EdgeError {
    let filter: log::LevelFilter = level.into();

    match env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp_millis()
        .try_init()
    {
        Ok(()) => EdgeError::Ok,
        Err(_) => EdgeError::OperationFailed,
    }
}

/// Filter used when `RUST_LOG` is absent: `level` for the model crates,
/// warnings and above from everything else.
fn default_filter(level: EdgeLogLevel) -> String {
    let level = log::LevelFilter::from(level).as_str().to_ascii_lowercase();
    format!("edge_model={level},edge_model_c={level},warn")
}

/// Install a console logger, honouring `RUST_LOG` when set.
///
/// Without `RUST_LOG`, `default_level` applies to the `edge_model` and
/// `edge_model_c` targets only.
#[no_mangle]
pub extern "C" fn edge_logging_init_env(default_level: EdgeLogLevel) -> EdgeError {
    match env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(default_level)),
    )
    .format_timestamp_millis()
    .try_init()
    {
        Ok(()) => EdgeError::Ok,
        Err(_) => EdgeError::OperationFailed,
    }
}

/// Install a console logger with an `env_logger` filter string
/// (e.g. `"edge_model=debug,warn"`).
///
/// # Safety
/// - `filter` must be a valid NUL-terminated string or NULL.
#[no_mangle]
pub unsafe extern "C" fn edge_logging_init_with_filter(filter: *const c_char) -> EdgeError {
    if filter.is_null() {
        return EdgeError::InvalidArgument;
    }

    let Ok(filter_str) = CStr::from_ptr(filter).to_str() else {
        return EdgeError::InvalidArgument;
    };

    match env_logger::Builder::new()
        .parse_filters(filter_str)
        .format_timestamp_millis()
        .try_init()
    {
        Ok(()) => EdgeError::Ok,
        Err(_) => EdgeError::OperationFailed,
    }
}
