// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for deep-clone operations.

/// Result type for clone operations
pub type Result<T> = core::result::Result<T, CloneError>;

/// Reasons a deep clone can fail.
///
/// A failed clone has already released everything it built; the caller only
/// decides whether to propagate or substitute a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CloneError {
    /// The allocator refused a reservation.
    #[error("allocation of {bytes} bytes failed while cloning {what}")]
    OutOfMemory {
        /// Kind of buffer being cloned (`text`, `bytes`, `array`)
        what: &'static str,
        /// Requested size in bytes
        bytes: usize,
    },

    /// Byte data shorter than one byte cannot be cloned.
    #[error("invalid length {0} for byte clone")]
    InvalidLength(usize),
}

impl CloneError {
    /// Returns `true` for allocator failures.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}
