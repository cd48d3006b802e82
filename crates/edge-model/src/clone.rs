// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fallible deep-clone primitives.
//!
//! Every heap buffer produced by a clone is reserved through
//! `try_reserve_exact`, so an allocator refusal surfaces as
//! [`CloneError::OutOfMemory`] instead of aborting the process.
//!
//! Composite clones are written as struct literals with `?` after each
//! field. Fields are evaluated in declaration order, and an early return
//! drops the ones already built, which releases the constructed prefix in
//! reverse order.
//!
//! ```
//! use edge_model::{clone_text, TryClone};
//!
//! let src = String::from("opc.tcp://localhost:12686/");
//! let copy = src.try_clone().unwrap();
//! assert_eq!(copy, src);
//! assert_ne!(copy.as_ptr(), src.as_ptr());
//! assert_eq!(clone_text("").unwrap(), "");
//! ```

use crate::error::{CloneError, Result};

/// Deep clone that reports allocation failure instead of aborting.
///
/// On `Err`, nothing allocated during the call is left alive.
pub trait TryClone: Sized {
    /// Produce an independent copy sharing no heap memory with `self`.
    fn try_clone(&self) -> Result<Self>;
}

/// Clone a text value into a freshly reserved buffer of exactly `src.len()` bytes.
pub fn clone_text(src: &str) -> Result<String> {
    let mut clone = String::new();
    if clone.try_reserve_exact(src.len()).is_err() {
        log::warn!("[clone_text] allocation of {} bytes failed", src.len());
        return Err(CloneError::OutOfMemory {
            what: "text",
            bytes: src.len(),
        });
    }
    clone.push_str(src);
    Ok(clone)
}

/// Clone a byte buffer of at least one byte.
///
/// An empty source is invalid input and is rejected before any allocation.
pub fn clone_bytes(src: &[u8]) -> Result<Vec<u8>> {
    if src.is_empty() {
        return Err(CloneError::InvalidLength(0));
    }

    let mut clone = Vec::new();
    if clone.try_reserve_exact(src.len()).is_err() {
        log::warn!("[clone_bytes] allocation of {} bytes failed", src.len());
        return Err(CloneError::OutOfMemory {
            what: "bytes",
            bytes: src.len(),
        });
    }
    clone.extend_from_slice(src);
    Ok(clone)
}

/// Clone a slice element by element into a vector sized exactly to `src.len()`.
///
/// A zero-length source yields an empty vector without touching the allocator.
pub fn clone_vec<T, F>(src: &[T], mut clone_elem: F) -> Result<Vec<T>>
where
    F: FnMut(&T) -> Result<T>,
{
    let mut clone = Vec::new();
    if clone.try_reserve_exact(src.len()).is_err() {
        let bytes = src.len().saturating_mul(core::mem::size_of::<T>());
        log::warn!(
            "[clone_vec] allocation of {} slots ({} bytes) failed",
            src.len(),
            bytes
        );
        return Err(CloneError::OutOfMemory {
            what: "array",
            bytes,
        });
    }

    for elem in src {
        // `clone` drops with every element pushed so far on early return
        clone.push(clone_elem(elem)?);
    }
    Ok(clone)
}

impl TryClone for String {
    fn try_clone(&self) -> Result<Self> {
        clone_text(self)
    }
}

impl<T: TryClone> TryClone for Option<T> {
    fn try_clone(&self) -> Result<Self> {
        match self {
            Some(value) => value.try_clone().map(Some),
            None => Ok(None),
        }
    }
}

impl<T: TryClone> TryClone for Vec<T> {
    fn try_clone(&self) -> Result<Self> {
        clone_vec(self, T::try_clone)
    }
}
