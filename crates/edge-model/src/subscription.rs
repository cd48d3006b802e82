// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Subscription request parameters.
//!
//! [`SubRequest`] owns no heap memory, so a clone is a plain copy.

use crate::clone::TryClone;
use crate::error::Result;

/// Subscription operation requested by the client.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubscriptionType {
    #[default]
    CreateSub = 0,
    ModifySub = 1,
    DeleteSub = 2,
    Republish = 3,
}

/// Scalar subscription parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubRequest {
    pub sub_type: SubscriptionType,
    /// Sampling interval in milliseconds
    pub sampling_interval: f64,
    /// Publishing interval in milliseconds
    pub publishing_interval: f64,
    pub max_keep_alive_count: u32,
    pub lifetime_count: u32,
    pub max_notifications_per_publish: u32,
    pub publishing_enabled: bool,
    pub priority: u8,
    pub queue_size: u32,
}

impl Default for SubRequest {
    fn default() -> Self {
        Self {
            sub_type: SubscriptionType::CreateSub,
            sampling_interval: 100.0,
            publishing_interval: 1000.0,
            max_keep_alive_count: 10,
            lifetime_count: 30,
            max_notifications_per_publish: 1,
            publishing_enabled: true,
            priority: 0,
            queue_size: 1,
        }
    }
}

impl TryClone for SubRequest {
    fn try_clone(&self) -> Result<Self> {
        Ok(*self)
    }
}
