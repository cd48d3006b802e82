// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Endpoint and application configuration model.
//!
//! Every optional text field is an `Option<String>`: `None` is the absent
//! state and clones to `None`, never to an empty string. Nested configs are
//! owned inline, so dropping an [`EndpointInfo`] releases both of them.

use crate::clone::TryClone;
use crate::error::Result;

/// Transport-level settings of a single endpoint.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct EndpointConfig {
    /// Request timeout in milliseconds
    pub request_timeout: u32,
    pub bind_port: u16,
    pub server_name: Option<String>,
    pub bind_address: Option<String>,
}

impl TryClone for EndpointConfig {
    fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            request_timeout: self.request_timeout,
            bind_port: self.bind_port,
            server_name: self.server_name.try_clone()?,
            bind_address: self.bind_address.try_clone()?,
        })
    }
}

/// OPC UA application type.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApplicationType {
    #[default]
    Server = 0,
    Client = 1,
    ClientAndServer = 2,
    DiscoveryServer = 3,
}

impl ApplicationType {
    /// Creates from the OPC UA wire value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Server),
            1 => Some(Self::Client),
            2 => Some(Self::ClientAndServer),
            3 => Some(Self::DiscoveryServer),
            _ => None,
        }
    }
}

/// Application description advertised by a server or client.
///
/// `discovery_urls` distinguishes three states: `None` (no array),
/// `Some(vec![])` (an array of zero entries) and arrays whose entries may
/// themselves be absent.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct ApplicationConfig {
    pub application_type: ApplicationType,
    pub application_uri: Option<String>,
    pub product_uri: Option<String>,
    pub application_name: Option<String>,
    pub gateway_server_uri: Option<String>,
    pub discovery_profile_uri: Option<String>,
    pub discovery_urls: Option<Vec<Option<String>>>,
}

impl ApplicationConfig {
    /// Number of discovery URL slots (0 when there is no array).
    pub fn discovery_url_count(&self) -> usize {
        self.discovery_urls.as_ref().map_or(0, Vec::len)
    }

    /// Append a discovery URL, creating the array if needed.
    pub fn push_discovery_url(&mut self, url: impl Into<String>) {
        self.discovery_urls
            .get_or_insert_with(Vec::new)
            .push(Some(url.into()));
    }

    /// Iterate over the populated discovery URLs.
    pub fn discovery_urls(&self) -> impl Iterator<Item = &str> {
        self.discovery_urls
            .iter()
            .flatten()
            .filter_map(|url| url.as_deref())
    }
}

impl TryClone for ApplicationConfig {
    fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            application_type: self.application_type,
            application_uri: self.application_uri.try_clone()?,
            product_uri: self.product_uri.try_clone()?,
            application_name: self.application_name.try_clone()?,
            gateway_server_uri: self.gateway_server_uri.try_clone()?,
            discovery_profile_uri: self.discovery_profile_uri.try_clone()?,
            discovery_urls: self.discovery_urls.try_clone()?,
        })
    }
}

/// OPC UA message security mode.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SecurityMode {
    Invalid = 0,
    /// Messages are neither signed nor encrypted
    #[default]
    None = 1,
    /// Messages are signed but not encrypted
    Sign = 2,
    /// Messages are signed and encrypted
    SignAndEncrypt = 3,
}

impl SecurityMode {
    /// Creates from the OPC UA wire value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Invalid),
            1 => Some(Self::None),
            2 => Some(Self::Sign),
            3 => Some(Self::SignAndEncrypt),
            _ => Option::None,
        }
    }
}

/// Endpoint description: URI, transport settings, application and security metadata.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct EndpointInfo {
    pub endpoint_uri: Option<String>,
    pub endpoint_config: Option<EndpointConfig>,
    pub app_config: Option<ApplicationConfig>,
    pub security_mode: SecurityMode,
    pub security_policy_uri: Option<String>,
    pub transport_profile_uri: Option<String>,
    pub security_level: u8,
}

impl EndpointInfo {
    pub fn new(endpoint_uri: impl Into<String>) -> Self {
        Self {
            endpoint_uri: Some(endpoint_uri.into()),
            ..Self::default()
        }
    }
}

impl TryClone for EndpointInfo {
    fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            security_mode: self.security_mode,
            security_level: self.security_level,
            endpoint_uri: self.endpoint_uri.try_clone()?,
            security_policy_uri: self.security_policy_uri.try_clone()?,
            transport_profile_uri: self.transport_profile_uri.try_clone()?,
            endpoint_config: self.endpoint_config.try_clone()?,
            app_config: self.app_config.try_clone()?,
        })
    }
}

/// A discovered device and the endpoints it exposes.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct Device {
    pub address: Option<String>,
    pub port: u16,
    pub server_name: Option<String>,
    pub endpoints: Vec<EndpointInfo>,
}

impl TryClone for Device {
    fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            port: self.port,
            address: self.address.try_clone()?,
            server_name: self.server_name.try_clone()?,
            endpoints: self.endpoints.try_clone()?,
        })
    }
}
