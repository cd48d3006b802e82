// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shared fixtures for edge-model integration tests.

#![allow(dead_code)]

use edge_model::{
    ApplicationConfig, ApplicationType, Device, EndpointConfig, EndpointInfo, NodeId, NodeInfo,
    SecurityMode,
};

pub const DEFAULT_SERVER_NAME_VALUE: &str = "edge-opc-server";
pub const DEFAULT_SERVER_URI_VALUE: &str = "opc.tcp://localhost:12686/";
pub const DEFAULT_SERVER_APP_NAME_VALUE: &str = "digitalpetri opc-ua client";
pub const DEFAULT_SERVER_APP_URI_VALUE: &str = "urn:digitalpetri:opcua:client";
pub const DEFAULT_NAMESPACE_VALUE: &str = "edge-namespace";
pub const DEFAULT_ROOT_NODE_INFO_VALUE: &str = "defaultRootNode";
pub const DEFAULT_PRODUCT_URI_VALUE: &str = "urn:digitalpetri:opcua:sdk";
pub const WELL_KNOWN_DISCOVERY_VALUE: &str = "/server/discovery";

pub fn endpoint_config() -> EndpointConfig {
    EndpointConfig {
        request_timeout: 60_000,
        bind_port: 12686,
        server_name: Some(DEFAULT_SERVER_NAME_VALUE.to_string()),
        bind_address: Some("localhost".to_string()),
    }
}

/// Every optional field populated; three URL slots, the middle one absent.
pub fn full_app_config() -> ApplicationConfig {
    ApplicationConfig {
        application_type: ApplicationType::Client,
        application_uri: Some(DEFAULT_SERVER_APP_URI_VALUE.to_string()),
        product_uri: Some(DEFAULT_PRODUCT_URI_VALUE.to_string()),
        application_name: Some(DEFAULT_SERVER_APP_NAME_VALUE.to_string()),
        gateway_server_uri: Some(DEFAULT_SERVER_URI_VALUE.to_string()),
        discovery_profile_uri: Some("http://opcfoundation.org/UA-Profile/Discovery".to_string()),
        discovery_urls: Some(vec![
            Some(format!("{}{}", DEFAULT_SERVER_URI_VALUE, WELL_KNOWN_DISCOVERY_VALUE)),
            None,
            Some("opc.tcp://backup:12686/server/discovery".to_string()),
        ]),
    }
}

pub fn full_endpoint_info() -> EndpointInfo {
    EndpointInfo {
        endpoint_uri: Some(format!("{}{}", DEFAULT_SERVER_URI_VALUE, DEFAULT_SERVER_NAME_VALUE)),
        endpoint_config: Some(endpoint_config()),
        app_config: Some(full_app_config()),
        security_mode: SecurityMode::Sign,
        security_policy_uri: Some("http://opcfoundation.org/UA/SecurityPolicy#None".to_string()),
        transport_profile_uri: Some(
            "http://opcfoundation.org/UA-Profile/Transport/uatcp-uasc-uabinary".to_string(),
        ),
        security_level: 1,
    }
}

pub fn string_node_id() -> NodeId {
    NodeId::string(2, DEFAULT_ROOT_NODE_INFO_VALUE)
        .with_node_uri(DEFAULT_NAMESPACE_VALUE)
        .with_node_id(format!("ns=2;s={}", DEFAULT_ROOT_NODE_INFO_VALUE))
}

pub fn node_info() -> NodeInfo {
    NodeInfo::new(string_node_id())
        .with_method_name("reset")
        .with_value_alias(format!("{{2;S;v=0}}{}", DEFAULT_ROOT_NODE_INFO_VALUE))
}

pub fn device() -> Device {
    Device {
        address: Some("localhost".to_string()),
        port: 12686,
        server_name: Some(DEFAULT_SERVER_NAME_VALUE.to_string()),
        endpoints: vec![full_endpoint_info(), EndpointInfo::new(DEFAULT_SERVER_URI_VALUE)],
    }
}
