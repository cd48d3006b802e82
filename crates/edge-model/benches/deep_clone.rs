// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test/bench code readability over pedantic
#![allow(clippy::missing_panics_doc)] // Tests/examples panic on failure
#![allow(clippy::semicolon_if_nothing_returned)] // Benchmark code formatting

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use edge_model::{
    ApplicationConfig, ApplicationType, Device, EndpointConfig, EndpointInfo, NodeId, NodeInfo,
    SecurityMode, TryClone,
};

fn app_config(urls: usize) -> ApplicationConfig {
    ApplicationConfig {
        application_type: ApplicationType::Server,
        application_uri: Some("urn:edge:opcua:server".into()),
        product_uri: Some("urn:edge:opcua:product".into()),
        application_name: Some("edge-opc-server".into()),
        gateway_server_uri: None,
        discovery_profile_uri: None,
        discovery_urls: Some(
            (0..urls)
                .map(|i| Some(format!("opc.tcp://10.0.0.{}:4840/discovery", i)))
                .collect(),
        ),
    }
}

fn endpoint_info() -> EndpointInfo {
    EndpointInfo {
        endpoint_config: Some(EndpointConfig {
            request_timeout: 60_000,
            bind_port: 12686,
            server_name: Some("edge-opc-server".into()),
            bind_address: Some("localhost".into()),
        }),
        app_config: Some(app_config(2)),
        security_mode: SecurityMode::SignAndEncrypt,
        security_policy_uri: Some(
            "http://opcfoundation.org/UA/SecurityPolicy#Basic256Sha256".into(),
        ),
        security_level: 3,
        ..EndpointInfo::new("opc.tcp://localhost:12686/edge-opc-server")
    }
}

// ============================================================================
// Node Benchmarks
// ============================================================================

/// Benchmark: NodeInfo clone with a string identifier
fn bench_node_info_clone(c: &mut Criterion) {
    let info = NodeInfo::new(
        NodeId::string(2, "Line1.Motor.Speed")
            .with_node_uri("urn:edge:namespace")
            .with_node_id("ns=2;s=Line1.Motor.Speed"),
    )
    .with_value_alias("{2;S;v=0}Line1.Motor.Speed");

    c.bench_function("node_info_clone", |b| {
        b.iter(|| black_box(&info).try_clone().unwrap())
    });
}

// ============================================================================
// Endpoint Benchmarks
// ============================================================================

/// Benchmark: ApplicationConfig clone by discovery URL count
fn bench_app_config_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("app_config_clone");
    for urls in [0usize, 4, 64] {
        let config = app_config(urls);
        group.bench_with_input(BenchmarkId::from_parameter(urls), &config, |b, config| {
            b.iter(|| black_box(config).try_clone().unwrap())
        });
    }
    group.finish();
}

/// Benchmark: fully populated EndpointInfo clone
fn bench_endpoint_info_clone(c: &mut Criterion) {
    let info = endpoint_info();
    c.bench_function("endpoint_info_clone", |b| {
        b.iter(|| black_box(&info).try_clone().unwrap())
    });
}

/// Benchmark: Device with 16 endpoints
fn bench_device_clone(c: &mut Criterion) {
    let device = Device {
        address: Some("192.168.0.10".into()),
        port: 4840,
        server_name: Some("edge-opc-server".into()),
        endpoints: (0..16).map(|_| endpoint_info()).collect(),
    };
    c.bench_function("device_clone_16_endpoints", |b| {
        b.iter(|| black_box(&device).try_clone().unwrap())
    });
}

criterion_group!(
    benches,
    bench_node_info_clone,
    bench_app_config_clone,
    bench_endpoint_info_clone,
    bench_device_clone
);
criterion_main!(benches);
