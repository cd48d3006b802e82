// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # Edge Model - OPC UA edge data model
//!
//! Ownership and duplication contract for the structures exchanged between an
//! OPC UA protocol engine and its consumers: node identifiers, endpoint and
//! application configuration, subscription parameters, method arguments and
//! request/response envelopes.
//!
//! ## Ownership
//!
//! Every structure owns its heap memory exclusively. There is no shared or
//! reference-counted ownership; releasing a value is its drop, and every
//! nested field is released by the containing value's drop glue.
//!
//! ## Deep Clone
//!
//! Model types implement [`TryClone`]. A clone shares no heap memory with its
//! source, and allocation failure is reported as [`CloneError`] instead of
//! aborting. A clone that fails halfway releases whatever it already built
//! before returning.
//!
//! ```rust
//! use edge_model::{ApplicationConfig, EndpointInfo, TryClone};
//!
//! # fn main() -> edge_model::Result<()> {
//! let mut app = ApplicationConfig::default();
//! app.application_uri = Some("urn:edge:gateway".into());
//! app.push_discovery_url("opc.tcp://localhost:12686/server/discovery");
//!
//! let info = EndpointInfo {
//!     app_config: Some(app),
//!     ..EndpointInfo::new("opc.tcp://localhost:12686/edge-opc-server")
//! };
//!
//! let copy = info.try_clone()?;
//! assert_eq!(copy, info);
//! # Ok(())
//! # }
//! ```
//!
//! Types that own heap memory do not implement [`Clone`], so every copy
//! goes through the fallible path:
//!
//! ```compile_fail
//! let info = edge_model::EndpointInfo::new("opc.tcp://localhost:12686/");
//! let copy: edge_model::EndpointInfo = info.clone();
//! ```
//!
//! ```compile_fail
//! let id = edge_model::NodeId::string(2, "Temperature.Value");
//! let copy: edge_model::NodeId = id.clone();
//! ```
//!
//! ## Tiers
//!
//! | Module | Contents | Clone |
//! |--------|----------|-------|
//! | [`clone`] | `clone_text`, `clone_bytes`, [`TryClone`] | - |
//! | [`node`] | [`NodeId`], [`NodeInfo`], identifier codes | `TryClone` |
//! | [`endpoint`] | [`EndpointConfig`], [`ApplicationConfig`], [`EndpointInfo`], [`Device`] | `TryClone` |
//! | [`subscription`] | [`SubRequest`] | copy |
//! | [`value`] | [`Versatility`], [`Variant`], [`VariantArray`] | teardown only |
//! | [`message`] | [`Request`], [`Response`], [`Message`] | teardown only |

/// Fallible deep-clone primitives and the [`TryClone`] trait.
pub mod clone;
/// Endpoint, application and device configuration.
pub mod endpoint;
/// Clone error type.
pub mod error;
/// Request/response/message aggregates.
pub mod message;
/// Node identifiers and node info.
pub mod node;
/// Subscription parameters.
pub mod subscription;
/// Type-tagged versatile values.
pub mod value;

pub use clone::{clone_bytes, clone_text, clone_vec, TryClone};
pub use endpoint::{
    ApplicationConfig, ApplicationType, Device, EndpointConfig, EndpointInfo, SecurityMode,
};
pub use error::{CloneError, Result};
pub use message::{
    Argument, BrowseDirection, BrowseParameter, BrowseResult, CommandType, DiagnosticInfo,
    EdgeResult, Message, MessagePayload, MessageType, MethodRequestParams, Request, Response,
    StatusCode,
};
pub use node::{identifier_type_from_code, NodeId, NodeIdType, NodeIdentifier, NodeInfo};
pub use subscription::{SubRequest, SubscriptionType};
pub use value::{LocalizedText, QualifiedName, ValueType, Variant, VariantArray, Versatility};

pub use uuid::Uuid;
