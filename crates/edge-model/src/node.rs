// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! OPC UA node identifiers and node addressing info.
//!
//! A [`NodeId`] pairs a namespace index with exactly one identifier payload.
//! The payload is a sum type, so the discriminator can never disagree with
//! the populated representation.
//!
//! # Examples
//!
//! ```
//! use edge_model::{NodeId, NodeIdType, TryClone};
//!
//! let id = NodeId::string(2, "Temperature.Value").with_node_uri("edge-namespace");
//! assert_eq!(id.identifier_type(), NodeIdType::String);
//!
//! let copy = id.try_clone().unwrap();
//! assert_eq!(copy, id);
//! ```

use std::fmt;

use uuid::Uuid;

use crate::clone::{clone_bytes, TryClone};
use crate::error::Result;

/// Discriminator for the identifier payload of a [`NodeId`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeIdType {
    /// Numeric identifier (`N`)
    #[default]
    Integer = 0,
    /// Text identifier (`S`)
    String = 1,
    /// Byte-string identifier (`B`)
    ByteString = 2,
    /// GUID identifier (`G`)
    Uuid = 3,
}

impl NodeIdType {
    /// Single-letter code used in textual node addresses.
    pub const fn code(self) -> char {
        match self {
            Self::Integer => 'N',
            Self::String => 'S',
            Self::ByteString => 'B',
            Self::Uuid => 'G',
        }
    }
}

impl From<char> for NodeIdType {
    fn from(code: char) -> Self {
        identifier_type_from_code(code)
    }
}

/// Map a single-letter identifier code to its [`NodeIdType`].
///
/// Unknown codes fall back to [`NodeIdType::Integer`]; this is not an error.
///
/// ```
/// use edge_model::{identifier_type_from_code, NodeIdType};
///
/// assert_eq!(identifier_type_from_code('S'), NodeIdType::String);
/// assert_eq!(identifier_type_from_code('x'), NodeIdType::Integer);
/// ```
pub fn identifier_type_from_code(code: char) -> NodeIdType {
    match code {
        'S' => NodeIdType::String,
        'B' => NodeIdType::ByteString,
        'G' => NodeIdType::Uuid,
        _ => NodeIdType::Integer,
    }
}

/// Identifier payload of a [`NodeId`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum NodeIdentifier {
    /// Numeric identifier
    Numeric(u32),
    /// Text identifier
    String(String),
    /// Opaque byte-string identifier
    ByteString(Vec<u8>),
    /// GUID identifier
    Guid(Uuid),
}

impl NodeIdentifier {
    /// Discriminator of this payload.
    pub const fn identifier_type(&self) -> NodeIdType {
        match self {
            Self::Numeric(_) => NodeIdType::Integer,
            Self::String(_) => NodeIdType::String,
            Self::ByteString(_) => NodeIdType::ByteString,
            Self::Guid(_) => NodeIdType::Uuid,
        }
    }
}

impl Default for NodeIdentifier {
    fn default() -> Self {
        Self::Numeric(0)
    }
}

impl TryClone for NodeIdentifier {
    fn try_clone(&self) -> Result<Self> {
        Ok(match self {
            Self::Numeric(v) => Self::Numeric(*v),
            Self::Guid(v) => Self::Guid(*v),
            // Unpopulated payloads are carried over empty, with no allocation
            Self::String(s) if s.is_empty() => Self::String(String::new()),
            Self::String(s) => Self::String(s.try_clone()?),
            Self::ByteString(b) if b.is_empty() => Self::ByteString(Vec::new()),
            Self::ByteString(b) => Self::ByteString(clone_bytes(b)?),
        })
    }
}

impl fmt::Display for NodeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "i={}", v),
            Self::String(v) => write!(f, "s={}", v),
            Self::Guid(v) => write!(f, "g={}", v),
            Self::ByteString(v) => {
                write!(f, "b=")?;
                for byte in v {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

/// OPC UA node identifier.
#[derive(Debug, PartialEq, Eq, Hash, Default)]
pub struct NodeId {
    /// Namespace index (0 = OPC UA standard namespace)
    pub namespace: u16,
    /// Identifier payload
    pub identifier: NodeIdentifier,
    /// Namespace URI the node belongs to
    pub node_uri: Option<String>,
    /// Serialized textual form as received from the server
    pub node_id: Option<String>,
}

impl NodeId {
    /// Numeric node id.
    pub fn numeric(namespace: u16, value: u32) -> Self {
        Self {
            namespace,
            identifier: NodeIdentifier::Numeric(value),
            ..Self::default()
        }
    }

    /// Text node id.
    pub fn string(namespace: u16, value: impl Into<String>) -> Self {
        Self {
            namespace,
            identifier: NodeIdentifier::String(value.into()),
            ..Self::default()
        }
    }

    /// Byte-string node id.
    pub fn byte_string(namespace: u16, value: Vec<u8>) -> Self {
        Self {
            namespace,
            identifier: NodeIdentifier::ByteString(value),
            ..Self::default()
        }
    }

    /// GUID node id.
    pub fn guid(namespace: u16, value: Uuid) -> Self {
        Self {
            namespace,
            identifier: NodeIdentifier::Guid(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_node_uri(mut self, uri: impl Into<String>) -> Self {
        self.node_uri = Some(uri.into());
        self
    }

    #[must_use]
    pub fn with_node_id(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    /// Discriminator of the identifier payload.
    pub const fn identifier_type(&self) -> NodeIdType {
        self.identifier.identifier_type()
    }

    pub fn as_numeric(&self) -> Option<u32> {
        match &self.identifier {
            NodeIdentifier::Numeric(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.identifier {
            NodeIdentifier::String(v) => Some(v),
            _ => None,
        }
    }
}

impl TryClone for NodeId {
    fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            namespace: self.namespace,
            node_uri: self.node_uri.try_clone()?,
            identifier: self.identifier.try_clone()?,
            node_id: self.node_id.try_clone()?,
        })
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace == 0 {
            write!(f, "{}", self.identifier)
        } else {
            write!(f, "ns={};{}", self.namespace, self.identifier)
        }
    }
}

/// Addressing info for a node: the node itself plus optional method name and alias.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct NodeInfo {
    pub method_name: Option<String>,
    pub node_id: Option<NodeId>,
    pub value_alias: Option<String>,
}

impl NodeInfo {
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id: Some(node_id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value_alias(mut self, alias: impl Into<String>) -> Self {
        self.value_alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn with_method_name(mut self, name: impl Into<String>) -> Self {
        self.method_name = Some(name.into());
        self
    }
}

impl TryClone for NodeInfo {
    fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            method_name: self.method_name.try_clone()?,
            node_id: self.node_id.try_clone()?,
            value_alias: self.value_alias.try_clone()?,
        })
    }
}
