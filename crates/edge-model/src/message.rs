// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Request, response and message envelopes.
//!
//! These aggregates are produced by the protocol engine and are never
//! cloned here; this module only defines how they are owned and torn down.
//! Dropping a [`Message`] releases, in field order:
//!
//! - the optional endpoint info
//! - the populated [`MessagePayload`] arm (one request, a request array or a
//!   response array; the arms are exclusive)
//! - the optional result and browse parameters
//! - the browse results, each of which owns only its browse name
//!
//! Every array is a `Vec`, so element teardown is bounded by the length the
//! container carries and always happens before its buffer is released.

use std::mem;

use crate::endpoint::EndpointInfo;
use crate::node::NodeInfo;
use crate::subscription::SubRequest;
use crate::value::{ValueType, Versatility};

/// Outcome code of an operation.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusCode {
    #[default]
    Ok = 0,
    Error = 1,
    NotSupported = 2,
    InvalidArgument = 3,
    OutOfMemory = 4,
    NotFound = 5,
    ServiceResultBad = 6,
    BrowseContinue = 7,
    BrowseUnexpected = 8,
}

/// Status carried by messages and responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeResult {
    pub code: StatusCode,
}

impl EdgeResult {
    pub const fn new(code: StatusCode) -> Self {
        Self { code }
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self.code, StatusCode::Ok)
    }
}

/// Server-side diagnostics attached to a response.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct DiagnosticInfo {
    pub symbolic_id: i32,
    pub namespace_uri: i32,
    pub locale: i32,
    pub localized_text: i32,
    pub additional_info: Option<String>,
    pub inner_status_code: u32,
    pub inner_diagnostic_info: Option<Box<DiagnosticInfo>>,
    pub msg: Option<String>,
}

impl DiagnosticInfo {
    /// Nesting depth of inner diagnostics, counting `self`.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut inner = self.inner_diagnostic_info.as_deref();
        while let Some(info) = inner {
            depth += 1;
            inner = info.inner_diagnostic_info.as_deref();
        }
        depth
    }
}

/// Method call argument.
#[derive(Debug, PartialEq)]
pub struct Argument {
    pub value: Versatility,
}

impl Argument {
    pub fn new(value: impl Into<Versatility>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Input and output arguments of a method call.
#[derive(Debug, Default, PartialEq)]
pub struct MethodRequestParams {
    pub input: Vec<Argument>,
    pub output: Vec<Argument>,
}

/// A single operation request addressed to one node.
#[derive(Debug, Default, PartialEq)]
pub struct Request {
    pub request_id: u32,
    pub node_info: Option<NodeInfo>,
    /// Value to write
    pub value: Option<Versatility>,
    /// Subscription parameters
    pub sub_msg: Option<SubRequest>,
    pub method_params: Option<MethodRequestParams>,
}

impl Request {
    pub fn new(request_id: u32, node_info: NodeInfo) -> Self {
        Self {
            request_id,
            node_info: Some(node_info),
            ..Self::default()
        }
    }
}

/// Result of a single request.
#[derive(Debug, Default, PartialEq)]
pub struct Response {
    pub request_id: u32,
    pub value: Option<Versatility>,
    pub node_info: Option<NodeInfo>,
    pub result: Option<EdgeResult>,
    pub diagnostic_info: Option<DiagnosticInfo>,
}

impl Response {
    pub fn new(request_id: u32, value: impl Into<Versatility>) -> Self {
        Self {
            request_id,
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Type tag of the carried value, if any.
    pub fn value_type(&self) -> Option<ValueType> {
        self.value.as_ref().map(Versatility::value_type)
    }
}

/// OPC UA browse direction.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrowseDirection {
    #[default]
    Forward = 0,
    Inverse = 1,
    Both = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrowseParameter {
    pub direction: BrowseDirection,
    /// 0 means no limit
    pub max_references_per_node: u32,
}

#[derive(Debug, PartialEq, Eq, Default)]
pub struct BrowseResult {
    pub browse_name: Option<String>,
}

/// Kind of envelope.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    #[default]
    SendRequest = 0,
    SendRequests = 1,
    GeneralResponse = 2,
    BrowseResponse = 3,
    Report = 4,
    Error = 5,
}

/// Service the message is about.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommandType {
    #[default]
    Read = 0,
    Write = 1,
    Browse = 2,
    Method = 3,
    Sub = 4,
}

/// Request-shaped content of a message. A message carries at most one shape.
#[derive(Debug, Default, PartialEq)]
pub enum MessagePayload {
    #[default]
    Empty,
    Request(Request),
    Requests(Vec<Request>),
    Responses(Vec<Response>),
}

/// Top-level envelope exchanged between the protocol engine and consumers.
#[derive(Debug, Default, PartialEq)]
pub struct Message {
    pub message_id: u32,
    pub message_type: MessageType,
    pub command: CommandType,
    pub endpoint_info: Option<EndpointInfo>,
    pub payload: MessagePayload,
    pub result: Option<EdgeResult>,
    pub browse_param: Option<BrowseParameter>,
    pub browse_results: Option<Vec<BrowseResult>>,
}

impl Message {
    pub fn new(message_type: MessageType, command: CommandType) -> Self {
        Self {
            message_type,
            command,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: MessagePayload) -> Self {
        self.payload = payload;
        self
    }

    #[must_use]
    pub fn with_endpoint_info(mut self, info: EndpointInfo) -> Self {
        self.endpoint_info = Some(info);
        self
    }

    /// Number of requests carried (a single request counts as one).
    pub fn request_count(&self) -> usize {
        match &self.payload {
            MessagePayload::Request(_) => 1,
            MessagePayload::Requests(reqs) => reqs.len(),
            MessagePayload::Empty | MessagePayload::Responses(_) => 0,
        }
    }

    pub fn response_count(&self) -> usize {
        match &self.payload {
            MessagePayload::Responses(resps) => resps.len(),
            _ => 0,
        }
    }

    pub fn browse_result_count(&self) -> usize {
        self.browse_results.as_ref().map_or(0, Vec::len)
    }

    /// Move the payload out, leaving [`MessagePayload::Empty`] behind.
    pub fn take_payload(&mut self) -> MessagePayload {
        mem::take(&mut self.payload)
    }
}
