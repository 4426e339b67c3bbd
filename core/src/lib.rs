//! Synchronous CouchDB client core.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). Alongside the request/parse
//! pair it carries the pieces every call site shares: status classification
//! into [`BadResponse`], the [`ChunkHook`] contract for streamed bodies, and
//! the [`PropertyHost`] name-based accessor surface used by DTOs such as
//! [`ServerInfo`].
//!
//! # Design
//! - `CouchClient` is stateless; it holds only `base_url`.
//! - Failed responses are classified once, by status range, in
//!   `client::check_status`.
//! - Property access by name is resolved through typed function tables, never
//!   through runtime reflection.

pub mod chunk;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod property;
pub mod server_info;

pub use chunk::{pump_chunks, ChunkCollector, ChunkHook, ChunkStats};
pub use client::CouchClient;
pub use config::ClientConfig;
pub use error::{
    AccessMode, ApiError, BadResponse, CouchErrorBody, ErrorCategory, InvalidStatus,
    MissingAccessor, Result,
};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use property::{accessor_name, Accessors, PropertyHost};
pub use server_info::{ServerInfo, PRODUCT_LABEL};
