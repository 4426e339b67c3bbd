//! Stateless HTTP request builder and response parser for CouchDB.
//!
//! # Design
//! `CouchClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`; the caller executes the round-trip.

use crate::config::ClientConfig;
use crate::error::{ApiError, BadResponse, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::server_info::{RootResponse, ServerInfo};

#[derive(Debug, Clone)]
pub struct CouchClient {
    base_url: String,
}

impl CouchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /`, which answers with the server greeting and version.
    pub fn build_server_info(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn parse_server_info(&self, response: HttpResponse) -> Result<ServerInfo> {
        check_status(&response, 200)?;
        let root: RootResponse = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(ServerInfo::from(root))
    }
}

/// Classify any status other than `expected` into a `BadResponse`.
pub fn check_status(response: &HttpResponse, expected: u16) -> std::result::Result<(), BadResponse> {
    if response.status == expected {
        return Ok(());
    }
    let err = BadResponse::new(response.status, response.body.clone());
    tracing::warn!(
        status = response.status,
        expected,
        category = ?err.category(),
        "unexpected response status"
    );
    Err(err)
}
