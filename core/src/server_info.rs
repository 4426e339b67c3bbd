//! Metadata a CouchDB instance reports from its root endpoint.

use std::sync::OnceLock;

use serde::Deserialize;
use serde_json::Value;

use crate::property::{Accessors, PropertyHost};

/// Label prepended to every raw version string.
pub const PRODUCT_LABEL: &str = "CouchDB";

/// Read-only server greeting and version, e.g. `("Welcome", "CouchDB 1.6.1")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    motd: String,
    server_version: String,
}

/// Shape of `GET /`. Fields beyond these two are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RootResponse {
    pub couchdb: String,
    pub version: String,
}

impl ServerInfo {
    pub fn new(motd: impl Into<String>, raw_version: &str) -> Self {
        Self {
            motd: motd.into(),
            server_version: format!("{PRODUCT_LABEL} {raw_version}"),
        }
    }

    pub fn motd(&self) -> &str {
        &self.motd
    }

    pub fn server_version(&self) -> &str {
        &self.server_version
    }
}

impl From<RootResponse> for ServerInfo {
    fn from(root: RootResponse) -> Self {
        ServerInfo::new(root.couchdb, &root.version)
    }
}

impl PropertyHost for ServerInfo {
    fn accessors() -> &'static Accessors<Self> {
        static TABLE: OnceLock<Accessors<ServerInfo>> = OnceLock::new();
        TABLE.get_or_init(|| {
            Accessors::<ServerInfo>::new()
                .getter("motd", |info| Value::from(info.motd.as_str()))
                .getter("serverVersion", |info| Value::from(info.server_version.as_str()))
        })
    }
}
