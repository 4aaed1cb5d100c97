//! Session configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level session configuration
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Name of the environment bound as "current" at startup
    #[serde(rename = "current-environment", skip_serializing_if = "Option::is_none")]
    pub current_environment: Option<String>,
    /// Map of environment name to REST execution context
    #[serde(default)]
    pub environments: BTreeMap<String, Context>,
}

/// The REST execution identity a command runs against.
///
/// Immutable once constructed; commands borrow a reference and never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Platform host (bare host name, or full URL for non-TLS test servers)
    pub host: String,
    /// Base tenant alias requests are routed to
    pub tenant: String,
    /// Administrative user
    pub username: String,
    /// Password (stored in config file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Context {
    /// Base URL for requests against this context.
    ///
    /// Hosts are stored bare and default to https; a host carrying an explicit
    /// scheme (e.g. a mock server URI) is used as-is.
    pub fn base_url(&self) -> String {
        if self.host.contains("://") {
            self.host.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", self.host)
        }
    }
}
