//! Session management
//!
//! A [`Session`] is the live shell process's registry of named environments,
//! each bound to an immutable [`Context`] (host, base tenant, credentials).
//! The `"current"` entry is bound at startup and is what commands execute
//! against; environment-switch commands swap it between invocations, never
//! mid-flight.

mod models;
mod resolve;
mod store;

pub use models::{Context, SessionConfig};
pub use resolve::resolve_active_environment;
pub use store::SessionStore;

use std::collections::BTreeMap;

use log::debug;

use crate::config::session as session_config;
use crate::error::{Result, ShellError};
use crate::rest::RestClient;

/// Process-scoped registry mapping environment names to contexts,
/// plus the shared REST transport.
#[derive(Debug)]
pub struct Session {
    environments: BTreeMap<String, Context>,
    client: RestClient,
}

impl Session {
    /// Build a session from loaded configuration, binding the resolved active
    /// environment under `"current"`.
    ///
    /// Fails with a `Config` error when no environment can be bound; a session
    /// is never live without a current context.
    pub fn bind(config: SessionConfig, cli_env: Option<&str>, client: RestClient) -> Result<Self> {
        let active = resolve_active_environment(cli_env, &config).ok_or_else(|| {
            ShellError::Config(
                "No active environment: pass --env, set COSHELL_ENV, or set \
                 current-environment in the session config"
                    .to_string(),
            )
        })?;

        let ctx = config.environments.get(&active).cloned().ok_or_else(|| {
            ShellError::Config(format!(
                "Environment '{}' not found in session config",
                active
            ))
        })?;

        debug!("Bound environment '{}' as current (host={})", active, ctx.host);

        let mut environments = config.environments;
        environments.insert(session_config::CURRENT.to_string(), ctx);

        Ok(Self {
            environments,
            client,
        })
    }

    /// Build a session with a single context bound as current.
    pub fn with_current(ctx: Context, client: RestClient) -> Self {
        let mut environments = BTreeMap::new();
        environments.insert(session_config::CURRENT.to_string(), ctx);
        Self {
            environments,
            client,
        }
    }

    /// Look up an environment by name.
    pub fn env(&self, name: &str) -> Option<&Context> {
        self.environments.get(name)
    }

    /// The context commands execute against.
    ///
    /// Panics when `"current"` is unbound: a live session without a current
    /// environment is illegal state, not a recoverable error.
    pub fn current(&self) -> &Context {
        self.environments
            .get(session_config::CURRENT)
            .expect("live session has no current environment bound")
    }

    /// Rebind an environment. Callers must only do this between command
    /// invocations.
    pub fn set_env(&mut self, name: impl Into<String>, ctx: Context) {
        self.environments.insert(name.into(), ctx);
    }

    /// The shared REST transport.
    pub fn client(&self) -> &RestClient {
        &self.client
    }
}
