//! Active environment resolution from multiple sources

use log::debug;

use crate::config::session as session_config;

use super::models::SessionConfig;

/// Resolve the name of the environment to bind as "current":
/// 1. --env CLI flag
/// 2. COSHELL_ENV env var
/// 3. current-environment from the config file
pub fn resolve_active_environment(
    cli_env: Option<&str>,
    config: &SessionConfig,
) -> Option<String> {
    // 1. CLI flag
    if let Some(name) = cli_env {
        debug!("Using environment from CLI flag: {}", name);
        return Some(name.to_string());
    }

    // 2. Environment variable
    if let Ok(name) = std::env::var(session_config::ENV_VAR) {
        if !name.is_empty() {
            debug!(
                "Using environment from {} env var: {}",
                session_config::ENV_VAR,
                name
            );
            return Some(name);
        }
    }

    // 3. Config file current-environment
    if let Some(name) = &config.current_environment {
        debug!("Using environment from config file: {}", name);
        return Some(name.clone());
    }

    None
}
