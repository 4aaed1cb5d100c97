/// Configuration constants for the platform REST API
pub mod api {
    /// Query parameter carrying a per-request tenant override
    pub const TENANT_PARAM: &str = "tenantAlias";
}

/// Configuration constants for the session config file
pub mod session {
    /// Directory under $HOME holding the session config
    pub const DIR_NAME: &str = ".coshell";

    /// Session config file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable selecting the active environment
    pub const ENV_VAR: &str = "COSHELL_ENV";

    /// Registry key every live session must bind
    pub const CURRENT: &str = "current";
}

/// Default values for the CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Shell prompt
    pub const PROMPT: &str = "coshell> ";
}
