//! coshell - Administrative shell for tenant-aware collaboration platforms
//!
//! An interactive shell that drives a remote REST platform. Operators run
//! named commands inside a persistent session; each command parses its own
//! arguments, builds a request against the active tenant's REST context, and
//! reports structured success or failure back to the shell loop.
//!
//! # Example
//!
//! ```bash
//! # Start the shell against the configured environment
//! coshell
//!
//! # Run a single command and exit
//! coshell -c "get /api/tenant/current"
//!
//! # Import a file into a tenant
//! coshell -c "import-file /api/journals/import --file=./data/sample.pdf --tenant=acme"
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod rest;
pub mod session;
pub mod shell;
pub mod ui;

pub use cli::Cli;
pub use commands::{registry, Command, CommandOutput, Get, ImportFile};
pub use error::{Result, ShellError};
pub use rest::{
    file_stream_factory, parse_request_path, Payload, RequestOptions, ResponseBody, RestClient,
    StreamFactory,
};
pub use session::{resolve_active_environment, Context, Session, SessionConfig, SessionStore};
pub use shell::{render_error, ControlFlow, Shell};
