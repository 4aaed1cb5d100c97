//! Shell commands
//!
//! Every command implements the same contract: a one-line description, a
//! multi-line help string, and an invocation bound to the live session.
//! Commands are registered once at shell startup; the registry is read-only
//! afterwards.

mod args;
mod get;
mod import_file;

pub use args::{parse, render_help};
pub use get::Get;
pub use import_file::ImportFile;

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::{Result, ShellError};
use crate::session::Session;

/// What a successful invocation hands back to the shell loop
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommandOutput {
    text: Option<String>,
}

impl CommandOutput {
    /// Output to print on the shell's stdout
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Nothing to print
    pub fn none() -> Self {
        Self::default()
    }

    pub fn into_text(self) -> Option<String> {
        self.text
    }
}

/// The uniform shape every shell command implements.
///
/// `invoke` performs all work for one shell turn and resolves exactly once,
/// with the command's output or with the error the shell renders. Violated
/// preconditions surface as validation errors before any network activity
/// starts, so malformed input never causes a partial remote side effect.
#[async_trait]
pub trait Command: Send + Sync {
    /// Name the command is registered and looked up under
    fn name(&self) -> &'static str;

    /// One-line summary for the help listing
    fn description(&self) -> &'static str;

    /// Multi-line usage text
    fn help(&self) -> String;

    /// Run the command against the session's current context
    async fn invoke(&self, session: &Session, args: &[String]) -> Result<CommandOutput>;

    /// Build a validation error for a named field, embedding this command's
    /// help text so the operator can self-correct
    fn validation(&self, field: &str, message: &str) -> ShellError {
        ShellError::validation(field, message, self.help())
    }
}

/// Build the command registry. Called once at shell startup.
pub fn registry() -> BTreeMap<&'static str, Box<dyn Command>> {
    let mut commands: BTreeMap<&'static str, Box<dyn Command>> = BTreeMap::new();
    for command in [
        Box::new(ImportFile) as Box<dyn Command>,
        Box::new(Get) as Box<dyn Command>,
    ] {
        commands.insert(command.name(), command);
    }
    commands
}
