//! Interactive shell loop
//!
//! Reads one line at a time, dispatches it to a registered command, and waits
//! for the command's completion before re-prompting. One command is in flight
//! at any moment; the session is never mutated mid-invocation.

use std::collections::BTreeMap;

use comfy_table::{presets::NOTHING, Table};
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use crate::commands::{registry, Command};
use crate::config::defaults;
use crate::error::{Result, ShellError};
use crate::session::Session;
use crate::ui::{clear_spinner, create_spinner};

/// What the loop does after a dispatched line
#[derive(Debug, PartialEq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

/// The interactive shell: session, command registry, and dispatch loop.
pub struct Shell {
    session: Session,
    commands: BTreeMap<&'static str, Box<dyn Command>>,
    quiet: bool,
}

impl Shell {
    /// Build a shell over a bound session. `quiet` disables the progress
    /// spinner (one-shot mode, scripts).
    pub fn new(session: Session, quiet: bool) -> Self {
        Self {
            session,
            commands: registry(),
            quiet,
        }
    }

    /// Run the interactive loop until quit or EOF.
    pub async fn run(&mut self) -> Result<()> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();
        let mut editor: Editor<(), DefaultHistory> =
            Editor::with_config(config).map_err(|e| ShellError::Io(e.to_string()))?;

        println!(
            "coshell {} (environment: {})",
            env!("CARGO_PKG_VERSION"),
            self.session.current().host
        );
        println!("Type \"help\" for commands, \"quit\" or Ctrl-D to exit.");

        loop {
            match editor.readline(defaults::PROMPT) {
                Ok(line) => match self.dispatch(&line).await {
                    Ok(ControlFlow::Continue) => continue,
                    Ok(ControlFlow::Exit) => break,
                    Err(err) => render_error(&err),
                },
                Err(ReadlineError::Interrupted) => {
                    // Ctrl-C cancels the line, not the shell
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    return Err(ShellError::Io(e.to_string()));
                }
            }
        }

        Ok(())
    }

    /// Dispatch a single line: look the command up by its first token and
    /// invoke it with the remaining tokens as its raw argument list.
    ///
    /// Lines are split on whitespace; there is no quoting layer.
    pub async fn dispatch(&self, line: &str) -> Result<ControlFlow> {
        let mut tokens = line.split_whitespace().map(str::to_string);
        let name = match tokens.next() {
            Some(name) => name,
            None => return Ok(ControlFlow::Continue),
        };
        let args: Vec<String> = tokens.collect();

        // Built-ins handled by the loop itself
        match name.as_str() {
            "quit" | "exit" => return Ok(ControlFlow::Exit),
            "help" => {
                println!("{}", self.command_table());
                return Ok(ControlFlow::Continue);
            }
            _ => {}
        }

        let command = self.commands.get(name.as_str()).ok_or_else(|| {
            ShellError::validation(
                "command",
                &format!("Unknown command: {}", name),
                self.command_table(),
            )
        })?;

        debug!("Invoking command '{}' with {} args", name, args.len());

        let spinner = create_spinner(&format!("Running {}...", name), self.quiet);
        let result = command.invoke(&self.session, &args).await;
        clear_spinner(spinner);

        let output = result?;
        if let Some(text) = output.into_text() {
            println!("{}", text);
        }
        Ok(ControlFlow::Continue)
    }

    /// Render the registry as a help listing
    fn command_table(&self) -> String {
        let mut table = Table::new();
        table.load_preset(NOTHING).set_header(vec!["Command", "Description"]);
        for command in self.commands.values() {
            table.add_row(vec![command.name(), command.description()]);
        }
        table.add_row(vec!["help", "Show this listing"]);
        table.add_row(vec!["quit", "Exit the shell"]);
        table.to_string()
    }
}

/// Render a command error on stderr.
///
/// Validation errors carry the command's help text so the operator can
/// self-correct; HTTP errors preserve the remote code and message verbatim.
pub fn render_error(err: &ShellError) {
    match err {
        ShellError::Validation {
            field,
            message,
            help,
        } => {
            eprintln!("Invalid value for \"{}\": {}", field, message);
            eprintln!();
            eprintln!("{}", help);
        }
        ShellError::Http { code, message } => {
            eprintln!("HTTP {}: {}", code, message);
        }
        other => eprintln!("{}", other),
    }
}
