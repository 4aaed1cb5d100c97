//! Shared argument parsing for shell commands

use clap::{CommandFactory, Parser};

use crate::error::{Result, ShellError};

/// Render a command's full help text
pub fn render_help<T: CommandFactory>() -> String {
    T::command().render_long_help().to_string()
}

/// Parse a raw argument list against a command's declared schema.
///
/// Unknown flags are rejected rather than silently passed through; the
/// resulting validation error carries the command's full help text. Required
/// fields are declared optional in the schemas and checked by the commands
/// themselves, so their errors can name the missing field.
pub fn parse<T>(name: &'static str, args: &[String]) -> Result<T>
where
    T: Parser,
{
    T::try_parse_from(std::iter::once(name.to_string()).chain(args.iter().cloned())).map_err(
        |err| ShellError::Validation {
            field: "args".to_string(),
            message: err.to_string(),
            help: render_help::<T>(),
        },
    )
}
