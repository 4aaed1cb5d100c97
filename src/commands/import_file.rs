//! Import a file into the platform

use std::path::PathBuf;

use async_trait::async_trait;
use clap::Parser;
use reqwest::Method;

use crate::error::Result;
use crate::rest::{self, file_stream_factory, Payload, RequestOptions};
use crate::session::Session;

use super::{args, Command, CommandOutput};

#[derive(Parser, Debug)]
#[command(
    name = "import-file",
    about = "Import a file",
    override_usage = "import-file <path (e.g., \"/api/journals/import\")> --file=<file> [--tenant=<tenant alias>]"
)]
struct ImportFileArgs {
    /// The request path to submit the import to
    path: Option<String>,

    /// The file to import
    #[arg(short = 'F', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// The tenant where the file needs to be imported in
    #[arg(short = 't', long = "tenant", value_name = "ALIAS")]
    tenant: Option<String>,
}

/// `import-file <path> --file=<file> [--tenant=<alias>]`
///
/// POSTs the named file as a streamed request body. The file is opened by the
/// transport at write time, never eagerly.
pub struct ImportFile;

#[async_trait]
impl Command for ImportFile {
    fn name(&self) -> &'static str {
        "import-file"
    }

    fn description(&self) -> &'static str {
        "Import a file"
    }

    fn help(&self) -> String {
        args::render_help::<ImportFileArgs>()
    }

    async fn invoke(&self, session: &Session, raw_args: &[String]) -> Result<CommandOutput> {
        let argv: ImportFileArgs = args::parse(self.name(), raw_args)?;

        // Path validation happens first, before the context or the payload is
        // touched, so malformed input never allocates anything.
        let raw_path = match argv.path {
            Some(p) if !p.trim().is_empty() => p,
            _ => {
                return Err(self.validation(
                    "path",
                    "Must specify a request path (e.g., \"/api/journals/import\")",
                ))
            }
        };
        let path = rest::parse_request_path(&raw_path).map_err(|msg| {
            self.validation(
                "path",
                &format!("Provided path failed to be parsed as a URL: {}", msg),
            )
        })?;

        let file = match argv.file {
            Some(f) => f,
            None => {
                return Err(self.validation(
                    "F",
                    "Must use the \"F\" parameter to specify the file to import",
                ))
            }
        };

        let opts = RequestOptions {
            tenant: argv.tenant,
            payload: Payload::Stream(file_stream_factory(file)),
        };

        let ctx = session.current();
        let body = session
            .client()
            .request(ctx, &path, Method::POST, opts)
            .await?;

        Ok(CommandOutput::text(body.render()))
    }
}
