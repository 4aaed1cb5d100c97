//! Fetch a resource from the platform

use async_trait::async_trait;
use clap::Parser;
use reqwest::Method;

use crate::error::Result;
use crate::rest::{self, RequestOptions};
use crate::session::Session;

use super::{args, Command, CommandOutput};

#[derive(Parser, Debug)]
#[command(
    name = "get",
    about = "Fetch a resource",
    override_usage = "get <path (e.g., \"/api/tenant/current\")> [--tenant=<tenant alias>]"
)]
struct GetArgs {
    /// The request path to fetch
    path: Option<String>,

    /// The tenant to run the request against
    #[arg(short = 't', long = "tenant", value_name = "ALIAS")]
    tenant: Option<String>,
}

/// `get <path> [--tenant=<alias>]`
///
/// GETs a resource and prints the classified response body.
pub struct Get;

#[async_trait]
impl Command for Get {
    fn name(&self) -> &'static str {
        "get"
    }

    fn description(&self) -> &'static str {
        "Fetch a resource"
    }

    fn help(&self) -> String {
        args::render_help::<GetArgs>()
    }

    async fn invoke(&self, session: &Session, raw_args: &[String]) -> Result<CommandOutput> {
        let argv: GetArgs = args::parse(self.name(), raw_args)?;

        let raw_path = match argv.path {
            Some(p) if !p.trim().is_empty() => p,
            _ => {
                return Err(self.validation(
                    "path",
                    "Must specify a request path (e.g., \"/api/tenant/current\")",
                ))
            }
        };
        let path = rest::parse_request_path(&raw_path).map_err(|msg| {
            self.validation(
                "path",
                &format!("Provided path failed to be parsed as a URL: {}", msg),
            )
        })?;

        let opts = RequestOptions {
            tenant: argv.tenant,
            ..Default::default()
        };

        let ctx = session.current();
        let body = session
            .client()
            .request(ctx, &path, Method::GET, opts)
            .await?;

        Ok(CommandOutput::text(body.render()))
    }
}
