//! coshell - main entry point

use clap::Parser;
use log::{debug, info};

use coshell::{render_error, Cli, RestClient, Session, SessionStore, Shell};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting coshell v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(cli).await {
        render_error(&err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> coshell::Result<()> {
    let store = match &cli.config {
        Some(path) => SessionStore::with_path(path.clone()),
        None => SessionStore::new(),
    };
    let config = store.load()?;
    let session = Session::bind(config, cli.env.as_deref(), RestClient::new())?;

    match cli.command {
        Some(line) => {
            debug!("One-shot command line: {}", line);
            let shell = Shell::new(session, true);
            shell.dispatch(&line).await.map(|_| ())
        }
        None => Shell::new(session, false).run().await,
    }
}
