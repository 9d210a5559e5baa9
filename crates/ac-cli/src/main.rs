//! ac - admin console CLI
//!
//! Each invocation is one application lifetime: the saved session is resolved,
//! the route guard runs for the command's view, then the command executes.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (password from the environment)
//! AC_PASSWORD=secret ac login --email root@example.com
//!
//! # Show the signed-in profile
//! ac me --pretty
//!
//! # Administer accounts
//! ac users list --limit 20
//! ac users update 7 --role admin
//! ```

use ac_cli::{Cli, CliResult, dispatch, logger};
use ac_config::Config;
use ac_session::{Client, FileTokenStore, SessionStore};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load and validate configuration, --api-url wins over file and env
    let mut config = Config::load()?;
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }
    config.validate()?;

    let log_file = config.logging.file.as_ref().map(PathBuf::from);
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let client = Client::from_config(&config.api)?;
    let tokens = FileTokenStore::new(config.token_path()?);
    let session = SessionStore::from_config(client, tokens, &config.session);
    session.initialize().await;

    let value = dispatch::execute(&session, cli.command, config.api.page_size).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", output);

    Ok(())
}
