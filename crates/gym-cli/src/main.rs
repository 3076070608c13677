
use std::time::Duration;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gym_client::Connection;
use gym_cli::cli::{Cli, Command};

/// Log to stderr, RUST_LOG overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::init();
    init_logging(cli.verbose);

    let conn = Connection::open(&cli.api_url, Duration::from_secs(cli.timeout))?;
    debug!(api = %conn.base_url(), command = ?cli.command, "starting");
    let yes = cli.yes;
    match cli.command {
        Command::List(cmd) => cmd.run(&conn).await,
        Command::Show(cmd) => cmd.run(&conn).await,
        Command::Add(cmd) => cmd.run(&conn, yes).await,
        Command::Update(cmd) => cmd.run(&conn, yes).await,
        Command::Delete(cmd) => cmd.run(&conn, yes).await,
        Command::Expiration(cmd) => cmd.run(),
    }?;

    Ok(())
}
