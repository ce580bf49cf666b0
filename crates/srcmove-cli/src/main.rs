//! CLI entry point - the composition root.

use clap::Parser;
use srcmove_cli::{Cli, CliConfig, init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads `env` defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let config = CliConfig::from_cli(&cli);
    if let Err(err) = run(&config, &cli.command).await {
        eprintln!("srcmove: {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}
