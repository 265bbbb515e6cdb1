//! ninjacsv - NinjaRMM device counts per customer, as CSV

use std::io::Write;

use clap::Parser;
use log::debug;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod report;

use cli::Cli;
use client::NinjaClient;
use config::Config;
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = Config::from_env(cli.api_host.as_deref());
    debug!("Using API host {}", config.api_host);

    let client = NinjaClient::new(config)?;
    let output = cli::report::run(&client, cli.format).await?;

    // Nothing reaches stdout until every organization has been processed
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Debug);
    }
    builder.init();
}
