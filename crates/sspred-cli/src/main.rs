mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

use crate::cli::Cli;
use crate::error::Result;
use clap::{CommandFactory, Parser};
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("🚀 sspred CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let Some(sequence) = cli.sequence.as_deref() else {
        println!("Please provide a sequence as a command-line argument.");
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    let result = commands::predict::run(sequence, &cli);
    match &result {
        Ok(()) => info!("✅ Prediction completed successfully."),
        Err(e) => error!("❌ Prediction failed: {}", e),
    }
    result
}
