use anyhow::Result;
use clap::Parser;
use resident_validator_cli::{run_validation, Args};
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the verdict
    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("Validating {} request from {}", args.operation, args.request.display());

    match run_validation(&args) {
        Ok(verdict) => {
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            if !verdict.is_accepted() {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}
