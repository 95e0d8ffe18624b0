use anyhow::{Context, Result};
use clap::Parser;
use resident_validator::{Operation, RequestValidator, ValidatorConfig, Verdict};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Clone, Debug)]
#[command(name = "resident-validator-cli")]
#[command(about = "Validate resident service request envelopes")]
#[command(version)]
#[command(
    long_about = "Validate a resident service request envelope stored as JSON.

Prints the verdict as JSON on stdout and exits non-zero when the request is rejected.

Examples:
  # Validate an auth lock request with the default configuration
  resident-validator-cli --operation auth-lock --request ./lock.json

  # Validate an auth history request against a custom configuration
  resident-validator-cli --operation auth-history --request ./history.json --config ./validator.json

Operations: auth-lock, auth-unlock, e-uin, auth-history, reprint"
)]
pub struct Args {
    /// Operation the envelope is addressed to
    #[arg(long)]
    pub operation: Operation,

    /// Path to the JSON request envelope
    #[arg(long)]
    pub request: PathBuf,

    /// Optional JSON validator configuration; built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, default_value = "false")]
    pub debug: bool,
}

pub fn validate_args(args: &Args) -> Result<()> {
    if !args.request.is_file() {
        return Err(anyhow::anyhow!(
            "Request file does not exist: {}. Please check that the path is correct.",
            args.request.display()
        ));
    }

    if let Some(config) = &args.config {
        if !config.is_file() {
            return Err(anyhow::anyhow!(
                "Config file does not exist: {}. Please check that the path is correct.",
                config.display()
            ));
        }
    }

    Ok(())
}

pub fn load_config(args: &Args) -> Result<ValidatorConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading validator config from {}", path.display());
            Ok(ValidatorConfig::from_file(path)?)
        }
        None => Ok(ValidatorConfig::default()),
    }
}

/// Validate the request file named by `args` and return the verdict
pub fn run_validation(args: &Args) -> Result<Verdict> {
    validate_args(args)?;

    let config = load_config(args)?;
    let validator = RequestValidator::with_reference_checkers(Arc::new(config))?;

    let raw = std::fs::read_to_string(&args.request)
        .with_context(|| format!("Failed to read request file {}", args.request.display()))?;

    let result = validator
        .validate_json(args.operation, &raw)
        .with_context(|| format!("Failed to decode request envelope for '{}'", args.operation))?;

    let verdict = Verdict::from(result);
    info!("Validation finished: operation={}, accepted={}", args.operation, verdict.is_accepted());

    Ok(verdict)
}
