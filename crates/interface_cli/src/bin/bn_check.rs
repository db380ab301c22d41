//! Business Name Lodgement Checker
//!
//! Validates a business entity lodgement stored as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Validate a lodgement
//! cargo run --bin bn-check -- lodgement.json
//!
//! # Also print the owner type's requirements and partner tally
//! cargo run --bin bn-check -- lodgement.json --summary
//!
//! # Check the register settings
//! cargo run --bin bn-check -- --check-config
//! ```
//!
//! Exit codes: 0 accepted, 1 rejected, 2 unreadable input or bad configuration.
//!
//! # Environment Variables
//!
//! * `BN_LOG_LEVEL` - Log level (default: warn)
//! * `BN_LOG_FORMAT` - `text` or `json` (default: text)
//! * `BN_REGISTER__*` - Register sender and endpoint settings

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::{check_file, config::CliConfig};

/// Validates business name lodgements
#[derive(Parser)]
#[command(name = "bn-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Lodgement JSON file
    #[arg(required_unless_present = "check_config")]
    file: Option<PathBuf>,

    /// Print the validation summary of an accepted lodgement
    #[arg(long)]
    summary: bool,

    /// Check the register configuration and exit
    #[arg(long)]
    check_config: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_env().context("loading BN_ configuration")?;
    config.validate()?;
    init_tracing(&config);

    if cli.check_config {
        config.register.validate()?;
        println!("register configuration OK");
        return Ok(ExitCode::SUCCESS);
    }

    let Some(file) = cli.file else {
        bail!("no lodgement file given");
    };
    tracing::debug!(file = %file.display(), "checking lodgement");

    let report = check_file(&file)?;
    println!("{}", report.render(cli.summary)?);
    Ok(if report.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Initializes the tracing subscriber, writing to stderr
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_json_logging() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
