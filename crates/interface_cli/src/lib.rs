//! Command Line Layer
//!
//! Reads a business entity lodgement from JSON, runs it through the
//! validation engine and reports the outcome.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::check_file;
//!
//! let report = check_file("lodgement.json".as_ref())?;
//! println!("{}", report.render(true));
//! std::process::exit(report.exit_code());
//! ```

pub mod config;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::info;

use domain_lodgement::{BusinessEntity, BusinessEntityValidator, ValidationSummary};

/// Result of checking one lodgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum CheckReport {
    Accepted { summary: ValidationSummary },
    Rejected { code: String, message: String },
}

impl CheckReport {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CheckReport::Accepted { .. })
    }

    /// Process exit code: 0 when accepted, 1 when rejected
    pub fn exit_code(&self) -> i32 {
        if self.is_accepted() {
            0
        } else {
            1
        }
    }

    /// Text printed to stdout
    pub fn render(&self, with_summary: bool) -> Result<String> {
        match self {
            CheckReport::Accepted { summary } if with_summary => Ok(format!(
                "ACCEPTED\n{}",
                serde_json::to_string_pretty(summary).context("serializing validation summary")?
            )),
            CheckReport::Accepted { .. } => Ok("ACCEPTED".to_string()),
            CheckReport::Rejected { code, message } => Ok(format!("REJECTED {}: {}", code, message)),
        }
    }
}

/// Validates a lodgement given as JSON text, as of `today`
pub fn check_json(input: &str, today: NaiveDate) -> Result<CheckReport> {
    let entity: BusinessEntity = serde_json::from_str(input).context("parsing business entity JSON")?;
    let report = match BusinessEntityValidator::validate_as_of(&entity, today) {
        Ok(validated) => CheckReport::Accepted {
            summary: validated.validation_summary(),
        },
        Err(e) => CheckReport::Rejected {
            code: e.code(),
            message: e.to_string(),
        },
    };
    info!(owner_type = %entity.owner_type, accepted = report.is_accepted(), "lodgement checked");
    Ok(report)
}

/// Validates the lodgement stored in `path`
pub fn check_file(path: &Path) -> Result<CheckReport> {
    let input = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    check_json(&input, Utc::now().date_naive())
}
