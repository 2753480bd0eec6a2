//! Validation report command.

use serde::Serialize;
use tabled::Tabled;

use smbshare_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Failure row for table output
#[derive(Debug, Serialize, Tabled)]
struct FailureRow {
    /// Position in the store
    index: usize,
    /// Share name
    name: String,
    /// Violated rules
    errors: String,
}

/// Validate every stored share. Fails when any share is invalid.
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let services = super::build_services(&config);
    let report = services.shares.validation_report().await?;

    match format {
        OutputFormat::Json => output::print_json(&report),
        OutputFormat::Table => {
            let rows: Vec<FailureRow> = report
                .failures
                .iter()
                .map(|f| FailureRow {
                    index: f.index,
                    name: f.name.clone(),
                    errors: f
                        .errors
                        .iter()
                        .map(|e| e.code())
                        .collect::<Vec<_>>()
                        .join(", "),
                })
                .collect();
            if !rows.is_empty() {
                output::print_list(&rows, format);
            }
        }
    }

    if report.is_valid() {
        output::print_success(&format!("All {} shares are valid", report.checked));
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{} of {} shares failed validation",
            report.failures.len(),
            report.checked
        )))
    }
}
