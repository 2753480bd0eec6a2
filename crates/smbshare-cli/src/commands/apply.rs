//! Apply command: write the configuration and reload Samba.

use smbshare_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Generate, write atomically, and reload.
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let services = super::build_services(&config);
    let outcome = services.config.apply().await?;

    match format {
        OutputFormat::Json => output::print_json(&outcome),
        OutputFormat::Table => {
            output::print_success("Configuration applied");
            output::print_kv("File", &outcome.report.config_path);
            output::print_kv("Shares", &outcome.share_count.to_string());
            output::print_kv("Skipped", &outcome.warnings.len().to_string());
            output::print_kv("Reloaded", if outcome.report.reloaded { "yes" } else { "no" });
            output::print_kv("Applied at", &outcome.report.applied_at.to_rfc3339());
            for warning in &outcome.warnings {
                output::print_warning(&format!("Skipped share '{}'", warning.name));
            }
        }
    }

    Ok(())
}
