//! Configuration generation command.

use std::path::Path;

use clap::Args;

use smbshare_core::error::AppError;
use smbshare_store::atomic::write_atomic;

use crate::output;

/// Arguments for `generate`
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Render the stored shares. Skipped shares are reported on stderr.
///
/// `--output` replaces the target atomically, so it may point at a file
/// the daemon is already including.
pub async fn execute(args: &GenerateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let services = super::build_services(&config);
    let generated = services.config.preview().await?;

    for warning in &generated.warnings {
        let codes: Vec<&str> = warning.errors.iter().map(|e| e.code()).collect();
        output::print_warning(&format!(
            "Skipped share #{} '{}': {}",
            warning.index,
            warning.name,
            codes.join(", ")
        ));
    }

    match &args.output {
        Some(path) => {
            write_atomic(Path::new(path), generated.text.into_bytes()).await?;
            output::print_success(&format!(
                "Wrote {} shares to '{}'",
                generated.share_count, path
            ));
        }
        None => print!("{}", generated.text),
    }

    Ok(())
}
