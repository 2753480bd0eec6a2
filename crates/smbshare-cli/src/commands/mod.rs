//! CLI command definitions and dispatch.

pub mod apply;
pub mod check;
pub mod config;
pub mod generate;
pub mod share;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use smbshare_core::config::AppConfig;
use smbshare_core::error::AppError;
use smbshare_entity::share::Share;
use smbshare_samba::assembler::ConfigAssembler;
use smbshare_service::{ConfigService, ShareService};
use smbshare_store::{ConfigApplier, JsonFileStore, ShareRepository};

use crate::output::OutputFormat;

/// SmbShare: manage SMB shares and the generated Samba configuration
#[derive(Debug, Parser)]
#[command(name = "smbshare", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "SMBSHARE_CONFIG", default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Share management
    Share(share::ShareArgs),
    /// Validate every stored share
    Check,
    /// Print or write the generated Samba configuration
    Generate(generate::GenerateArgs),
    /// Write the generated configuration and reload Samba
    Apply,
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Share(args) => share::execute(args, &self.config, self.format).await,
            Commands::Check => check::execute(&self.config, self.format).await,
            Commands::Generate(args) => generate::execute(args, &self.config).await,
            Commands::Apply => apply::execute(&self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Services wired over the JSON share store named in the configuration.
pub struct Services {
    /// Share CRUD
    pub shares: ShareService,
    /// Preview and apply
    pub config: ConfigService,
}

/// Helper: build services from configuration
pub fn build_services(config: &AppConfig) -> Services {
    let store = Arc::new(JsonFileStore::<Share>::new(&config.store.path));
    let repo = Arc::new(ShareRepository::new(store));
    Services {
        shares: ShareService::new(Arc::clone(&repo)),
        config: ConfigService::new(
            repo,
            Arc::new(ConfigAssembler::new(&config.samba)),
            Arc::new(ConfigApplier::new(&config.samba)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_share_add() {
        let cli = Cli::try_parse_from([
            "smbshare",
            "--format",
            "json",
            "share",
            "add",
            "media",
            "/mnt/media",
            "--security",
            "private",
            "--access",
            "admin=read-write",
            "--access",
            "guest=read-only",
        ])
        .expect("parse");
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Share(args) => match args.command {
                share::ShareCommand::Add(add) => {
                    assert_eq!(add.name, "media");
                    assert_eq!(add.access.len(), 2);
                }
                other => panic!("unexpected share command: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_generate_output() {
        let cli = Cli::try_parse_from(["smbshare", "generate", "--output", "/tmp/x.conf"])
            .expect("parse");
        match cli.command {
            Commands::Generate(args) => assert_eq!(args.output.as_deref(), Some("/tmp/x.conf")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_security() {
        let result = Cli::try_parse_from([
            "smbshare", "share", "add", "a", "/mnt/a", "--security", "fortress",
        ]);
        assert!(result.is_err());
    }
}
