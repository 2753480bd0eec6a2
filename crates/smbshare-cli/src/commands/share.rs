//! Share management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use smbshare_core::error::AppError;
use smbshare_entity::share::{AccessLevel, AccessModelInput, SecurityMode, Share};
use smbshare_samba::access::resolve_access;

use crate::output::{self, OutputFormat};

/// Arguments for share commands
#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Share subcommand
    #[command(subcommand)]
    pub command: ShareCommand,
}

/// Share subcommands
#[derive(Debug, Subcommand)]
pub enum ShareCommand {
    /// List all shares
    List,
    /// Show one share
    Show {
        /// Share name
        name: String,
    },
    /// Add a share
    Add(AddShareArgs),
    /// Remove a share
    Remove {
        /// Share name
        name: String,
    },
}

/// Arguments for `share add`
#[derive(Debug, Args)]
pub struct AddShareArgs {
    /// Share name (letters, digits, '_' and '-')
    pub name: String,
    /// Exported path under /mnt/
    pub path: String,
    /// Description
    #[arg(long)]
    pub comment: Option<String>,
    /// Security mode: public, secure or private
    #[arg(long, default_value = "public")]
    pub security: SecurityMode,
    /// Principal access as user=level (read-write, read-only, no-access)
    #[arg(long = "access", value_parser = parse_access)]
    pub access: Vec<(String, AccessLevel)>,
    /// Four-digit octal create mask
    #[arg(long)]
    pub create_mask: Option<String>,
    /// Four-digit octal directory mask
    #[arg(long)]
    pub directory_mask: Option<String>,
    /// Force file ownership to this user
    #[arg(long)]
    pub force_user: Option<String>,
    /// Force file ownership to this group
    #[arg(long)]
    pub force_group: Option<String>,
    /// Hosts allowed to connect
    #[arg(long)]
    pub hosts_allow: Option<String>,
    /// Hosts refused
    #[arg(long)]
    pub hosts_deny: Option<String>,
    /// Show dot files instead of hiding them
    #[arg(long)]
    pub show_dot_files: bool,
}

impl AddShareArgs {
    fn to_share(&self) -> Share {
        let user_access = if self.access.is_empty() {
            AccessModelInput::Absent
        } else {
            AccessModelInput::from_pairs(self.access.iter().cloned())
        };
        Share {
            name: self.name.clone(),
            path: self.path.clone(),
            comment: self.comment.clone(),
            security: self.security,
            user_access,
            create_mask: self.create_mask.clone(),
            directory_mask: self.directory_mask.clone(),
            force_user: self.force_user.clone(),
            force_group: self.force_group.clone(),
            hosts_allow: self.hosts_allow.clone(),
            hosts_deny: self.hosts_deny.clone(),
            hide_dot_files: self.show_dot_files.then_some(false),
        }
    }
}

/// Share display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ShareRow {
    /// Name
    name: String,
    /// Path
    path: String,
    /// Security mode
    security: String,
    /// Principals with any access
    users: String,
    /// Comment
    comment: String,
}

impl From<&Share> for ShareRow {
    fn from(share: &Share) -> Self {
        let users = resolve_access(&share.user_access)
            .into_iter()
            .filter(|(_, level)| level.can_read())
            .map(|(principal, level)| format!("{principal}:{level}"))
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            name: share.name.clone(),
            path: share.path.clone(),
            security: share.security.to_string(),
            users,
            comment: share.comment.clone().unwrap_or_default(),
        }
    }
}

/// Parse a `user=level` pair. Levels are matched exactly.
fn parse_access(value: &str) -> Result<(String, AccessLevel), String> {
    let (user, level) = value
        .split_once('=')
        .ok_or_else(|| format!("expected user=level, got '{value}'"))?;
    let user = user.trim();
    if user.is_empty() {
        return Err("user must not be empty".to_string());
    }
    let parsed = AccessLevel::parse(level.trim());
    if parsed.as_str() != level.trim() {
        return Err(format!(
            "unknown access level '{level}', expected read-write, read-only or no-access"
        ));
    }
    Ok((user.to_string(), parsed))
}

/// Execute share commands
pub async fn execute(
    args: &ShareArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let services = super::build_services(&config);

    match &args.command {
        ShareCommand::List => {
            let shares = services.shares.list_shares().await?;
            match format {
                OutputFormat::Table => {
                    let rows: Vec<ShareRow> = shares.iter().map(ShareRow::from).collect();
                    output::print_list(&rows, format);
                }
                OutputFormat::Json => output::print_json(&shares),
            }
        }
        ShareCommand::Show { name } => {
            let share = services.shares.get_share(name).await?;
            output::print_item(&share, format);
        }
        ShareCommand::Add(add) => {
            let share = services.shares.create_share(add.to_share()).await?;
            output::print_success(&format!("Share '{}' added at {}", share.name, share.path));
        }
        ShareCommand::Remove { name } => {
            let share = services.shares.delete_share(name).await?;
            output::print_success(&format!("Share '{}' removed", share.name));
        }
    }

    Ok(())
}
