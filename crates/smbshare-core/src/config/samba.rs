//! Generated Samba configuration settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Controls how the share configuration text is rendered and applied.
///
/// The generated file is meant to be pulled into the daemon's main
/// `smb.conf` with an `include =` line, so by default it carries no
/// `[global]` section. Populate `global` to emit one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SambaConfig {
    /// Destination of the generated configuration text.
    #[serde(default = "default_config_path")]
    #[validate(length(min = 1))]
    pub config_path: String,

    /// Command run after the file is written. Empty disables reload.
    #[serde(default = "default_reload_command")]
    pub reload_command: Vec<String>,

    /// Upper bound on the reload command's runtime.
    #[serde(default = "default_reload_timeout_seconds")]
    #[validate(range(min = 1, max = 600))]
    pub reload_timeout_seconds: u64,

    /// Spaces used to indent directive lines inside a section.
    #[serde(default = "default_indent_width")]
    #[validate(range(max = 8))]
    pub indent_width: usize,

    /// Whether to prefix the file with a "generated, do not edit" comment.
    #[serde(default = "default_header_comment")]
    pub header_comment: bool,

    /// Key/value pairs for an optional leading `[global]` section.
    #[serde(default)]
    pub global: BTreeMap<String, String>,
}

impl Default for SambaConfig {
    fn default() -> Self {
        Self {
            config_path: default_config_path(),
            reload_command: default_reload_command(),
            reload_timeout_seconds: default_reload_timeout_seconds(),
            indent_width: default_indent_width(),
            header_comment: default_header_comment(),
            global: BTreeMap::new(),
        }
    }
}

impl SambaConfig {
    /// The indentation prefix for directive lines.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }

    /// Whether a reload command is configured.
    pub fn reload_enabled(&self) -> bool {
        self.reload_command.first().is_some_and(|c| !c.is_empty())
    }
}

fn default_config_path() -> String {
    "/etc/samba/smb-shares.conf".to_string()
}

fn default_reload_command() -> Vec<String> {
    vec![
        "smbcontrol".to_string(),
        "all".to_string(),
        "reload-config".to_string(),
    ]
}

fn default_reload_timeout_seconds() -> u64 {
    30
}

fn default_indent_width() -> usize {
    4
}

fn default_header_comment() -> bool {
    true
}
