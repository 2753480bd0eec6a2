//! Stitches per-share directives into a complete configuration file.

use std::collections::BTreeMap;

use serde::Serialize;
use smbshare_core::config::SambaConfig;
use smbshare_entity::share::Share;
use tracing::{debug, warn};

use crate::directive::Directives;
use crate::error::ValidationError;
use crate::hosts::host_access_directives;
use crate::permission::permission_directives;
use crate::sanitizer::sanitize_share;
use crate::security::security_directives;
use crate::validator::{ShareValidation, validate};

const HEADER: &str = "# Generated by smbshare. Manual edits will be overwritten.";

/// Output of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedConfig {
    /// Complete configuration text.
    pub text: String,
    /// Shares left out because they failed validation, in input order.
    pub warnings: Vec<ShareValidation>,
    /// Number of share sections in `text`.
    pub share_count: usize,
}

impl GeneratedConfig {
    /// Whether any share was skipped.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Renders shares into Samba configuration text.
#[derive(Debug, Clone)]
pub struct ConfigAssembler {
    indent: String,
    header_comment: bool,
    global: BTreeMap<String, String>,
}

impl Default for ConfigAssembler {
    fn default() -> Self {
        Self::new(&SambaConfig::default())
    }
}

impl ConfigAssembler {
    /// Build an assembler from the `[samba]` settings.
    pub fn new(config: &SambaConfig) -> Self {
        Self {
            indent: config.indent(),
            header_comment: config.header_comment,
            global: config.global.clone(),
        }
    }

    /// Directives for one share section, in emission order. Does not
    /// validate.
    pub fn share_directives(&self, share: &Share) -> Directives {
        let mut directives = Directives::new();
        directives
            .push("path", &share.path)
            .push_opt("comment", share.comment.as_deref())
            .push_bool("browseable", true)
            .extend(security_directives(share))
            .extend(permission_directives(share))
            .extend(host_access_directives(share));
        directives
    }

    /// Render one `[name]` stanza. The share must already be valid.
    pub fn stanza(&self, share: &Share) -> String {
        let mut out = format!("[{}]\n", share.name);
        out.push_str(&self.share_directives(share).render(&self.indent));
        out
    }

    /// Sanitize, validate and render every share in input order.
    ///
    /// Invalid shares are skipped and reported in `warnings`; they never
    /// abort the run. Duplicate names are emitted as given.
    pub fn generate(&self, shares: &[Share]) -> GeneratedConfig {
        let mut sections = Vec::with_capacity(shares.len() + 1);
        let mut warnings = Vec::new();

        if !self.global.is_empty() {
            let mut global = Directives::new();
            for (key, value) in &self.global {
                global.push(key, value);
            }
            sections.push(format!("[global]\n{}", global.render(&self.indent)));
        }

        let mut share_count = 0;
        for (index, share) in shares.iter().enumerate() {
            let share = sanitize_share(share.clone());
            match validate(&share) {
                Ok(()) => {
                    sections.push(self.stanza(&share));
                    share_count += 1;
                }
                Err(errors) => {
                    warn!(
                        index,
                        share = %share.name,
                        errors = %error_codes(&errors),
                        "Skipping invalid share"
                    );
                    warnings.push(ShareValidation {
                        index,
                        name: share.name,
                        errors,
                    });
                }
            }
        }

        let mut text = String::new();
        if self.header_comment {
            text.push_str(HEADER);
            text.push_str("\n\n");
        }
        text.push_str(&sections.join("\n"));

        debug!(
            shares = shares.len(),
            emitted = share_count,
            skipped = warnings.len(),
            "Generated Samba configuration"
        );

        GeneratedConfig {
            text,
            warnings,
            share_count,
        }
    }
}

/// Generate with default settings.
pub fn generate_samba_config(shares: &[Share]) -> GeneratedConfig {
    ConfigAssembler::default().generate(shares)
}

fn error_codes(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::code)
        .collect::<Vec<_>>()
        .join(",")
}
