//! Share entity model.

use serde::{Deserialize, Deserializer, Serialize};

use super::access::AccessModelInput;
use super::security::SecurityMode;

/// One exported SMB share as stored and as submitted by clients.
///
/// Every field except `name` and `path` is optional on the wire. Text
/// fields also accept numbers and booleans (a hand-edited `"create_mask":
/// 664` becomes `"664"`), so a mistyped record fails validation on its
/// own instead of breaking the whole list. The struct is never mutated by
/// the config builders; they read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Share {
    /// Section header in the generated config. Unique within the store.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    /// Exported filesystem location, under `/mnt/`.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub path: String,
    /// Free-text description.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_text"
    )]
    pub comment: Option<String>,
    /// Guest/authentication policy.
    #[serde(default)]
    pub security: SecurityMode,
    /// Principal to access-level mapping, raw.
    #[serde(default, skip_serializing_if = "AccessModelInput::is_absent")]
    pub user_access: AccessModelInput,
    /// Four-digit octal create mask.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_text"
    )]
    pub create_mask: Option<String>,
    /// Four-digit octal directory mask.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_text"
    )]
    pub directory_mask: Option<String>,
    /// OS user Samba writes files as.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_text"
    )]
    pub force_user: Option<String>,
    /// OS group Samba writes files as.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_text"
    )]
    pub force_group: Option<String>,
    /// Address/CIDR patterns allowed to connect.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_text"
    )]
    pub hosts_allow: Option<String>,
    /// Address/CIDR patterns refused.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_text"
    )]
    pub hosts_deny: Option<String>,
    /// Hide files starting with a dot. Defaults to yes.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_flag"
    )]
    pub hide_dot_files: Option<bool>,
}

impl Share {
    /// Create a share with just a name and path; everything else defaults.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the security mode.
    pub fn with_security(mut self, security: SecurityMode) -> Self {
        self.security = security;
        self
    }

    /// Set the raw user-access information.
    pub fn with_user_access(mut self, user_access: AccessModelInput) -> Self {
        self.user_access = user_access;
        self
    }

    /// Set the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Effective hide-dot-files flag.
    pub fn hides_dot_files(&self) -> bool {
        self.hide_dot_files.unwrap_or(true)
    }
}

/// Parse a yes/no style flag. Returns `None` for anything unrecognized.
pub fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" | "on" => Some(true),
        "no" | "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Accept `true`/`false` or a yes/no string; anything else is unset.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => Some(b),
        serde_json::Value::String(s) => parse_yes_no(&s),
        _ => None,
    })
}

/// Accept a string or a scalar rendered as text. Null, arrays and
/// objects are unset.
fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_text(deserializer)?.unwrap_or_default())
}
