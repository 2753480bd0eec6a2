//! Share security mode.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Guest/authentication policy of a share.
///
/// Absent or unrecognized values fall back to [`SecurityMode::Public`].
/// Access grants are fail-closed (see `AccessLevel`), the mode selector is
/// not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityMode {
    /// Guests may read and write.
    #[default]
    Public,
    /// Guests may read; only the write list may write.
    Secure,
    /// No guests; only listed principals may connect.
    Private,
}

impl SecurityMode {
    /// Parse a mode leniently. Anything unrecognized is `Public`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "secure" => Self::Secure,
            "private" => Self::Private,
            _ => Self::Public,
        }
    }

    /// Return the mode as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Secure => "secure",
            Self::Private => "private",
        }
    }

    /// Whether guests may connect at all.
    pub fn allows_guests(&self) -> bool {
        !matches!(self, Self::Private)
    }
}

impl fmt::Display for SecurityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SecurityMode {
    type Err = smbshare_core::AppError;

    /// Strict parse, for CLI and form inputs where a typo should be reported.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "secure" => Ok(Self::Secure),
            "private" => Ok(Self::Private),
            _ => Err(smbshare_core::AppError::validation(format!(
                "Invalid security mode: '{s}'"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for SecurityMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => Self::parse(&s),
            _ => Self::Public,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_defaults_to_public() {
        assert_eq!(SecurityMode::parse("paranoid"), SecurityMode::Public);
        assert_eq!(SecurityMode::parse(""), SecurityMode::Public);
        assert_eq!(SecurityMode::parse(" Private "), SecurityMode::Private);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert!("paranoid".parse::<SecurityMode>().is_err());
        assert_eq!("SECURE".parse::<SecurityMode>().ok(), Some(SecurityMode::Secure));
    }

    #[test]
    fn test_only_private_refuses_guests() {
        assert!(SecurityMode::Public.allows_guests());
        assert!(SecurityMode::Secure.allows_guests());
        assert!(!SecurityMode::Private.allows_guests());
    }

    #[test]
    fn test_deserialize_non_string_is_public() {
        let mode: SecurityMode = serde_json::from_str("42").expect("lenient");
        assert_eq!(mode, SecurityMode::Public);
        let mode: SecurityMode = serde_json::from_str("\"private\"").expect("known");
        assert_eq!(mode, SecurityMode::Private);
    }
}
