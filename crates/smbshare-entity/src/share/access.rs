//! Per-principal access levels and the raw user-access representation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Access a principal has on a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
    /// May read and write.
    ReadWrite,
    /// May read only.
    ReadOnly,
    /// No grant.
    NoAccess,
}

impl AccessLevel {
    /// Parse an access level. Unknown strings grant nothing.
    pub fn parse(value: &str) -> Self {
        match value {
            "read-write" => Self::ReadWrite,
            "read-only" => Self::ReadOnly,
            _ => Self::NoAccess,
        }
    }

    /// Coerce an arbitrary JSON value. Non-strings grant nothing.
    pub fn from_json(value: &serde_json::Value) -> Self {
        value.as_str().map(Self::parse).unwrap_or(Self::NoAccess)
    }

    /// Return the level as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadWrite => "read-write",
            Self::ReadOnly => "read-only",
            Self::NoAccess => "no-access",
        }
    }

    /// Whether the principal belongs on the write list.
    pub fn can_write(&self) -> bool {
        matches!(self, Self::ReadWrite)
    }

    /// Whether the principal may connect at all.
    pub fn can_read(&self) -> bool {
        matches!(self, Self::ReadWrite | Self::ReadOnly)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccessLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

/// The user-access field as it arrives from a client or the store.
///
/// Forms post it as JSON text, API clients and the store send an object.
/// Anything else (null, numbers, arrays) is `Absent`. Resolution into a
/// canonical principal map happens once, in `smbshare-samba`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AccessModelInput {
    /// JSON-encoded mapping, not yet decoded.
    JsonText(String),
    /// Already-decoded mapping of principal to level value.
    Decoded(serde_json::Map<String, serde_json::Value>),
    /// No user-access information.
    #[default]
    Absent,
}

impl AccessModelInput {
    /// Build a decoded mapping from `(principal, level)` pairs.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, AccessLevel)>,
        K: Into<String>,
    {
        Self::Decoded(
            pairs
                .into_iter()
                .map(|(k, level)| (k.into(), serde_json::Value::from(level.as_str())))
                .collect(),
        )
    }

    /// Whether no access information was supplied.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<serde_json::Value> for AccessModelInput {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => Self::JsonText(text),
            serde_json::Value::Object(map) => Self::Decoded(map),
            _ => Self::Absent,
        }
    }
}

impl Serialize for AccessModelInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::JsonText(text) => serializer.serialize_str(text),
            Self::Decoded(map) => map.serialize(serializer),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for AccessModelInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_level_is_no_access() {
        assert_eq!(AccessLevel::parse("admin"), AccessLevel::NoAccess);
        assert_eq!(AccessLevel::parse("READ-WRITE"), AccessLevel::NoAccess);
        assert_eq!(AccessLevel::from_json(&json!(1)), AccessLevel::NoAccess);
        assert_eq!(AccessLevel::parse("read-only"), AccessLevel::ReadOnly);
    }

    #[test]
    fn test_input_classification() {
        assert!(matches!(
            AccessModelInput::from(json!("{\"a\":\"read-only\"}")),
            AccessModelInput::JsonText(_)
        ));
        assert!(matches!(
            AccessModelInput::from(json!({ "a": "read-only" })),
            AccessModelInput::Decoded(_)
        ));
        assert!(AccessModelInput::from(json!(["a"])).is_absent());
        assert!(AccessModelInput::from(json!(null)).is_absent());
    }

    #[test]
    fn test_serialize_preserves_shape() {
        let text = AccessModelInput::JsonText("{}".to_string());
        assert_eq!(serde_json::to_value(&text).expect("ser"), json!("{}"));

        let decoded = AccessModelInput::from_pairs([("admin", AccessLevel::ReadWrite)]);
        assert_eq!(
            serde_json::to_value(&decoded).expect("ser"),
            json!({ "admin": "read-write" })
        );
    }
}
