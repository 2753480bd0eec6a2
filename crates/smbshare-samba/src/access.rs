//! Resolves the raw user-access field into a canonical principal map.

use std::collections::BTreeMap;

use smbshare_entity::share::{AccessLevel, AccessModelInput};
use tracing::{debug, warn};

use crate::directive::strip_newlines;

/// Canonical principal to access-level mapping, ordered by principal.
pub type AccessMap = BTreeMap<String, AccessLevel>;

/// Resolve any user-access representation. Never fails.
///
/// Malformed JSON text, non-object JSON, or absent input resolve to an
/// empty map, which grants nobody anything. Principal names are
/// newline-stripped here; names that strip to nothing are dropped, and
/// when two raw names collapse onto the same principal the less
/// privileged level wins. Names containing a Samba list separator
/// (whitespace, `,`, `;`) or a quote are dropped, since they would
/// split into several principals once rendered.
pub fn resolve_access(input: &AccessModelInput) -> AccessMap {
    match input {
        AccessModelInput::Decoded(map) => canonicalize(map),
        AccessModelInput::JsonText(text) => {
            if text.trim().is_empty() {
                return AccessMap::new();
            }
            match serde_json::from_str::<serde_json::Value>(text) {
                Ok(serde_json::Value::Object(map)) => canonicalize(&map),
                Ok(_) => {
                    debug!("User access JSON is not an object, granting nothing");
                    AccessMap::new()
                }
                Err(e) => {
                    debug!(error = %e, "User access JSON failed to parse, granting nothing");
                    AccessMap::new()
                }
            }
        }
        AccessModelInput::Absent => AccessMap::new(),
    }
}

fn canonicalize(raw: &serde_json::Map<String, serde_json::Value>) -> AccessMap {
    let mut resolved = AccessMap::new();
    for (name, value) in raw {
        let principal = strip_newlines(name);
        if principal.trim().is_empty() {
            continue;
        }
        if principal.chars().any(is_list_separator) {
            warn!(principal = %principal, "Dropping principal containing a list separator");
            continue;
        }
        let level = AccessLevel::from_json(value);
        resolved
            .entry(principal)
            .and_modify(|existing| *existing = least_privileged(*existing, level))
            .or_insert(level);
    }
    resolved
}

fn is_list_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '"')
}

fn least_privileged(a: AccessLevel, b: AccessLevel) -> AccessLevel {
    match (a, b) {
        (AccessLevel::NoAccess, _) | (_, AccessLevel::NoAccess) => AccessLevel::NoAccess,
        (AccessLevel::ReadOnly, _) | (_, AccessLevel::ReadOnly) => AccessLevel::ReadOnly,
        _ => AccessLevel::ReadWrite,
    }
}

/// Principals split by what they are eligible for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessPartition {
    /// Principals with `read-write`.
    pub write_eligible: Vec<String>,
    /// Principals with `read-write` or `read-only`.
    pub valid_eligible: Vec<String>,
}

impl AccessPartition {
    /// Partition a resolved map. `no-access` principals land nowhere.
    pub fn from_map(map: &AccessMap) -> Self {
        let mut partition = Self::default();
        for (principal, level) in map {
            if level.can_write() {
                partition.write_eligible.push(principal.clone());
            }
            if level.can_read() {
                partition.valid_eligible.push(principal.clone());
            }
        }
        partition
    }
}
