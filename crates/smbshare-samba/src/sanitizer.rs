//! Structural cleanup of raw share input.

use std::collections::BTreeMap;

use smbshare_entity::share::{AccessModelInput, SecurityMode, Share, parse_yes_no};
use tracing::debug;

/// Flat form attributes, as posted by the share edit form.
pub type Attributes = BTreeMap<String, String>;

/// Trim every value and drop keys whose trimmed value is empty.
pub fn sanitize(raw: &Attributes) -> Attributes {
    raw.iter()
        .filter_map(|(key, value)| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| (key.clone(), trimmed.to_string()))
        })
        .collect()
}

/// Apply the same trimming rule to a structured share.
///
/// Optional strings that trim to nothing become `None`; user-access JSON
/// text that trims to nothing becomes `Absent`.
pub fn sanitize_share(share: Share) -> Share {
    let user_access = match share.user_access {
        AccessModelInput::JsonText(text) => match text.trim() {
            "" => AccessModelInput::Absent,
            trimmed => AccessModelInput::JsonText(trimmed.to_string()),
        },
        other => other,
    };

    Share {
        name: share.name.trim().to_string(),
        path: share.path.trim().to_string(),
        comment: clean(share.comment),
        security: share.security,
        user_access,
        create_mask: clean(share.create_mask),
        directory_mask: clean(share.directory_mask),
        force_user: clean(share.force_user),
        force_group: clean(share.force_group),
        hosts_allow: clean(share.hosts_allow),
        hosts_deny: clean(share.hosts_deny),
        hide_dot_files: share.hide_dot_files,
    }
}

/// Build a share from form attributes.
///
/// Attributes are sanitized first. Unknown keys are ignored. Nothing is
/// validated here.
pub fn share_from_attributes(raw: &Attributes) -> Share {
    let mut attrs = sanitize(raw);
    let mut take = |key: &str| attrs.remove(key);

    let share = Share {
        name: take("name").unwrap_or_default(),
        path: take("path").unwrap_or_default(),
        comment: take("comment"),
        security: take("security")
            .map(|s| SecurityMode::parse(&s))
            .unwrap_or_default(),
        user_access: take("user_access")
            .map(AccessModelInput::JsonText)
            .unwrap_or_default(),
        create_mask: take("create_mask"),
        directory_mask: take("directory_mask"),
        force_user: take("force_user"),
        force_group: take("force_group"),
        hosts_allow: take("hosts_allow"),
        hosts_deny: take("hosts_deny"),
        hide_dot_files: take("hide_dot_files").and_then(|v| parse_yes_no(&v)),
    };

    if !attrs.is_empty() {
        debug!(keys = ?attrs.keys().collect::<Vec<_>>(), "Ignoring unknown share attributes");
    }

    share
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
