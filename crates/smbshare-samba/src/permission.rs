//! Ownership, mask and dot-file directives.

use smbshare_entity::share::Share;
use tracing::warn;

use crate::directive::Directives;
use crate::mask::{DEFAULT_CREATE_MASK, DEFAULT_DIRECTORY_MASK, PermissionBits};

/// Directives controlling ownership and modes of newly created entries.
///
/// `force user` / `force group` only appear when set. Both masks always
/// appear; an unset or unparsable mask falls back to the Samba default.
pub fn permission_directives(share: &Share) -> Directives {
    let create_mask = normalize_mask(
        &share.name,
        "create mask",
        share.create_mask.as_deref(),
        DEFAULT_CREATE_MASK,
    );
    let directory_mask = normalize_mask(
        &share.name,
        "directory mask",
        share.directory_mask.as_deref(),
        DEFAULT_DIRECTORY_MASK,
    );

    let mut directives = Directives::new();
    directives
        .push_opt("force user", share.force_user.as_deref())
        .push_opt("force group", share.force_group.as_deref())
        .push("create mask", create_mask)
        .push("directory mask", directory_mask)
        .push_bool("hide dot files", share.hides_dot_files());

    directives
}

/// Permission directives rendered as unindented lines.
pub fn build_permission_config(share: &Share) -> String {
    permission_directives(share).to_string()
}

fn normalize_mask(share: &str, key: &str, mask: Option<&str>, default: &str) -> String {
    let Some(raw) = mask.map(str::trim).filter(|m| !m.is_empty()) else {
        return default.to_string();
    };
    match PermissionBits::from_octal_mask(raw) {
        Some(bits) => bits.to_octal_mask(),
        None => {
            warn!(share = %share, directive = %key, mask = %raw, "Unparsable mask, using default");
            default.to_string()
        }
    }
}
