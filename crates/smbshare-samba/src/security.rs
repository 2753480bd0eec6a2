//! Guest and user-list directives, selected by security mode.

use smbshare_entity::share::{SecurityMode, Share};

use crate::access::{AccessPartition, resolve_access};
use crate::directive::Directives;

/// Directives for the share's security mode.
///
/// | mode    | guest ok | read only | valid users       | write list |
/// |---------|----------|-----------|-------------------|------------|
/// | public  | yes      | no        | -                 | -          |
/// | secure  | yes      | yes       | -                 | read-write |
/// | private | no       | yes       | read-write + read-only | read-write |
///
/// Empty user lists are omitted rather than emitted blank.
pub fn security_directives(share: &Share) -> Directives {
    let mut directives = Directives::new();
    directives.push_bool("guest ok", share.security.allows_guests());

    match share.security {
        SecurityMode::Public => {
            directives.push_bool("read only", false);
        }
        SecurityMode::Secure => {
            let partition = AccessPartition::from_map(&resolve_access(&share.user_access));
            directives.push_bool("read only", true);
            push_list(&mut directives, "write list", &partition.write_eligible);
        }
        SecurityMode::Private => {
            let partition = AccessPartition::from_map(&resolve_access(&share.user_access));
            directives.push_bool("read only", true);
            push_list(&mut directives, "valid users", &partition.valid_eligible);
            push_list(&mut directives, "write list", &partition.write_eligible);
        }
    }

    directives
}

/// Security directives rendered as unindented lines.
pub fn build_security_config(share: &Share) -> String {
    security_directives(share).to_string()
}

fn push_list(directives: &mut Directives, key: &str, principals: &[String]) {
    if !principals.is_empty() {
        directives.push(key, principals.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use smbshare_entity::share::{AccessLevel, AccessModelInput};

    fn share(mode: SecurityMode, access: serde_json::Value) -> Share {
        Share::new("s", "/mnt/s")
            .with_security(mode)
            .with_user_access(AccessModelInput::from(access))
    }

    fn line<'a>(config: &'a str, key: &str) -> Option<&'a str> {
        config
            .lines()
            .find_map(|l| l.strip_prefix(key).and_then(|rest| rest.strip_prefix(" = ")))
    }

    #[test]
    fn test_public_mode() {
        let config = build_security_config(&share(
            SecurityMode::Public,
            json!({ "admin": "read-write" }),
        ));
        assert!(config.contains("guest ok = yes"));
        assert!(config.contains("read only = no"));
        assert!(!config.contains("valid users"));
        assert!(!config.contains("write list"));
    }

    #[test]
    fn test_secure_mode() {
        let config = build_security_config(&share(
            SecurityMode::Secure,
            json!({ "admin": "read-write", "user1": "read-only" }),
        ));
        assert!(config.contains("guest ok = yes"));
        assert!(config.contains("read only = yes"));
        assert!(config.contains("write list = admin"));
        assert!(!config.contains("valid users"));
        assert!(!config.contains("user1"));
    }

    #[test]
    fn test_private_mode() {
        let config = build_security_config(&share(
            SecurityMode::Private,
            json!({ "admin": "read-write", "reader": "read-only", "blocked": "no-access" }),
        ));
        assert!(config.contains("guest ok = no"));
        let valid: Vec<&str> = line(&config, "valid users")
            .expect("valid users line")
            .split(' ')
            .collect();
        assert!(valid.contains(&"admin"));
        assert!(valid.contains(&"reader"));
        assert_eq!(line(&config, "write list"), Some("admin"));
        assert!(!config.contains("blocked"));
    }

    #[test]
    fn test_empty_partitions_omit_lines() {
        let config = build_security_config(&share(
            SecurityMode::Private,
            json!({ "blocked": "no-access" }),
        ));
        assert_eq!(config, "guest ok = no\nread only = yes\n");

        let config = build_security_config(&share(SecurityMode::Secure, json!("not json")));
        assert_eq!(config, "guest ok = yes\nread only = yes\n");
    }

    #[test]
    fn test_idempotent() {
        let s = share(
            SecurityMode::Private,
            json!({ "b": "read-only", "a": "read-write", "@staff": "read-write" }),
        );
        assert_eq!(build_security_config(&s), build_security_config(&s));
    }

    #[test]
    fn test_injected_principal_cannot_add_directive() {
        for mode in [SecurityMode::Secure, SecurityMode::Private] {
            let s = Share::new("s", "/mnt/s")
                .with_security(mode)
                .with_user_access(AccessModelInput::from_pairs([(
                    "admin\nwrite list = hacker",
                    AccessLevel::ReadWrite,
                )]));
            let config = build_security_config(&s);
            assert!(config.lines().all(|l| l.trim() != "write list = hacker"));
        }
    }

    #[test]
    fn test_spaced_principal_cannot_grant_no_access_user() {
        let config = build_security_config(&share(
            SecurityMode::Private,
            json!({ "blocked": "no-access", "guest blocked": "read-write" }),
        ));
        assert_eq!(config, "guest ok = no\nread only = yes\n");
        for key in ["valid users", "write list"] {
            if let Some(list) = line(&config, key) {
                assert!(list.split([' ', ',']).all(|p| p != "blocked"));
            }
        }
    }

    #[test]
    fn test_unrecognized_mode_behaves_as_public() {
        let s: Share = serde_json::from_value(json!({
            "name": "s",
            "path": "/mnt/s",
            "security": "lockdown",
            "user_access": { "admin": "read-write" }
        }))
        .expect("de");
        assert_eq!(
            build_security_config(&s),
            "guest ok = yes\nread only = no\n"
        );
    }
}
