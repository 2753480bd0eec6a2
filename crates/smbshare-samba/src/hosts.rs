//! Host allow/deny directives.

use smbshare_entity::share::Share;

use crate::directive::Directives;

/// `hosts allow` and `hosts deny`, each only when set.
pub fn host_access_directives(share: &Share) -> Directives {
    let mut directives = Directives::new();
    directives
        .push_opt("hosts allow", share.hosts_allow.as_deref())
        .push_opt("hosts deny", share.hosts_deny.as_deref());
    directives
}

/// Host-access directives rendered as unindented lines; empty when
/// neither list is set.
pub fn build_host_access_config(share: &Share) -> String {
    host_access_directives(share).to_string()
}
