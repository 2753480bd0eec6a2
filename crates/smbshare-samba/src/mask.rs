//! Typed POSIX permission bits and their four-digit octal mask form.

use bitflags::bitflags;

/// Samba's default `create mask`.
pub const DEFAULT_CREATE_MASK: &str = "0664";

/// Samba's default `directory mask`.
pub const DEFAULT_DIRECTORY_MASK: &str = "0775";

bitflags! {
    /// Permission bits as written in a `create mask` / `directory mask`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PermissionBits: u32 {
        const SETUID = 0o4000;
        const SETGID = 0o2000;
        const STICKY = 0o1000;
        const OWNER_READ = 0o400;
        const OWNER_WRITE = 0o200;
        const OWNER_EXECUTE = 0o100;
        const GROUP_READ = 0o040;
        const GROUP_WRITE = 0o020;
        const GROUP_EXECUTE = 0o010;
        const OTHERS_READ = 0o004;
        const OTHERS_WRITE = 0o002;
        const OTHERS_EXECUTE = 0o001;
    }
}

impl PermissionBits {
    /// Parse exactly four octal digits (`^[0-7]{4}$`).
    pub fn from_octal_mask(mask: &str) -> Option<Self> {
        if mask.len() != 4 || !mask.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
            return None;
        }
        u32::from_str_radix(mask, 8).ok().and_then(Self::from_bits)
    }

    /// Encode as four octal digits, zero padded.
    pub fn to_octal_mask(&self) -> String {
        format!("{:04o}", self.bits())
    }

    /// Whether `mask` is four octal digits.
    pub fn is_valid_mask(mask: &str) -> bool {
        Self::from_octal_mask(mask).is_some()
    }

    /// `ls -l` style rendering of the nine standard bits, e.g. `rw-rw-r--`.
    pub fn symbolic(&self) -> String {
        const TABLE: [(PermissionBits, char); 9] = [
            (PermissionBits::OWNER_READ, 'r'),
            (PermissionBits::OWNER_WRITE, 'w'),
            (PermissionBits::OWNER_EXECUTE, 'x'),
            (PermissionBits::GROUP_READ, 'r'),
            (PermissionBits::GROUP_WRITE, 'w'),
            (PermissionBits::GROUP_EXECUTE, 'x'),
            (PermissionBits::OTHERS_READ, 'r'),
            (PermissionBits::OTHERS_WRITE, 'w'),
            (PermissionBits::OTHERS_EXECUTE, 'x'),
        ];
        TABLE
            .iter()
            .map(|(bit, c)| if self.contains(*bit) { *c } else { '-' })
            .collect()
    }
}
