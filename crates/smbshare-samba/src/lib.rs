//! # smbshare-samba
//!
//! Turns share records into Samba configuration text.
//!
//! Every function here is pure: no I/O, no shared state. Input flows
//! through [`sanitizer`], then [`validator`], then the directive builders
//! ([`security`], [`permission`], [`hosts`]) which [`assembler`] stitches
//! into `[section]` stanzas.
//!
//! ## Injection guard
//!
//! All directive text is accumulated in a [`directive::Directives`]
//! buffer whose `push` strips `\n` and `\r` from keys and values. No
//! builder formats config lines by hand, so a hostile principal name such
//! as `"bob\nwrite list = mallory"` can never start a directive line of
//! its own. Principal names holding a list separator are dropped in
//! [`access`] so they cannot expand into extra users.

pub mod access;
pub mod assembler;
pub mod directive;
pub mod error;
pub mod hosts;
pub mod mask;
pub mod permission;
pub mod sanitizer;
pub mod security;
pub mod validator;

pub use access::{AccessMap, AccessPartition, resolve_access};
pub use assembler::{ConfigAssembler, GeneratedConfig, generate_samba_config};
pub use directive::Directives;
pub use error::{ShareRejected, ValidationError};
pub use hosts::build_host_access_config;
pub use mask::PermissionBits;
pub use permission::build_permission_config;
pub use sanitizer::{Attributes, sanitize, sanitize_share, share_from_attributes};
pub use security::build_security_config;
pub use validator::{ShareValidation, ValidationReport, validate, validate_all};
