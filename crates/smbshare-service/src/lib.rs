//! # smbshare-service
//!
//! Use cases on top of the share repository and the Samba renderer.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod config;
pub mod share;

pub use config::{ApplyOutcome, ConfigService};
pub use share::ShareService;
