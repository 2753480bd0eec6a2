//! # smbshare-core
//!
//! Core crate for SmbShare. Contains configuration schemas, the
//! persistence trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other SmbShare crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
