//! # smbshare-store
//!
//! Persistence for the share list and the apply step that publishes
//! generated configuration to the SMB daemon.

pub mod applier;
pub mod atomic;
pub mod json;
pub mod memory;
pub mod repository;

pub use applier::{ApplyReport, ConfigApplier};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use repository::ShareRepository;
