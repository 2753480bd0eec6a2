//! Core traits defined in `smbshare-core` and implemented by other crates.

pub mod store;

pub use store::RecordStore;
