//! Configuration preview and apply services.

pub mod service;

pub use service::{ApplyOutcome, ConfigService};
