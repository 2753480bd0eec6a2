//! Share management services.

pub mod service;

pub use service::ShareService;
