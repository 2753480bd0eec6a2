//! Share domain entities.

pub mod access;
pub mod model;
pub mod security;

pub use access::{AccessLevel, AccessModelInput};
pub use model::{Share, parse_yes_no};
pub use security::SecurityMode;
