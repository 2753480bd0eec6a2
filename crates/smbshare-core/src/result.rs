//! Convenience result type alias for SmbShare.

use crate::error::AppError;

/// A specialized `Result` type for SmbShare operations.
pub type AppResult<T> = Result<T, AppError>;
