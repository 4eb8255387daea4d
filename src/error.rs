//! Error types for the console core
//!
//! The classifier and comparator are total functions and never fail; errors
//! here cover ingesting raw wire identifiers from outside serde.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Console core error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unrecognized lifecycle status identifier
    #[error("unknown lifecycle status: {0:?}\nExpected one of DRAFT, PREVIEW, LIVE, COMPLETE")]
    UnknownStatus(String),

    /// Unrecognized publish status identifier
    #[error("unknown publish status: {0:?}\nExpected one of IDLE, REVIEW, APPROVED, WAITING")]
    UnknownPublishStatus(String),
}
