//! Shared error type across vitals crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, VitalsError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum VitalsError {
    /// A metric was registered under a name that is already taken.
    #[error("duplicate metric name: {0}")]
    DuplicateMetric(String),
    /// A counter was updated with the wrong number of label values.
    #[error("label arity mismatch for {metric}: expected {expected}, got {got}")]
    LabelArity {
        metric: String,
        expected: usize,
        got: usize,
    },
    /// Config could not be parsed or failed validation.
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}
