//! error types for the lesson tour
//!
//! Conformance errors never reach this type: they are rejected by the
//! compiler. Only names read from the outside world can fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    #[error("unknown lesson: {0}")]
    UnknownLesson(String),

    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TourError>;
