//! Domain errors
//!
//! Construction and parsing failures surface as `DomainError`. Allocator
//! rejections are not errors; they are reported through
//! [`crate::build::AllocationOutcome`].

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value is out of range or a required field is blank.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Unknown catalog name or keyword.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The build is in the wrong phase for the request.
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Used by the `FromStr` impls of the catalog enums and keyword types.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}
