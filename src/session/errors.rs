//! Errors surfaced by the [`Session`](super::Session)
//!
//! A failed operation leaves the session exactly as it was before the call.

use crate::algorithms::errors::GenerateError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The generator refused the input
    Generate(GenerateError),

    /// Array size outside the supported range
    InvalidSize { size: usize, min: usize, max: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Generate(err) => write!(f, "{}", err),
            SessionError::InvalidSize { size, min, max } => {
                write!(f, "Array size {} is out of range ({}..={})", size, min, max)
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Generate(err) => Some(err),
            SessionError::InvalidSize { .. } => None,
        }
    }
}

impl From<GenerateError> for SessionError {
    fn from(err: GenerateError) -> Self {
        SessionError::Generate(err)
    }
}
