//! Error types for step generation
//!
//! This module defines [`GenerateError`], which represents every way a
//! generator can refuse to produce a step sequence. A generator either returns
//! a complete sequence or one of these errors; it never hands back a partial
//! sequence.
//!
//! Empty input is not an error: it degrades to a single terminal step.

use super::Algorithm;
use std::fmt;

/// Errors that can occur while generating a step sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The input violates a structural precondition of the algorithm
    /// (bitonic sort on a non-power-of-two length, radix sort on negatives)
    InvalidInputShape {
        algorithm: Algorithm,
        reason: String,
    },

    /// A search algorithm was invoked without a target value
    MissingTarget { algorithm: Algorithm },

    /// The recorded steps outgrew the sequence memory budget
    StepLimitExceeded { current: usize, limit: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidInputShape { algorithm, reason } => {
                write!(f, "{} cannot run on this input: {}", algorithm.label(), reason)
            }
            GenerateError::MissingTarget { algorithm } => {
                write!(f, "{} needs a target value", algorithm.label())
            }
            GenerateError::StepLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Step memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {}
