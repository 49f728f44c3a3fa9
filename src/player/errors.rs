//! Boundary signals raised by the [`Player`](super::Player)
//!
//! These are never fatal. The player clamps its cursor and reports which
//! boundary stopped a request; the UI turns them into status messages.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// The cursor is already on the terminal step
    AtEnd,

    /// The cursor is already on the first step
    AtStart,

    /// The sequence has no steps to show
    Empty,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::AtEnd => write!(f, "Already at the last step"),
            PlaybackError::AtStart => write!(f, "Already at the first step"),
            PlaybackError::Empty => write!(f, "No steps recorded"),
        }
    }
}

impl std::error::Error for PlaybackError {}
