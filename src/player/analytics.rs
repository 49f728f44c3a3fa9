// Counters derived from the consumed prefix of a sequence

use crate::snapshot::Step;
use std::time::Duration;

/// What the analytics pane shows for the current cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Analytics {
    pub comparisons: usize,
    pub swaps: usize,
    pub elapsed: Duration,
    /// Cursor position (0-based)
    pub cursor: usize,
    /// Number of steps in the sequence
    pub total: usize,
}

impl Analytics {
    /// Scan `steps[0..=cursor]`. A cursor past the end counts every step.
    pub fn scan(steps: &[Step], cursor: usize, elapsed: Duration) -> Self {
        let prefix = &steps[..steps.len().min(cursor.saturating_add(1))];
        let (comparisons, swaps) = prefix.iter().fold((0, 0), |(c, s), step| {
            (
                c + usize::from(step.event.is_comparison()),
                s + usize::from(step.event.is_swap()),
            )
        });

        Analytics {
            comparisons,
            swaps,
            elapsed,
            cursor,
            total: steps.len(),
        }
    }
}
