//! # Introduction
//!
//! sortty runs a sorting or searching algorithm over a small array, records
//! every comparison, move and probe as a [`snapshot::Step`], and lets you
//! play, pause and scrub through the recorded steps as a bar chart in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Generator → StepSequence → Player → Projection + Roles → TUI
//! ```
//!
//! 1. [`algorithms`]: one step generator per algorithm, threading a
//!    [`snapshot::StepRecorder`] through its helpers.
//! 2. [`snapshot`]: steps, step events and the budgeted [`snapshot::StepSequence`].
//! 3. [`player`]: cursor, timed playback and analytics over one sequence.
//! 4. [`projection`]: maps each step's values back onto stable element ids.
//! 5. [`roles`]: what each bar means at the current step.
//! 6. [`session`]: owns input, random source, sequence and player; rebuilds
//!    them on every parameter change.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Sorting: bubble, selection, insertion, merge, quick, heap, gnome, pancake,
//! comb, odd-even, shell, bitonic, bogo, miracle, radix, decide (random-pivot
//! quick sort), salt shaker (cocktail).
//! Searching: linear, binary, jump, interpolation, exponential, fibonacci.

pub mod algorithms;
pub mod cli;
pub mod constants;
pub mod logging;
pub mod player;
pub mod projection;
pub mod roles;
pub mod session;
pub mod snapshot;
pub mod ui;
