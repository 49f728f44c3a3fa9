//! Step generators for sorting and searching algorithms
//!
//! This module provides the step-generation engine:
//! - [`sorting`]: one generator per sorting algorithm
//! - [`searching`]: one generator per search algorithm
//! - [`errors`]: the [`GenerateError`] type
//! - [`info`]: descriptions, pseudocode and legends for the UI
//!
//! # Generation Model
//!
//! Every generator runs to completion against a
//! [`StepRecorder`](crate::snapshot::StepRecorder) and returns the finished
//! [`StepSequence`]. Recursive algorithms thread the recorder through their
//! helpers instead of suspending, so the sequence is fully materialized before
//! playback starts.
//!
//! [`GenerateError`]: errors::GenerateError

pub mod errors;
pub mod info;
pub mod searching;
pub mod sorting;

use crate::constants::{MIRACLE_ATTEMPT_CAP, SHUFFLE_ATTEMPT_CAP, STEP_MEMORY_LIMIT};
use crate::snapshot::{StepSequence, Value};
use errors::GenerateError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Whether an algorithm sorts or searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Sort,
    Search,
}

impl Mode {
    /// Algorithm selected when switching to this mode
    pub fn default_algorithm(self) -> Algorithm {
        match self {
            Mode::Sort => Algorithm::Bubble,
            Mode::Search => Algorithm::Linear,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Mode::Sort => Mode::Search,
            Mode::Search => Mode::Sort,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Sort => write!(f, "sort"),
            Mode::Search => write!(f, "search"),
        }
    }
}

/// Every supported algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Gnome,
    Pancake,
    Comb,
    OddEven,
    Shell,
    Bitonic,
    Bogo,
    Miracle,
    Radix,
    Decide,
    SaltShaker,
    Linear,
    Binary,
    Jump,
    Interpolation,
    Exponential,
    Fibonacci,
}

impl Algorithm {
    pub const SORTING: [Algorithm; 17] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Gnome,
        Algorithm::Pancake,
        Algorithm::Comb,
        Algorithm::OddEven,
        Algorithm::Shell,
        Algorithm::Bitonic,
        Algorithm::Bogo,
        Algorithm::Miracle,
        Algorithm::Radix,
        Algorithm::Decide,
        Algorithm::SaltShaker,
    ];

    pub const SEARCHING: [Algorithm; 6] = [
        Algorithm::Linear,
        Algorithm::Binary,
        Algorithm::Jump,
        Algorithm::Interpolation,
        Algorithm::Exponential,
        Algorithm::Fibonacci,
    ];

    /// Algorithms of one mode, in menu order
    pub fn of_mode(mode: Mode) -> &'static [Algorithm] {
        match mode {
            Mode::Sort => &Self::SORTING,
            Mode::Search => &Self::SEARCHING,
        }
    }

    /// Stable identifier used on the command line
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Gnome => "gnome",
            Algorithm::Pancake => "pancake",
            Algorithm::Comb => "comb",
            Algorithm::OddEven => "odd-even",
            Algorithm::Shell => "shell",
            Algorithm::Bitonic => "bitonic",
            Algorithm::Bogo => "bogo",
            Algorithm::Miracle => "miracle",
            Algorithm::Radix => "radix",
            Algorithm::Decide => "decide",
            Algorithm::SaltShaker => "salt-shaker",
            Algorithm::Linear => "linear",
            Algorithm::Binary => "binary",
            Algorithm::Jump => "jump",
            Algorithm::Interpolation => "interpolation",
            Algorithm::Exponential => "exponential",
            Algorithm::Fibonacci => "fibonacci",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Gnome => "Gnome Sort",
            Algorithm::Pancake => "Pancake Sort",
            Algorithm::Comb => "Comb Sort",
            Algorithm::OddEven => "Odd-Even Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Bitonic => "Bitonic Sort",
            Algorithm::Bogo => "Bogo Sort",
            Algorithm::Miracle => "Miracle Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Decide => "Decide Sort",
            Algorithm::SaltShaker => "Salt Shaker Sort",
            Algorithm::Linear => "Linear Search",
            Algorithm::Binary => "Binary Search",
            Algorithm::Jump => "Jump Search",
            Algorithm::Interpolation => "Interpolation Search",
            Algorithm::Exponential => "Exponential Search",
            Algorithm::Fibonacci => "Fibonacci Search",
        }
    }

    pub fn mode(self) -> Mode {
        if Self::SEARCHING.contains(&self) {
            Mode::Search
        } else {
            Mode::Sort
        }
    }

    /// Randomized algorithms produce a different sequence on every run
    pub fn is_stochastic(self) -> bool {
        matches!(self, Algorithm::Bogo | Algorithm::Decide)
    }

    /// Search algorithms that work on a sorted private copy
    pub fn sorts_working_copy(self) -> bool {
        self.mode() == Mode::Search && self != Algorithm::Linear
    }

    /// Next algorithm of the same mode, wrapping around
    pub fn next(self) -> Self {
        let list = Self::of_mode(self.mode());
        let pos = list.iter().position(|a| *a == self).unwrap_or(0);
        list[(pos + 1) % list.len()]
    }

    /// Previous algorithm of the same mode, wrapping around
    pub fn prev(self) -> Self {
        let list = Self::of_mode(self.mode());
        let pos = list.iter().position(|a| *a == self).unwrap_or(0);
        list[(pos + list.len() - 1) % list.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Unknown algorithm identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm '{}'", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let normalized = normalized
            .strip_suffix("sort")
            .or_else(|| normalized.strip_suffix("search"))
            .unwrap_or(normalized.as_str());

        let algorithm = match normalized {
            "bubble" => Algorithm::Bubble,
            "selection" => Algorithm::Selection,
            "insertion" => Algorithm::Insertion,
            "merge" => Algorithm::Merge,
            "quick" => Algorithm::Quick,
            "heap" => Algorithm::Heap,
            "gnome" => Algorithm::Gnome,
            "pancake" => Algorithm::Pancake,
            "comb" => Algorithm::Comb,
            "oddeven" => Algorithm::OddEven,
            "shell" => Algorithm::Shell,
            "bitonic" => Algorithm::Bitonic,
            "bogo" => Algorithm::Bogo,
            "miracle" => Algorithm::Miracle,
            "radix" => Algorithm::Radix,
            "decide" | "randomizedquick" => Algorithm::Decide,
            "saltshaker" | "cocktail" | "shaker" => Algorithm::SaltShaker,
            "linear" => Algorithm::Linear,
            "binary" => Algorithm::Binary,
            "jump" => Algorithm::Jump,
            "interpolation" => Algorithm::Interpolation,
            "exponential" => Algorithm::Exponential,
            "fibonacci" => Algorithm::Fibonacci,
            _ => return Err(UnknownAlgorithm(s.to_string())),
        };
        Ok(algorithm)
    }
}

/// Caps applied while generating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Memory budget of one step sequence in bytes
    pub memory_limit: usize,
    /// Bogo sort shuffle attempts before intervention
    pub shuffle_cap: u32,
    /// Miracle sort inspections before intervention
    pub miracle_cap: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            memory_limit: STEP_MEMORY_LIMIT,
            shuffle_cap: SHUFFLE_ATTEMPT_CAP,
            miracle_cap: MIRACLE_ATTEMPT_CAP,
        }
    }
}

/// Run `algorithm` over `input` and collect its step sequence
///
/// `target` is required for search algorithms and ignored by sorts. The
/// random source is only consulted by the stochastic sorts.
pub fn generate<R: Rng>(
    algorithm: Algorithm,
    input: &[Value],
    target: Option<Value>,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<StepSequence, GenerateError> {
    tracing::debug!(
        algorithm = algorithm.id(),
        len = input.len(),
        ?target,
        "generating steps"
    );

    let sequence = match algorithm.mode() {
        Mode::Sort => sorting::generate(algorithm, input, config, rng)?,
        Mode::Search => {
            let target = target.ok_or(GenerateError::MissingTarget { algorithm })?;
            searching::generate(algorithm, input, target, config)?
        }
    };

    tracing::debug!(
        algorithm = algorithm.id(),
        steps = sequence.len(),
        bytes = sequence.memory_usage(),
        "generated steps"
    );
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for algorithm in Algorithm::SORTING.iter().chain(Algorithm::SEARCHING.iter()) {
            assert_eq!(algorithm.id().parse::<Algorithm>(), Ok(*algorithm));
        }
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("oddEven".parse::<Algorithm>(), Ok(Algorithm::OddEven));
        assert_eq!("saltShaker".parse::<Algorithm>(), Ok(Algorithm::SaltShaker));
        assert_eq!("cocktail".parse::<Algorithm>(), Ok(Algorithm::SaltShaker));
        assert_eq!("Binary Search".parse::<Algorithm>(), Ok(Algorithm::Binary));
        assert!("timsort".parse::<Algorithm>().is_err());
    }

    #[test]
    fn cycling_stays_within_mode() {
        assert_eq!(Algorithm::SaltShaker.next(), Algorithm::Bubble);
        assert_eq!(Algorithm::Linear.prev(), Algorithm::Fibonacci);
        assert_eq!(Algorithm::Binary.next().mode(), Mode::Search);
    }

    #[test]
    fn search_requires_target() {
        let mut rng = rand::rng();
        let err = generate(
            Algorithm::Binary,
            &[1, 2, 3],
            None,
            &GeneratorConfig::default(),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingTarget {
                algorithm: Algorithm::Binary
            }
        );
    }
}
