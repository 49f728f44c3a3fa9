//! Sorting step generators
//!
//! Generators are grouped by how they move elements:
//! - [`exchange`]: adjacent or gapped compare-and-swap (bubble, salt shaker,
//!   gnome, comb, odd-even)
//! - [`insertion`]: shifting a held key (insertion, shell)
//! - [`selection`]: selecting an extreme (selection, heap, pancake)
//! - [`partition`]: Lomuto quick sort and its randomized twin
//! - [`merge`]: merge sort and the bitonic network
//! - [`distribution`]: LSD radix sort
//! - [`stochastic`]: bogo and miracle sort
//!
//! Every generator ends with [`StepRecorder::finish`], which settles all
//! indices and records the terminal step. Empty input skips the algorithm
//! body, so it always yields exactly that one step.

pub mod distribution;
pub mod exchange;
pub mod insertion;
pub mod merge;
pub mod partition;
pub mod selection;
pub mod stochastic;

use super::errors::GenerateError;
use super::{Algorithm, GeneratorConfig};
use crate::snapshot::{StepRecorder, StepSequence, Value};
use rand::Rng;

/// Dispatch a sorting algorithm
pub fn generate<R: Rng>(
    algorithm: Algorithm,
    input: &[Value],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<StepSequence, GenerateError> {
    let mut rec = StepRecorder::new(algorithm, input, config.memory_limit);

    if !rec.is_empty() {
        match algorithm {
            Algorithm::Bubble => exchange::bubble(&mut rec)?,
            Algorithm::SaltShaker => exchange::salt_shaker(&mut rec)?,
            Algorithm::Gnome => exchange::gnome(&mut rec)?,
            Algorithm::Comb => exchange::comb(&mut rec)?,
            Algorithm::OddEven => exchange::odd_even(&mut rec)?,
            Algorithm::Insertion => insertion::insertion(&mut rec)?,
            Algorithm::Shell => insertion::shell(&mut rec)?,
            Algorithm::Selection => selection::selection(&mut rec)?,
            Algorithm::Heap => selection::heap(&mut rec)?,
            Algorithm::Pancake => selection::pancake(&mut rec)?,
            Algorithm::Quick => partition::quick(&mut rec)?,
            Algorithm::Decide => partition::decide(&mut rec, rng)?,
            Algorithm::Merge => merge::merge(&mut rec)?,
            Algorithm::Bitonic => merge::bitonic(&mut rec)?,
            Algorithm::Radix => distribution::radix(&mut rec)?,
            Algorithm::Bogo => stochastic::bogo(&mut rec, config.shuffle_cap, rng)?,
            Algorithm::Miracle => stochastic::miracle(&mut rec, config.miracle_cap)?,
            other => {
                return Err(GenerateError::InvalidInputShape {
                    algorithm: other,
                    reason: "not a sorting algorithm".to_string(),
                })
            }
        }
    }

    rec.finish()
}

/// Whether `values` is in ascending order
pub(crate) fn is_sorted(values: &[Value]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
