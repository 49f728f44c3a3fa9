// Sorts that wait for luck: bogo (shuffle until sorted) and miracle (inspect
// until sorted, never touching the array). Both are capped.

use super::is_sorted;
use crate::algorithms::errors::GenerateError;
use crate::snapshot::{StepEvent, StepRecorder};
use rand::seq::SliceRandom;
use rand::Rng;

/// Force the array into order after the attempt cap ran out
fn intervene(rec: &mut StepRecorder, attempts: u32) -> Result<(), GenerateError> {
    tracing::warn!(
        algorithm = rec.algorithm().id(),
        attempts,
        "attempt cap exhausted, forcing completion"
    );
    rec.array_mut().sort_unstable();
    rec.record(StepEvent::Intervention { attempts })
}

/// Bogo sort: shuffle the whole array until it is sorted, at most `cap` times.
pub fn bogo<R: Rng>(rec: &mut StepRecorder, cap: u32, rng: &mut R) -> Result<(), GenerateError> {
    let mut attempts = 0;
    while !is_sorted(rec.array()) && attempts < cap {
        rec.array_mut().shuffle(rng);
        attempts += 1;
        rec.record(StepEvent::Shuffle { attempt: attempts })?;
    }
    if !is_sorted(rec.array()) {
        intervene(rec, attempts)?;
    }
    Ok(())
}

/// Miracle sort: inspect adjacent pairs until the array is found in order.
///
/// Each inspection stops at the first inversion. Nothing ever reorders the
/// array, so unsorted input always ends in an intervention after `cap`
/// inspections.
pub fn miracle(rec: &mut StepRecorder, cap: u32) -> Result<(), GenerateError> {
    let n = rec.len();
    let mut attempts = 0;
    loop {
        let mut in_order = true;
        for i in 0..n - 1 {
            rec.compare(i, i + 1)?;
            if rec.value(i) > rec.value(i + 1) {
                in_order = false;
                break;
            }
        }
        if in_order {
            return Ok(());
        }
        attempts += 1;
        if attempts >= cap {
            break;
        }
    }
    intervene(rec, attempts)
}
