// Lomuto quick sort and its randomized-pivot variant ("decide sort")

use crate::algorithms::errors::GenerateError;
use crate::snapshot::{Mark, StepRecorder};
use rand::Rng;

/// Partition `array[low..=high]` around the value in the high slot.
/// Returns the pivot's resting index, which is appended to the settled set.
fn partition(rec: &mut StepRecorder, low: usize, high: usize) -> Result<usize, GenerateError> {
    let mark = Some(Mark::Pivot(high));
    let pivot = rec.value(high);
    let mut store = low;

    for j in low..high {
        rec.compare_marked(j, high, mark)?;
        if rec.value(j) < pivot {
            if store != j {
                rec.swap_marked(store, j, mark)?;
            }
            store += 1;
        }
    }

    rec.settle_back(store);
    rec.swap_marked(store, high, mark)?;
    Ok(store)
}

/// Quick sort `array[low..=high]`; `prepare` runs before each partition.
fn sort_range<F>(
    rec: &mut StepRecorder,
    low: usize,
    high: usize,
    prepare: &mut F,
) -> Result<(), GenerateError>
where
    F: FnMut(&mut StepRecorder, usize, usize) -> Result<(), GenerateError>,
{
    if low < high {
        prepare(rec, low, high)?;
        let pivot = partition(rec, low, high)?;
        if pivot > low {
            sort_range(rec, low, pivot - 1, prepare)?;
        }
        sort_range(rec, pivot + 1, high, prepare)?;
    }
    Ok(())
}

/// Quick sort with the last slot of each range as pivot.
pub fn quick(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    let high = rec.len() - 1;
    sort_range(rec, 0, high, &mut |_, _, _| Ok(()))
}

/// Quick sort that first swaps a random in-range index into the pivot slot.
pub fn decide<R: Rng>(rec: &mut StepRecorder, rng: &mut R) -> Result<(), GenerateError> {
    let high = rec.len() - 1;
    sort_range(rec, 0, high, &mut |rec: &mut StepRecorder, low, high| {
        let chosen = rng.random_range(low..=high);
        if chosen != high {
            rec.swap_marked(chosen, high, Some(Mark::Pivot(high)))?;
        }
        Ok(())
    })
}
