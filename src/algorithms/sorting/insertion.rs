// Insertion-style sorts: insertion and shell

use crate::algorithms::errors::GenerateError;
use crate::snapshot::{StepRecorder, Value};

/// Shift every element larger than `key` one gap to the right, starting from
/// slot `i`. Returns the slot where `key` belongs.
fn shift_larger(
    rec: &mut StepRecorder,
    i: usize,
    gap: usize,
    key: Value,
) -> Result<usize, GenerateError> {
    let mut j = i;
    while j >= gap {
        rec.compare(j - gap, j)?;
        if rec.value(j - gap) <= key {
            break;
        }
        rec.shift(j - gap, j)?;
        j -= gap;
    }
    Ok(j)
}

/// Insertion sort.
///
/// After key `i` is placed the settled set is the prefix `0..i`, not the set
/// of indices in their final position: a later key can still move everything
/// in the prefix. The last index only settles on the terminal step.
pub fn insertion(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    for i in 1..rec.len() {
        let key = rec.value(i);
        let slot = shift_larger(rec, i, 1, key)?;
        rec.settle_prefix(i);
        rec.place(slot, i, key)?;
    }
    Ok(())
}

/// Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.
pub fn shell(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    let n = rec.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let key = rec.value(i);
            let slot = shift_larger(rec, i, gap, key)?;
            rec.place(slot, i, key)?;
        }
        gap /= 2;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::snapshot::StepEvent;

    #[test]
    fn insertion_shifts_then_places() {
        let mut rec = StepRecorder::new(Algorithm::Insertion, &[2, 1], usize::MAX);
        insertion(&mut rec).unwrap();
        let sequence = rec.finish().unwrap();
        let events: Vec<&StepEvent> = sequence.iter().map(|s| &s.event).collect();
        assert!(matches!(events[0], StepEvent::Compare { pair: (0, 1), .. }));
        assert!(matches!(events[1], StepEvent::Shift { from: 0, to: 1 }));
        assert!(matches!(events[2], StepEvent::Place { index: 0, origin: 1 }));
        assert_eq!(sequence.steps()[1].array, vec![2, 2]);
        assert_eq!(sequence.steps()[2].array, vec![1, 2]);
        assert_eq!(sequence.steps()[2].settled, vec![0]);
        assert_eq!(sequence.steps()[3].settled, vec![0, 1]);
    }

    #[test]
    fn insertion_leaves_last_index_to_the_terminal_step() {
        let mut rec = StepRecorder::new(Algorithm::Insertion, &[3, 1, 2], usize::MAX);
        insertion(&mut rec).unwrap();
        let sequence = rec.finish().unwrap();
        let steps = sequence.steps();
        let last_place = &steps[steps.len() - 2];
        assert!(matches!(last_place.event, StepEvent::Place { .. }));
        assert_eq!(last_place.array, vec![1, 2, 3]);
        assert_eq!(last_place.settled, vec![0, 1]);
        assert_eq!(steps[steps.len() - 1].settled, vec![0, 1, 2]);
    }

    #[test]
    fn shell_sorts() {
        let mut rec = StepRecorder::new(Algorithm::Shell, &[5, 9, 1, 7, 3, 3, 0], usize::MAX);
        shell(&mut rec).unwrap();
        assert_eq!(rec.array(), &[0, 1, 3, 3, 5, 7, 9]);
        assert!(rec.settled().is_empty());
    }
}
