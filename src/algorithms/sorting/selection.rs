// Selection-style sorts: selection, heap, pancake

use crate::algorithms::errors::GenerateError;
use crate::snapshot::{Mark, StepEvent, StepRecorder};

/// Selection sort.
///
/// Each comparison carries the current minimum as a mark. After each outer
/// pass index `i` is appended to the settled set, swap or not.
pub fn selection(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    let n = rec.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            rec.compare_marked(min, j, Some(Mark::Minimum(min)))?;
            if rec.value(j) < rec.value(min) {
                min = j;
                rec.record(StepEvent::NewMinimum { index: min })?;
            }
        }
        if min != i {
            rec.swap_marked(i, min, Some(Mark::Minimum(i)))?;
        }
        rec.settle_back(i);
        rec.record(StepEvent::Pass)?;
    }
    Ok(())
}

/// Restore the max-heap property below `root` within `array[..len]`
fn sift_down(rec: &mut StepRecorder, len: usize, root: usize) -> Result<(), GenerateError> {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < len {
        rec.compare(largest, left)?;
        if rec.value(left) > rec.value(largest) {
            largest = left;
        }
    }
    if right < len {
        rec.compare(largest, right)?;
        if rec.value(right) > rec.value(largest) {
            largest = right;
        }
    }
    if largest != root {
        rec.swap(root, largest)?;
        sift_down(rec, len, largest)?;
    }
    Ok(())
}

/// Heap sort: build a max heap, then repeatedly move the root to the end.
/// Each extracted index is prepended to the settled set.
pub fn heap(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    let n = rec.len();
    for i in (0..n / 2).rev() {
        sift_down(rec, n, i)?;
    }
    for end in (1..n).rev() {
        rec.settle_front(end);
        rec.swap(0, end)?;
        sift_down(rec, end, 0)?;
    }
    Ok(())
}

/// Pancake sort: flip the largest unsorted value to the front, then flip the
/// unsorted prefix to bury it at the end.
pub fn pancake(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    let n = rec.len();
    for size in (2..=n).rev() {
        let mut max = 0;
        for i in 1..size {
            rec.compare(max, i)?;
            if rec.value(i) > rec.value(max) {
                max = i;
            }
        }
        if max != size - 1 {
            rec.flip(0, max)?;
            rec.flip(0, size - 1)?;
        }
        rec.settle_back(size - 1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;

    #[test]
    fn heap_settles_from_the_back() {
        let mut rec = StepRecorder::new(Algorithm::Heap, &[4, 10, 3, 5, 1], usize::MAX);
        heap(&mut rec).unwrap();
        assert_eq!(rec.array(), &[1, 3, 4, 5, 10]);
        assert_eq!(rec.settled(), &[1, 2, 3, 4]);
    }

    #[test]
    fn selection_appends_each_pass() {
        let mut rec = StepRecorder::new(Algorithm::Selection, &[3, 1, 2], usize::MAX);
        selection(&mut rec).unwrap();
        assert_eq!(rec.array(), &[1, 2, 3]);
        assert_eq!(rec.settled(), &[0, 1]);
    }

    #[test]
    fn pancake_flips_in_pairs() {
        let mut rec = StepRecorder::new(Algorithm::Pancake, &[1, 3, 2], usize::MAX);
        pancake(&mut rec).unwrap();
        let sequence = rec.finish().unwrap();
        let flips: Vec<(usize, usize)> = sequence
            .iter()
            .filter_map(|s| match s.event {
                StepEvent::Flip { range } => Some(range),
                _ => None,
            })
            .collect();
        assert_eq!(flips, vec![(0, 1), (0, 2), (0, 0), (0, 1)]);
        assert_eq!(sequence.last().unwrap().array, vec![1, 2, 3]);
    }
}
