// Merge-based sorts: top-down merge sort and the bitonic network

use crate::algorithms::errors::GenerateError;
use crate::snapshot::{StepEvent, StepRecorder, Value};

/// Top-down merge sort.
///
/// Merges are annotated with the write cursor and the range being merged.
/// A comparison step precedes every two-way decision and a write step
/// follows every write.
pub fn merge(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    let right = rec.len() - 1;
    merge_range(rec, 0, right)
}

fn merge_range(rec: &mut StepRecorder, left: usize, right: usize) -> Result<(), GenerateError> {
    if left < right {
        let mid = (left + right) / 2;
        merge_range(rec, left, mid)?;
        merge_range(rec, mid + 1, right)?;
        merge_halves(rec, left, mid, right)?;
    }
    Ok(())
}

fn merge_halves(
    rec: &mut StepRecorder,
    left: usize,
    mid: usize,
    right: usize,
) -> Result<(), GenerateError> {
    let range = (left, right);
    let lhs: Vec<Value> = rec.array()[left..=mid].to_vec();
    let rhs: Vec<Value> = rec.array()[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < lhs.len() && j < rhs.len() {
        rec.record(StepEvent::Merge {
            cursor: k,
            range,
            write: false,
        })?;
        let value = if lhs[i] <= rhs[j] {
            i += 1;
            lhs[i - 1]
        } else {
            j += 1;
            rhs[j - 1]
        };
        write(rec, k, value, range)?;
        k += 1;
    }

    for &value in lhs[i..].iter().chain(&rhs[j..]) {
        write(rec, k, value, range)?;
        k += 1;
    }
    Ok(())
}

fn write(
    rec: &mut StepRecorder,
    cursor: usize,
    value: Value,
    range: (usize, usize),
) -> Result<(), GenerateError> {
    rec.array_mut()[cursor] = value;
    rec.record(StepEvent::Merge {
        cursor,
        range,
        write: true,
    })
}

/// Bitonic sort. The length must be a power of two.
pub fn bitonic(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    let n = rec.len();
    if !n.is_power_of_two() {
        return Err(GenerateError::InvalidInputShape {
            algorithm: rec.algorithm(),
            reason: format!("length {} is not a power of two", n),
        });
    }
    sort_bitonic(rec, 0, n, true)
}

/// Sort one half ascending and the other descending, then merge the
/// resulting bitonic sequence in direction `ascending`.
fn sort_bitonic(
    rec: &mut StepRecorder,
    low: usize,
    count: usize,
    ascending: bool,
) -> Result<(), GenerateError> {
    if count > 1 {
        let half = count / 2;
        sort_bitonic(rec, low, half, true)?;
        sort_bitonic(rec, low + half, half, false)?;
        merge_bitonic(rec, low, count, ascending)?;
    }
    Ok(())
}

fn merge_bitonic(
    rec: &mut StepRecorder,
    low: usize,
    count: usize,
    ascending: bool,
) -> Result<(), GenerateError> {
    if count > 1 {
        let half = count / 2;
        for i in low..low + half {
            rec.compare(i, i + half)?;
            if ascending == (rec.value(i) > rec.value(i + half)) {
                rec.swap(i, i + half)?;
            }
        }
        merge_bitonic(rec, low, half, ascending)?;
        merge_bitonic(rec, low + half, half, ascending)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;

    #[test]
    fn merge_records_compare_then_write() {
        let mut rec = StepRecorder::new(Algorithm::Merge, &[2, 1], usize::MAX);
        merge(&mut rec).unwrap();
        let sequence = rec.finish().unwrap();
        let steps = sequence.steps();
        assert_eq!(
            steps[0].event,
            StepEvent::Merge {
                cursor: 0,
                range: (0, 1),
                write: false
            }
        );
        assert_eq!(steps[1].array, vec![1, 1]);
        assert_eq!(steps[2].array, vec![1, 2]);
    }

    #[test]
    fn bitonic_rejects_length_six() {
        let mut rec = StepRecorder::new(Algorithm::Bitonic, &[6, 5, 4, 3, 2, 1], usize::MAX);
        let err = bitonic(&mut rec).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidInputShape { .. }));
    }

    #[test]
    fn bitonic_sorts_eight() {
        let mut rec = StepRecorder::new(Algorithm::Bitonic, &[7, 3, 6, 8, 1, 2, 5, 4], usize::MAX);
        bitonic(&mut rec).unwrap();
        assert_eq!(rec.array(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
