// Searches that narrow an interval: binary, interpolation and exponential

use super::{bisect, SearchTrail};
use crate::algorithms::errors::GenerateError;

/// Classic binary search; every probe reports the interval it halves.
pub fn binary(trail: &mut SearchTrail<'_>) -> Result<(), GenerateError> {
    let right = trail.len() - 1;
    if !bisect(trail, 0, right)? {
        trail.absent()?;
    }
    Ok(())
}

/// Interpolation search: guess the position from the values at both bounds.
///
/// A range whose bound values are equal can only hold that value, so its low
/// end is probed directly.
pub fn interpolation(trail: &mut SearchTrail<'_>) -> Result<(), GenerateError> {
    let target = trail.target();
    let (mut low, mut high) = (0, trail.len() - 1);

    while low <= high {
        let (low_value, high_value) = (trail.value(low), trail.value(high));
        if target < low_value || target > high_value {
            break;
        }
        if low == high || low_value == high_value {
            if trail.probe(low, Some((low, high)))? {
                return Ok(());
            }
            break;
        }

        let span = (high - low) as i128;
        let offset = span * (i128::from(target) - i128::from(low_value))
            / (i128::from(high_value) - i128::from(low_value));
        let pos = low + offset as usize;

        if trail.probe(pos, Some((low, high)))? {
            return Ok(());
        }
        if trail.value(pos) < target {
            low = pos + 1;
        } else if pos == 0 {
            break;
        } else {
            high = pos - 1;
        }
    }
    trail.absent()
}

/// Exponential search: probe 0, 1, 2, 4, ... while the value stays at or
/// below the target, then binary search the last doubling window.
pub fn exponential(trail: &mut SearchTrail<'_>) -> Result<(), GenerateError> {
    let n = trail.len();
    let target = trail.target();

    if trail.probe(0, None)? {
        return Ok(());
    }

    let mut bound = 1;
    while bound < n && trail.value(bound) <= target {
        if trail.probe(bound, None)? {
            return Ok(());
        }
        bound *= 2;
    }

    if !bisect(trail, bound / 2, bound.min(n - 1))? {
        trail.absent()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::snapshot::{SearchStatus, StepRecorder, StepSequence};

    fn run(
        search: fn(&mut SearchTrail<'_>) -> Result<(), GenerateError>,
        algorithm: Algorithm,
        input: &[i64],
        target: i64,
    ) -> StepSequence {
        let mut rec = StepRecorder::new(algorithm, input, usize::MAX);
        let mut trail = SearchTrail::new(&mut rec, target);
        search(&mut trail).unwrap();
        rec.into_sequence()
    }

    #[test]
    fn binary_reports_bounds_and_path() {
        let sequence = run(binary, Algorithm::Binary, &[1, 3, 5, 7, 9], 7);
        let probes: Vec<_> = sequence.iter().filter_map(|s| s.event.probe()).collect();
        assert_eq!(probes.len(), 2);
        assert_eq!(probes[0].current, Some(2));
        assert_eq!(probes[0].bounds, Some((0, 4)));
        assert_eq!(probes[1].current, Some(3));
        assert_eq!(probes[1].bounds, Some((3, 4)));
        assert_eq!(probes[1].path, vec![2, 3]);
        assert_eq!(probes[1].status, SearchStatus::Found(3));
    }

    #[test]
    fn binary_below_every_value() {
        let sequence = run(binary, Algorithm::Binary, &[5, 6, 7], 1);
        let last = sequence.last().unwrap().event.probe().unwrap();
        assert_eq!(last.status, SearchStatus::Absent);
        assert_eq!(last.path, vec![1, 0]);
    }

    #[test]
    fn interpolation_hits_uniform_data_first_try() {
        let input: Vec<i64> = (0..10).map(|v| v * 5).collect();
        let sequence = run(interpolation, Algorithm::Interpolation, &input, 35);
        assert_eq!(sequence.len(), 1);
        assert_eq!(
            sequence.steps()[0].event.probe().unwrap().status,
            SearchStatus::Found(7)
        );
    }

    #[test]
    fn interpolation_out_of_range_is_absent_without_probes() {
        let sequence = run(interpolation, Algorithm::Interpolation, &[10, 20, 30], 99);
        assert_eq!(sequence.len(), 1);
        assert_eq!(
            sequence.steps()[0].event.probe().unwrap().status,
            SearchStatus::Absent
        );
    }

    #[test]
    fn interpolation_equal_bounds() {
        let sequence = run(interpolation, Algorithm::Interpolation, &[4, 4, 4], 4);
        assert_eq!(
            sequence.last().unwrap().event.probe().unwrap().status,
            SearchStatus::Found(0)
        );
    }

    #[test]
    fn exponential_doubles_then_bisects() {
        let input: Vec<i64> = (1..=10).collect();
        let sequence = run(exponential, Algorithm::Exponential, &input, 7);
        let path = &sequence.last().unwrap().event.probe().unwrap().path;
        // 0, 1, 2, 4 then bisect 4..=8: probes 6
        assert_eq!(path, &vec![0, 1, 2, 4, 6]);
    }
}
