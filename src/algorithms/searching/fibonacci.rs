// Fibonacci search

use super::SearchTrail;
use crate::algorithms::errors::GenerateError;

/// Fibonacci search on sorted data.
///
/// Splits the range at Fibonacci offsets instead of halves. `offset` is the
/// last index known to hold a value below the target (or none yet).
pub fn fibonacci(trail: &mut SearchTrail<'_>) -> Result<(), GenerateError> {
    let n = trail.len();
    let target = trail.target();

    let (mut fib2, mut fib1) = (0usize, 1usize);
    let mut fib = fib2 + fib1;
    while fib < n {
        fib2 = fib1;
        fib1 = fib;
        fib = fib2 + fib1;
    }

    let mut offset: Option<usize> = None;
    let base = |offset: Option<usize>| offset.map_or(0, |o| o + 1);

    while fib > 1 {
        let index = (base(offset) + fib2).saturating_sub(1).min(n - 1);
        if trail.probe(index, None)? {
            return Ok(());
        }
        if trail.value(index) < target {
            fib = fib1;
            fib1 = fib2;
            fib2 = fib - fib1;
            offset = Some(index);
        } else {
            fib = fib2;
            fib1 -= fib2;
            fib2 = fib - fib1;
        }
    }

    let last = base(offset);
    if fib1 != 0 && last < n && trail.probe(last, None)? {
        return Ok(());
    }
    trail.absent()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::snapshot::{SearchStatus, StepRecorder};

    fn search(input: &[i64], target: i64) -> (Vec<usize>, SearchStatus) {
        let mut rec = StepRecorder::new(Algorithm::Fibonacci, input, usize::MAX);
        let mut trail = SearchTrail::new(&mut rec, target);
        fibonacci(&mut trail).unwrap();
        let sequence = rec.into_sequence();
        let probe = sequence.last().unwrap().event.probe().unwrap().clone();
        (probe.path, probe.status)
    }

    #[test]
    fn finds_every_present_value() {
        let input = [10, 22, 35, 40, 45, 50, 80, 82, 85, 90, 100];
        for (index, &value) in input.iter().enumerate() {
            let (_, status) = search(&input, value);
            assert_eq!(status, SearchStatus::Found(index), "value {}", value);
        }
    }

    #[test]
    fn first_probe_uses_fibonacci_offset() {
        // n = 11: 13 = 5 + 8 is the first fibonacci number >= 11, so probe 5 - 1
        let input = [10, 22, 35, 40, 45, 50, 80, 82, 85, 90, 100];
        let (path, _) = search(&input, 85);
        assert_eq!(path, vec![4, 7, 9, 8]);
    }

    #[test]
    fn missing_value_is_absent() {
        let (_, status) = search(&[1, 3, 5, 7], 4);
        assert_eq!(status, SearchStatus::Absent);
    }

    #[test]
    fn single_element() {
        assert_eq!(search(&[5], 5).1, SearchStatus::Found(0));
        assert_eq!(search(&[5], 6).1, SearchStatus::Absent);
    }
}
