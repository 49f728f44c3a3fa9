// Compare-and-swap sorts: bubble, salt shaker, gnome, comb, odd-even

use crate::algorithms::errors::GenerateError;
use crate::snapshot::{StepEvent, StepRecorder};

/// Compare `a` and `b`, swapping them when out of order.
/// Returns true if a swap happened.
fn compare_exchange(rec: &mut StepRecorder, a: usize, b: usize) -> Result<bool, GenerateError> {
    rec.compare(a, b)?;
    if rec.value(a) > rec.value(b) {
        rec.swap(a, b)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Bubble sort with early exit.
///
/// After each outer pass the rightmost unsorted index is prepended to the
/// settled set and a pass step is recorded.
pub fn bubble(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    let n = rec.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            swapped |= compare_exchange(rec, j, j + 1)?;
        }
        rec.settle_front(n - 1 - i);
        rec.record(StepEvent::Pass)?;
        if !swapped {
            break;
        }
    }
    Ok(())
}

/// Cocktail shaker sort: a forward pass shrinking the right bound, then a
/// backward pass shrinking the left bound, until neither swaps.
pub fn salt_shaker(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    let n = rec.len();
    if n < 2 {
        return Ok(());
    }

    let mut left = 0;
    let mut right = n - 1;
    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in left..right {
            swapped |= compare_exchange(rec, i, i + 1)?;
        }
        right = right.saturating_sub(1);
        for i in (left + 1..=right).rev() {
            swapped |= compare_exchange(rec, i - 1, i)?;
        }
        left += 1;
    }
    Ok(())
}

/// Gnome sort. No settled tracking until the terminal step.
pub fn gnome(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    let n = rec.len();
    let mut i = 0;
    while i < n {
        if i == 0 {
            i += 1;
            continue;
        }
        if compare_exchange(rec, i - 1, i)? {
            i -= 1;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Comb sort with shrink factor 1.3.
///
/// `floor(gap / 1.3)` is computed exactly as `gap * 10 / 13`.
pub fn comb(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    let n = rec.len();
    let mut gap = n;
    let mut sorted = false;
    while !sorted {
        gap = gap * 10 / 13;
        if gap <= 1 {
            gap = 1;
            sorted = true;
        }
        let mut i = 0;
        while i + gap < n {
            if compare_exchange(rec, i, i + gap)? {
                sorted = false;
            }
            i += 1;
        }
    }
    Ok(())
}

/// Odd-even transposition sort: odd pairs then even pairs per pass.
pub fn odd_even(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    let n = rec.len();
    let mut sorted = false;
    while !sorted {
        sorted = true;
        for start in [1, 0] {
            let mut i = start;
            while i + 1 < n {
                if compare_exchange(rec, i, i + 1)? {
                    sorted = false;
                }
                i += 2;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;

    fn run(algorithm: Algorithm, input: &[i64], f: fn(&mut StepRecorder) -> Result<(), GenerateError>) -> Vec<i64> {
        let mut rec = StepRecorder::new(algorithm, input, usize::MAX);
        f(&mut rec).unwrap();
        rec.array().to_vec()
    }

    #[test]
    fn each_exchange_sort_orders_values() {
        let input = [9, 4, 7, 1, 8, 2, 2, 6];
        let expected = vec![1, 2, 2, 4, 6, 7, 8, 9];
        assert_eq!(run(Algorithm::Bubble, &input, bubble), expected);
        assert_eq!(run(Algorithm::SaltShaker, &input, salt_shaker), expected);
        assert_eq!(run(Algorithm::Gnome, &input, gnome), expected);
        assert_eq!(run(Algorithm::Comb, &input, comb), expected);
        assert_eq!(run(Algorithm::OddEven, &input, odd_even), expected);
    }

    #[test]
    fn bubble_exits_after_clean_pass() {
        let mut rec = StepRecorder::new(Algorithm::Bubble, &[1, 2, 3, 4], usize::MAX);
        bubble(&mut rec).unwrap();
        let sequence = rec.finish().unwrap();
        // one pass of three comparisons, the pass step, the terminal step
        assert_eq!(sequence.len(), 5);
        assert_eq!(sequence.steps()[3].settled, vec![3]);
    }
}
