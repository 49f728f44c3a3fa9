// LSD radix sort over decimal digits

use crate::algorithms::errors::GenerateError;
use crate::snapshot::{StepEvent, StepRecorder, Value};

/// Radix sort by increasing decimal place (`exp` = 1, 10, 100, ...).
///
/// Each place runs a stable counting sort into an output buffer. Every write
/// to the buffer is one step (the displayed array is unchanged until the
/// buffer is copied back, which is one collect step).
pub fn radix(rec: &mut StepRecorder) -> Result<(), GenerateError> {
    if let Some(negative) = rec.array().iter().find(|v| **v < 0) {
        return Err(GenerateError::InvalidInputShape {
            algorithm: rec.algorithm(),
            reason: format!("negative value {} (only non-negative integers)", negative),
        });
    }

    let n = rec.len();
    let max = rec.array().iter().copied().max().unwrap_or(0);
    let mut exp: Value = 1;

    while max / exp > 0 {
        let digit_of = |value: Value| ((value / exp) % 10) as usize;

        let mut count = [0usize; 10];
        for &value in rec.array() {
            count[digit_of(value)] += 1;
        }
        for d in 1..10 {
            count[d] += count[d - 1];
        }

        let mut output = vec![0; n];
        for source in (0..n).rev() {
            let value = rec.value(source);
            let digit = digit_of(value);
            count[digit] -= 1;
            let slot = count[digit];
            output[slot] = value;
            rec.record(StepEvent::Distribute {
                exp: exp as u64,
                digit: digit as u8,
                source,
                slot,
            })?;
        }

        rec.array_mut().copy_from_slice(&output);
        rec.record(StepEvent::Collect { exp: exp as u64 })?;

        match exp.checked_mul(10) {
            Some(next) => exp = next,
            None => break,
        }
    }
    Ok(())
}
