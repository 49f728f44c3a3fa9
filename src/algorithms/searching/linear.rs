// Linear scan and block jump search

use super::SearchTrail;
use crate::algorithms::errors::GenerateError;

/// Probe every index from the left until the target turns up.
pub fn linear(trail: &mut SearchTrail<'_>) -> Result<(), GenerateError> {
    for index in 0..trail.len() {
        if trail.probe(index, None)? {
            return Ok(());
        }
    }
    trail.absent()
}

/// Jump search on sorted data.
///
/// Probes the last slot of each block of `floor(sqrt(n))` until a block may
/// hold the target, then scans that block from its start. The block end that
/// stops the jump is read without recording a probe.
pub fn jump(trail: &mut SearchTrail<'_>) -> Result<(), GenerateError> {
    let n = trail.len();
    let block = ((n as f64).sqrt() as usize).max(1);
    let target = trail.target();

    let mut prev = 0;
    let mut step = block;
    loop {
        let end = step.min(n) - 1;
        if trail.value(end) >= target {
            break;
        }
        trail.probe(end, Some((prev, end)))?;
        prev = step;
        step += block;
        if prev >= n {
            return trail.absent();
        }
    }

    let end = step.min(n) - 1;
    for index in prev..=end {
        if trail.probe(index, Some((prev, end)))? {
            return Ok(());
        }
        if trail.value(index) > target {
            break;
        }
    }
    trail.absent()
}
