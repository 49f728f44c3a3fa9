//! Search step generators
//!
//! Every probe records exactly one step carrying the probed index, the active
//! interval (when the algorithm keeps one) and the path of probes so far. The
//! step that locates the target is marked [`SearchStatus::Found`] and ends the
//! sequence; an exhausted search ends with one [`SearchStatus::Absent`] step.
//!
//! All algorithms except linear search sort a private copy of the input first
//! and report indices into that copy.

pub mod fibonacci;
pub mod interval;
pub mod linear;

use super::errors::GenerateError;
use super::{Algorithm, GeneratorConfig};
use crate::snapshot::{SearchStatus, StepRecorder, StepSequence, Value};

/// Dispatch a search algorithm
pub fn generate(
    algorithm: Algorithm,
    input: &[Value],
    target: Value,
    config: &GeneratorConfig,
) -> Result<StepSequence, GenerateError> {
    let mut working = input.to_vec();
    if algorithm.sorts_working_copy() {
        working.sort_unstable();
    }

    let mut rec = StepRecorder::new(algorithm, &working, config.memory_limit);
    let mut trail = SearchTrail::new(&mut rec, target);

    if trail.len() == 0 {
        trail.absent()?;
    } else {
        match algorithm {
            Algorithm::Linear => linear::linear(&mut trail)?,
            Algorithm::Jump => linear::jump(&mut trail)?,
            Algorithm::Binary => interval::binary(&mut trail)?,
            Algorithm::Interpolation => interval::interpolation(&mut trail)?,
            Algorithm::Exponential => interval::exponential(&mut trail)?,
            Algorithm::Fibonacci => fibonacci::fibonacci(&mut trail)?,
            other => {
                return Err(GenerateError::InvalidInputShape {
                    algorithm: other,
                    reason: "not a search algorithm".to_string(),
                })
            }
        }
    }

    Ok(rec.into_sequence())
}

/// Probe bookkeeping shared by the search generators
pub struct SearchTrail<'a> {
    rec: &'a mut StepRecorder,
    target: Value,
    path: Vec<usize>,
}

impl<'a> SearchTrail<'a> {
    pub fn new(rec: &'a mut StepRecorder, target: Value) -> Self {
        SearchTrail {
            rec,
            target,
            path: Vec::new(),
        }
    }

    pub fn target(&self) -> Value {
        self.target
    }

    pub fn len(&self) -> usize {
        self.rec.len()
    }

    pub fn value(&self, index: usize) -> Value {
        self.rec.value(index)
    }

    /// Examine `index` and record one step. Returns true if the target is there.
    pub fn probe(&mut self, index: usize, bounds: Option<(usize, usize)>) -> Result<bool, GenerateError> {
        self.path.push(index);
        let found = self.rec.value(index) == self.target;
        let status = if found {
            SearchStatus::Found(index)
        } else {
            SearchStatus::Searching
        };
        self.rec
            .probe(self.target, Some(index), bounds, &self.path, status)?;
        Ok(found)
    }

    /// Record the concluding step of an unsuccessful search
    pub fn absent(&mut self) -> Result<(), GenerateError> {
        self.rec
            .probe(self.target, None, None, &self.path, SearchStatus::Absent)
    }
}

/// Binary search over the inclusive interval `left..=right`.
/// Returns true once the target is found.
pub(crate) fn bisect(
    trail: &mut SearchTrail<'_>,
    mut left: usize,
    mut right: usize,
) -> Result<bool, GenerateError> {
    while left <= right {
        let mid = left + (right - left) / 2;
        if trail.probe(mid, Some((left, right)))? {
            return Ok(true);
        }
        if trail.value(mid) < trail.target() {
            left = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            right = mid - 1;
        }
    }
    Ok(false)
}
