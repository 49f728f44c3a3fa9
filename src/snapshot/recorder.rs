//! Step accumulator shared by every generator
//!
//! Generators never suspend. They mutate the recorder's working array through
//! the helpers below, and every helper that changes state records a step right
//! after the change. Recursive algorithms pass the same recorder down the
//! call tree, so the steps come out in execution order.

use super::{Mark, Probe, SearchStatus, Step, StepEvent, StepSequence, Value};
use crate::algorithms::errors::GenerateError;
use crate::algorithms::Algorithm;

/// Working state of one generator run
#[derive(Debug)]
pub struct StepRecorder {
    array: Vec<Value>,
    settled: Vec<usize>,
    sequence: StepSequence,
}

impl StepRecorder {
    pub fn new(algorithm: Algorithm, input: &[Value], memory_limit: usize) -> Self {
        StepRecorder {
            array: input.to_vec(),
            settled: Vec::new(),
            sequence: StepSequence::new(algorithm, memory_limit),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.sequence.algorithm()
    }

    pub fn array(&self) -> &[Value] {
        &self.array
    }

    /// Mutable access for writes that are recorded by the caller
    pub fn array_mut(&mut self) -> &mut [Value] {
        &mut self.array
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn value(&self, index: usize) -> Value {
        self.array[index]
    }

    /// Take a snapshot of the current working state
    pub fn record(&mut self, event: StepEvent) -> Result<(), GenerateError> {
        let step = Step {
            index: self.sequence.len(),
            array: self.array.clone(),
            settled: self.settled.clone(),
            event,
        };
        self.sequence.push(step)
    }

    pub fn compare(&mut self, a: usize, b: usize) -> Result<(), GenerateError> {
        self.compare_marked(a, b, None)
    }

    pub fn compare_marked(
        &mut self,
        a: usize,
        b: usize,
        mark: Option<Mark>,
    ) -> Result<(), GenerateError> {
        self.record(StepEvent::Compare { pair: (a, b), mark })
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), GenerateError> {
        self.swap_marked(a, b, None)
    }

    pub fn swap_marked(
        &mut self,
        a: usize,
        b: usize,
        mark: Option<Mark>,
    ) -> Result<(), GenerateError> {
        self.array.swap(a, b);
        self.record(StepEvent::Swap { pair: (a, b), mark })
    }

    /// Copy `array[from]` over `array[to]`
    pub fn shift(&mut self, from: usize, to: usize) -> Result<(), GenerateError> {
        self.array[to] = self.array[from];
        self.record(StepEvent::Shift { from, to })
    }

    /// Drop a held key into `index`
    pub fn place(&mut self, index: usize, origin: usize, key: Value) -> Result<(), GenerateError> {
        self.array[index] = key;
        self.record(StepEvent::Place { index, origin })
    }

    /// Reverse `array[start..=end]`
    pub fn flip(&mut self, start: usize, end: usize) -> Result<(), GenerateError> {
        self.array[start..=end].reverse();
        self.record(StepEvent::Flip { range: (start, end) })
    }

    pub fn settle_front(&mut self, index: usize) {
        self.settled.insert(0, index);
    }

    pub fn settle_back(&mut self, index: usize) {
        self.settled.push(index);
    }

    /// Replace the settled set with the prefix `0..len`
    pub fn settle_prefix(&mut self, len: usize) {
        self.settled = (0..len).collect();
    }

    pub fn settled(&self) -> &[usize] {
        &self.settled
    }

    /// Record a search probe
    pub fn probe(
        &mut self,
        target: Value,
        current: Option<usize>,
        bounds: Option<(usize, usize)>,
        path: &[usize],
        status: SearchStatus,
    ) -> Result<(), GenerateError> {
        self.record(StepEvent::Probe(Probe {
            target,
            current,
            bounds,
            path: path.to_vec(),
            status,
        }))
    }

    /// Settle every index and record the terminal step of a sort
    pub fn finish(mut self) -> Result<StepSequence, GenerateError> {
        self.settled = (0..self.array.len()).collect();
        self.record(StepEvent::Complete)?;
        Ok(self.sequence)
    }

    /// Hand back the sequence without a sorting terminal step (searches)
    pub fn into_sequence(self) -> StepSequence {
        self.sequence
    }
}
