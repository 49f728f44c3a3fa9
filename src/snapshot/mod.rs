// Step snapshots and the step sequence they are collected into

pub mod recorder;

use crate::algorithms::errors::GenerateError;
use crate::algorithms::Algorithm;
use std::fmt;

pub use recorder::StepRecorder;

/// Values handled by the generators
pub type Value = i64;

/// Extra index highlighted alongside a compared or swapped pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Partition pivot (quick / decide sort)
    Pivot(usize),
    /// Current minimum candidate (selection sort)
    Minimum(usize),
}

/// Outcome of a search as seen at one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Not located yet
    Searching,
    /// Located at this index of the working copy
    Found(usize),
    /// The search space is exhausted
    Absent,
}

/// One probe of a search algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub target: Value,
    /// Index examined by this step (`None` on the concluding absent step)
    pub current: Option<usize>,
    /// Active interval, when the algorithm keeps one
    pub bounds: Option<(usize, usize)>,
    /// Every index probed so far, in probe order
    pub path: Vec<usize>,
    pub status: SearchStatus,
}

/// The event that produced a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// Two positions were compared; the array is unchanged
    Compare {
        pair: (usize, usize),
        mark: Option<Mark>,
    },
    /// Two positions exchanged their values
    Swap {
        pair: (usize, usize),
        mark: Option<Mark>,
    },
    /// `array[to]` was overwritten with `array[from]` (insertion shift)
    Shift { from: usize, to: usize },
    /// The held key was written to `index`; it came from `origin`
    Place { index: usize, origin: usize },
    /// Selection sort found a smaller candidate
    NewMinimum { index: usize },
    /// Merge of `range`; `write` is false for the comparison before a write
    Merge {
        cursor: usize,
        range: (usize, usize),
        write: bool,
    },
    /// Prefix `range` was reversed
    Flip { range: (usize, usize) },
    /// The whole array was shuffled (bogo sort)
    Shuffle { attempt: u32 },
    /// An attempt cap ran out and the array was forced into order
    Intervention { attempts: u32 },
    /// Radix sort routed `source` to output `slot` by `digit` at place `exp`
    Distribute {
        exp: u64,
        digit: u8,
        source: usize,
        slot: usize,
    },
    /// Radix sort copied the output buffer back for place `exp`
    Collect { exp: u64 },
    /// End of a pass; the settled set may have changed
    Pass,
    /// A search probe
    Probe(Probe),
    /// Terminal step of a sort
    Complete,
}

impl StepEvent {
    /// Whether this event counts as a comparison in the analytics
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            StepEvent::Compare { .. } | StepEvent::Merge { write: false, .. }
        )
    }

    /// Whether this event counts as a swap in the analytics
    pub fn is_swap(&self) -> bool {
        matches!(
            self,
            StepEvent::Swap { .. } | StepEvent::Shift { .. } | StepEvent::Flip { .. }
        )
    }

    /// The compared or exchanged pair, if the event has one
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self {
            StepEvent::Compare { pair, .. } | StepEvent::Swap { pair, .. } => Some(*pair),
            StepEvent::Shift { from, to } => Some((*from, *to)),
            _ => None,
        }
    }

    pub fn mark(&self) -> Option<Mark> {
        match self {
            StepEvent::Compare { mark, .. } | StepEvent::Swap { mark, .. } => *mark,
            StepEvent::NewMinimum { index } => Some(Mark::Minimum(*index)),
            _ => None,
        }
    }

    pub fn probe(&self) -> Option<&Probe> {
        match self {
            StepEvent::Probe(probe) => Some(probe),
            _ => None,
        }
    }

    /// Whether this event ends a sequence
    pub fn is_terminal(&self) -> bool {
        match self {
            StepEvent::Complete => true,
            StepEvent::Probe(probe) => probe.status != SearchStatus::Searching,
            _ => false,
        }
    }
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepEvent::Compare { pair, mark } => {
                write!(f, "compare {} {}", pair.0, pair.1)?;
                write_mark(f, mark)
            }
            StepEvent::Swap { pair, mark } => {
                write!(f, "swap {} {}", pair.0, pair.1)?;
                write_mark(f, mark)
            }
            StepEvent::Shift { from, to } => write!(f, "shift {} -> {}", from, to),
            StepEvent::Place { index, origin } => write!(f, "place key from {} at {}", origin, index),
            StepEvent::NewMinimum { index } => write!(f, "new minimum at {}", index),
            StepEvent::Merge {
                cursor,
                range,
                write,
            } => {
                let verb = if *write { "write" } else { "compare" };
                write!(f, "merge {} at {} in {}..={}", verb, cursor, range.0, range.1)
            }
            StepEvent::Flip { range } => write!(f, "flip {}..={}", range.0, range.1),
            StepEvent::Shuffle { attempt } => write!(f, "shuffle #{}", attempt),
            StepEvent::Intervention { attempts } => {
                write!(f, "forced into order after {} attempts", attempts)
            }
            StepEvent::Distribute {
                exp,
                digit,
                source,
                slot,
            } => write!(f, "digit {} (exp {}) of {} -> slot {}", digit, exp, source, slot),
            StepEvent::Collect { exp } => write!(f, "collect pass exp {}", exp),
            StepEvent::Pass => write!(f, "pass"),
            StepEvent::Probe(probe) => {
                match probe.current {
                    Some(current) => write!(f, "probe {}", current)?,
                    None => write!(f, "probe -")?,
                }
                if let Some((left, right)) = probe.bounds {
                    write!(f, " in {}..={}", left, right)?;
                }
                match probe.status {
                    SearchStatus::Searching => Ok(()),
                    SearchStatus::Found(index) => write!(f, " found {} at {}", probe.target, index),
                    SearchStatus::Absent => write!(f, " {} absent", probe.target),
                }
            }
            StepEvent::Complete => write!(f, "complete"),
        }
    }
}

fn write_mark(f: &mut fmt::Formatter<'_>, mark: &Option<Mark>) -> fmt::Result {
    match mark {
        Some(Mark::Pivot(index)) => write!(f, " (pivot {})", index),
        Some(Mark::Minimum(index)) => write!(f, " (min {})", index),
        None => Ok(()),
    }
}

/// Snapshot of the algorithm state after one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Position of this step in its sequence
    pub index: usize,
    pub array: Vec<Value>,
    /// Settled indices in the order the algorithm recorded them
    pub settled: Vec<usize>,
    pub event: StepEvent,
}

impl Step {
    /// Estimate the memory usage of this step in bytes
    pub fn estimated_size(&self) -> usize {
        let path = self.event.probe().map_or(0, |probe| probe.path.len());
        std::mem::size_of::<Step>()
            + self.array.len() * std::mem::size_of::<Value>()
            + (self.settled.len() + path) * std::mem::size_of::<usize>()
    }

    pub fn is_settled(&self, index: usize) -> bool {
        self.settled.contains(&index)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5}  {:<40} {:?}", self.index, self.event.to_string(), self.array)
    }
}

/// Complete ordered list of steps for one algorithm run
#[derive(Debug, Clone)]
pub struct StepSequence {
    algorithm: Algorithm,
    steps: Vec<Step>,
    max_memory: usize,
    current_memory: usize,
}

impl StepSequence {
    pub fn new(algorithm: Algorithm, max_memory: usize) -> Self {
        StepSequence {
            algorithm,
            steps: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Append a step; its `index` is overwritten with its position
    pub fn push(&mut self, mut step: Step) -> Result<(), GenerateError> {
        let step_size = step.estimated_size();

        if self.current_memory + step_size > self.max_memory {
            return Err(GenerateError::StepLimitExceeded {
                current: self.current_memory + step_size,
                limit: self.max_memory,
            });
        }

        step.index = self.steps.len();
        self.current_memory += step_size;
        self.steps.push(step);
        Ok(())
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(array: Vec<Value>, event: StepEvent) -> Step {
        Step {
            index: 0,
            array,
            settled: Vec::new(),
            event,
        }
    }

    #[test]
    fn push_assigns_positions() {
        let mut sequence = StepSequence::new(Algorithm::Bubble, usize::MAX);
        sequence.push(step(vec![2, 1], StepEvent::Pass)).unwrap();
        sequence.push(step(vec![1, 2], StepEvent::Complete)).unwrap();
        let indices: Vec<usize> = sequence.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn push_rejects_steps_over_budget() {
        let probe = step(vec![1; 64], StepEvent::Pass);
        let limit = probe.estimated_size() + 1;
        let mut sequence = StepSequence::new(Algorithm::Bubble, limit);
        sequence.push(probe.clone()).unwrap();
        let err = sequence.push(probe).unwrap_err();
        assert!(matches!(err, GenerateError::StepLimitExceeded { .. }));
        assert_eq!(sequence.len(), 1);
    }

    #[test]
    fn event_classification() {
        let compare = StepEvent::Compare {
            pair: (0, 1),
            mark: None,
        };
        let swap = StepEvent::Swap {
            pair: (0, 1),
            mark: Some(Mark::Pivot(3)),
        };
        assert!(compare.is_comparison() && !compare.is_swap());
        assert!(swap.is_swap() && !swap.is_comparison());
        assert_eq!(swap.mark(), Some(Mark::Pivot(3)));
        assert!(StepEvent::Merge {
            cursor: 0,
            range: (0, 3),
            write: false
        }
        .is_comparison());
        assert!(StepEvent::Complete.is_terminal());
        assert!(!StepEvent::Pass.is_terminal());
    }
}
