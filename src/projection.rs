//! Identity-preserving projection
//!
//! Steps only carry raw values. To follow one bar across swaps, each frame is
//! matched against the previous frame's [`Element`]s: a multiset maps every
//! value to the queue of ids that held it, and each new value takes the first
//! id still queued for it, or a freshly minted one.
//!
//! The matching is greedy and left to right. When two equal values cross each
//! other their ids are not swapped along with them; that is accepted, since
//! equal values draw identical bars.
//!
//! Frames are projected on demand by a [`FrameCache`]. It keeps the frame
//! under the cursor plus a checkpoint every `FRAME_CHECKPOINT_INTERVAL` steps,
//! so moving the cursor replays a bounded number of steps and memory stays a
//! small fraction of the step sequence.

use crate::constants::FRAME_CHECKPOINT_INTERVAL;
use crate::snapshot::{StepSequence, Value};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt;

/// Stable identity of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value paired with its identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub value: Value,
}

/// Mints element ids; owned by the session
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator::default()
    }

    pub fn mint(&mut self) -> ElementId {
        self.next += 1;
        ElementId(self.next)
    }

    /// Give every value a fresh id
    pub fn elements(&mut self, values: &[Value]) -> Vec<Element> {
        values
            .iter()
            .map(|&value| Element {
                id: self.mint(),
                value,
            })
            .collect()
    }
}

type IdPool = FxHashMap<Value, VecDeque<ElementId>>;

/// Match `values` against `prev`, reusing ids wherever the value is available
pub fn project(prev: &[Element], values: &[Value], ids: &mut IdAllocator) -> Vec<Element> {
    project_with(&mut IdPool::default(), prev, values, ids)
}

/// [`project`] with a caller-owned pool; the queues keep their allocations
fn project_with(
    pool: &mut IdPool,
    prev: &[Element],
    values: &[Value],
    ids: &mut IdAllocator,
) -> Vec<Element> {
    pool.values_mut().for_each(VecDeque::clear);
    for element in prev {
        pool.entry(element.value).or_default().push_back(element.id);
    }

    values
        .iter()
        .map(|&value| {
            let id = pool
                .get_mut(&value)
                .and_then(VecDeque::pop_front)
                .unwrap_or_else(|| ids.mint());
            Element { id, value }
        })
        .collect()
}

/// A projected frame and the allocator state right after projecting it
#[derive(Debug, Clone)]
struct Checkpoint {
    frame: Vec<Element>,
    ids: IdAllocator,
}

/// Lazily projected frames of one step sequence.
///
/// Replaying from a checkpoint mints exactly the ids the first pass minted,
/// so a frame looks the same however the cursor reached it.
#[derive(Debug)]
pub struct FrameCache {
    initial: Vec<Element>,
    base_ids: IdAllocator,
    interval: usize,
    /// Frame of step `k * interval` for every `k` reached so far
    checkpoints: Vec<Checkpoint>,
    current: Option<(usize, Checkpoint)>,
    pool: IdPool,
}

impl FrameCache {
    /// `ids` is the allocator state after minting `initial`
    pub fn new(initial: Vec<Element>, ids: IdAllocator) -> Self {
        FrameCache::with_interval(initial, ids, FRAME_CHECKPOINT_INTERVAL)
    }

    pub fn with_interval(initial: Vec<Element>, ids: IdAllocator, interval: usize) -> Self {
        FrameCache {
            initial,
            base_ids: ids,
            interval: interval.max(1),
            checkpoints: Vec::new(),
            current: None,
            pool: IdPool::default(),
        }
    }

    /// Elements of step `index` (clamped); the input for an empty sequence
    pub fn frame_at(&mut self, sequence: &StepSequence, index: usize) -> &[Element] {
        if sequence.is_empty() {
            return &self.initial;
        }
        let index = index.min(sequence.len() - 1);
        if !matches!(&self.current, Some((at, _)) if *at == index) {
            let state = self.replay(sequence, index);
            self.current = Some((index, state));
        }
        match &self.current {
            Some((_, state)) => &state.frame,
            None => &self.initial,
        }
    }

    /// Number of stored checkpoints
    pub fn checkpoints(&self) -> usize {
        self.checkpoints.len()
    }

    /// Estimate of the bytes held by stored frames
    pub fn memory_usage(&self) -> usize {
        let frame = std::mem::size_of::<Checkpoint>()
            + self.initial.len() * std::mem::size_of::<Element>();
        let stored = self.checkpoints.len() + usize::from(self.current.is_some()) + 1;
        stored * frame
    }

    /// Project forward to `index` from the closest known frame at or before it
    fn replay(&mut self, sequence: &StepSequence, index: usize) -> Checkpoint {
        let steps = sequence.steps();
        let nearest = self
            .checkpoints
            .len()
            .checked_sub(1)
            .map(|last| last.min(index / self.interval));
        let nearest_at = nearest.map(|k| k * self.interval);

        let (mut at, mut state) = match self.current.take() {
            Some((at, state)) if at <= index && nearest_at.map_or(true, |cp| cp <= at) => {
                (at, state)
            }
            _ => match nearest {
                Some(k) => (k * self.interval, self.checkpoints[k].clone()),
                None => {
                    let mut ids = self.base_ids.clone();
                    let frame = project_with(&mut self.pool, &self.initial, &steps[0].array, &mut ids);
                    let first = Checkpoint { frame, ids };
                    self.checkpoints.push(first.clone());
                    (0, first)
                }
            },
        };

        while at < index {
            at += 1;
            state.frame = project_with(&mut self.pool, &state.frame, &steps[at].array, &mut state.ids);
            if at % self.interval == 0 && at / self.interval == self.checkpoints.len() {
                self.checkpoints.push(state.clone());
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: u64, value: Value) -> Element {
        Element {
            id: ElementId(id),
            value,
        }
    }

    #[test]
    fn ids_follow_a_swap() {
        let mut ids = IdAllocator::new();
        let prev = [element(1, 5), element(2, 3)];
        assert_eq!(
            project(&prev, &[3, 5], &mut ids),
            vec![element(2, 3), element(1, 5)]
        );
    }

    #[test]
    fn duplicates_keep_relative_order() {
        let mut ids = IdAllocator::new();
        let prev = [element(1, 5), element(2, 5)];
        assert_eq!(
            project(&prev, &[5, 5], &mut ids),
            vec![element(1, 5), element(2, 5)]
        );
    }

    #[test]
    fn unknown_values_get_fresh_ids() {
        let mut ids = IdAllocator::new();
        let prev = ids.elements(&[4, 4]);
        let next = project(&prev, &[4, 4, 4], &mut ids);
        assert_eq!(next[0].id, prev[0].id);
        assert_eq!(next[1].id, prev[1].id);
        assert_eq!(next[2].id, ElementId(3));
    }

    #[test]
    fn cache_stores_checkpoints_only_when_passed() {
        use crate::algorithms::Algorithm;
        use crate::snapshot::StepRecorder;

        let mut rec = StepRecorder::new(Algorithm::Bubble, &[5, 4, 3, 2, 1], usize::MAX);
        for i in 0..4 {
            rec.swap(i, i + 1).unwrap();
        }
        let sequence = rec.finish().unwrap();
        let mut ids = IdAllocator::new();
        let initial = ids.elements(&[5, 4, 3, 2, 1]);

        let mut cache = FrameCache::with_interval(initial, ids, 2);
        assert_eq!(cache.checkpoints(), 0);
        assert_eq!(cache.frame_at(&sequence, 0).len(), 5);
        assert_eq!(cache.checkpoints(), 1);
        cache.frame_at(&sequence, 100);
        // steps 0, 2 and 4 of five
        assert_eq!(cache.checkpoints(), 3);
        cache.frame_at(&sequence, 1);
        assert_eq!(cache.checkpoints(), 3);
    }
}
