// Random input generation and search target policies

use crate::constants::{MAX_ARRAY_SIZE, MAX_GENERATED_VALUE, MIN_GENERATED_VALUE};
use crate::projection::{Element, IdAllocator};
use crate::snapshot::Value;
use rand::seq::IndexedRandom;
use rand::Rng;

/// `size` values drawn uniformly from the generator range, each with a fresh id
pub fn random_elements<R: Rng>(rng: &mut R, ids: &mut IdAllocator, size: usize) -> Vec<Element> {
    let values: Vec<Value> = (0..size)
        .map(|_| rng.random_range(MIN_GENERATED_VALUE..=MAX_GENERATED_VALUE))
        .collect();
    ids.elements(&values)
}

/// Value of a random element, or `None` for an empty array
pub fn pick_target<R: Rng>(rng: &mut R, elements: &[Element]) -> Option<Value> {
    elements.choose(rng).map(|element| element.value)
}

/// Insert `value` at a random position unless some element already holds it.
/// Returns true if an element was inserted.
pub fn ensure_present<R: Rng>(
    rng: &mut R,
    ids: &mut IdAllocator,
    elements: &mut Vec<Element>,
    value: Value,
) -> bool {
    if elements.iter().any(|element| element.value == value) {
        return false;
    }
    let index = rng.random_range(0..=elements.len());
    elements.insert(
        index,
        Element {
            id: ids.mint(),
            value,
        },
    );
    true
}

/// Size bitonic sort can run on: the next power of two, or the largest one
/// that still fits the size limit
pub fn bitonic_size(size: usize) -> usize {
    let up = size.max(1).next_power_of_two();
    if up <= MAX_ARRAY_SIZE {
        up
    } else {
        up / 2
    }
}
