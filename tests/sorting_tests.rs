// Integration tests for the sorting step generators

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortty::algorithms::errors::GenerateError;
use sortty::algorithms::{generate, Algorithm, GeneratorConfig};
use sortty::snapshot::{Step, StepEvent, StepSequence, Value};
use std::collections::BTreeSet;

fn run(algorithm: Algorithm, input: &[Value]) -> StepSequence {
    run_seeded(algorithm, input, 7)
}

fn run_seeded(algorithm: Algorithm, input: &[Value], seed: u64) -> StepSequence {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(algorithm, input, None, &GeneratorConfig::default(), &mut rng)
        .unwrap_or_else(|e| panic!("{} failed on {:?}: {}", algorithm, input, e))
}

fn sorted(input: &[Value]) -> Vec<Value> {
    let mut values = input.to_vec();
    values.sort_unstable();
    values
}

/// Sorts that accept any non-negative input of any length
const GENERAL_SORTS: [Algorithm; 15] = [
    Algorithm::Bubble,
    Algorithm::Selection,
    Algorithm::Insertion,
    Algorithm::Merge,
    Algorithm::Quick,
    Algorithm::Heap,
    Algorithm::Gnome,
    Algorithm::Pancake,
    Algorithm::Comb,
    Algorithm::OddEven,
    Algorithm::Shell,
    Algorithm::Miracle,
    Algorithm::Radix,
    Algorithm::Decide,
    Algorithm::SaltShaker,
];

/// Positions `step` may change relative to `prev`; `None` means any
fn allowed_changes(event: &StepEvent) -> Option<Vec<usize>> {
    match event {
        StepEvent::Swap { pair, .. } => Some(vec![pair.0, pair.1]),
        StepEvent::Shift { to, .. } => Some(vec![*to]),
        StepEvent::Place { index, .. } => Some(vec![*index]),
        StepEvent::Merge {
            cursor,
            write: true,
            ..
        } => Some(vec![*cursor]),
        StepEvent::Flip { range } => Some((range.0..=range.1).collect()),
        StepEvent::Shuffle { .. } | StepEvent::Intervention { .. } | StepEvent::Collect { .. } => {
            None
        }
        _ => Some(Vec::new()),
    }
}

fn assert_consistent(input: &[Value], sequence: &StepSequence) {
    let mut prev: &[Value] = input;
    for step in sequence {
        assert_eq!(step.array.len(), prev.len(), "step {} changed length", step.index);
        if let Some(allowed) = allowed_changes(&step.event) {
            for (i, (a, b)) in prev.iter().zip(&step.array).enumerate() {
                if a != b {
                    assert!(
                        allowed.contains(&i),
                        "step {} ({}) changed index {}",
                        step.index,
                        step.event,
                        i
                    );
                }
            }
        }
        assert_eq!(sorted(prev), sorted(&step.array), "step {} lost values", step.index);
        prev = &step.array;
    }
}

fn assert_settled_grows(sequence: &StepSequence) {
    let mut seen: BTreeSet<usize> = BTreeSet::new();
    for step in sequence {
        let current: BTreeSet<usize> = step.settled.iter().copied().collect();
        assert!(
            current.is_superset(&seen),
            "step {} dropped settled indices",
            step.index
        );
        if !step.event.is_terminal() {
            assert!(
                current.len() < step.array.len(),
                "{}: step {} ({}) settles every index before the terminal step",
                sequence.algorithm(),
                step.index,
                step.event
            );
        }
        seen = current;
    }
}

fn assert_terminal(input: &[Value], sequence: &StepSequence) {
    let last: &Step = sequence.last().expect("sequence is never empty");
    assert_eq!(last.event, StepEvent::Complete);
    assert_eq!(last.array, sorted(input));
    let settled: BTreeSet<usize> = last.settled.iter().copied().collect();
    assert_eq!(settled, (0..input.len()).collect());
    assert_eq!(
        sequence.iter().filter(|s| s.event.is_terminal()).count(),
        1,
        "only the last step is terminal"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn general_sorts_are_correct(input in prop::collection::vec(0i64..500, 0..24)) {
        for algorithm in GENERAL_SORTS {
            let sequence = run(algorithm, &input);
            assert_terminal(&input, &sequence);
            assert_consistent(&input, &sequence);
            assert_settled_grows(&sequence);
        }
    }

    #[test]
    fn bitonic_sorts_power_of_two_lengths(
        input in (0u32..6).prop_flat_map(|k| prop::collection::vec(0i64..500, 1usize << k))
    ) {
        let sequence = run(Algorithm::Bitonic, &input);
        assert_terminal(&input, &sequence);
        assert_consistent(&input, &sequence);
    }

    #[test]
    fn bogo_always_terminates_sorted(input in prop::collection::vec(0i64..50, 0..6), seed in any::<u64>()) {
        let sequence = run_seeded(Algorithm::Bogo, &input, seed);
        assert_terminal(&input, &sequence);
        assert_consistent(&input, &sequence);
    }

    #[test]
    fn deterministic_sorts_repeat_exactly(input in prop::collection::vec(0i64..500, 0..16)) {
        for algorithm in GENERAL_SORTS {
            if algorithm.is_stochastic() {
                continue;
            }
            let first = run_seeded(algorithm, &input, 1);
            let second = run_seeded(algorithm, &input, 2);
            prop_assert_eq!(first.steps(), second.steps());
        }
    }
}

#[test]
fn empty_input_yields_one_terminal_step() {
    for algorithm in Algorithm::SORTING {
        let sequence = run(algorithm, &[]);
        assert_eq!(sequence.len(), 1, "{}", algorithm);
        assert_eq!(sequence.steps()[0].event, StepEvent::Complete);
    }
}

#[test]
fn negative_values_sort_except_radix() {
    let input = [3, -7, 0, -1, 12, -7];
    for algorithm in GENERAL_SORTS {
        if algorithm == Algorithm::Radix {
            continue;
        }
        assert_terminal(&input, &run(algorithm, &input));
    }
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate(Algorithm::Radix, &input, None, &GeneratorConfig::default(), &mut rng)
        .unwrap_err();
    assert!(matches!(err, GenerateError::InvalidInputShape { .. }));
}

#[test]
fn bubble_swaps_first_pair_before_settling_last_index() {
    let sequence = run(Algorithm::Bubble, &[5, 3, 8, 1]);
    let last = sequence.last().unwrap();
    assert_eq!(last.array, vec![1, 3, 5, 8]);

    let swap = sequence
        .iter()
        .position(|s| matches!(s.event, StepEvent::Swap { pair: (0, 1), .. }))
        .expect("5 and 3 are swapped");
    let settled = sequence
        .iter()
        .position(|s| s.is_settled(3))
        .expect("index 3 settles");
    assert!(swap < settled);
    assert_eq!(sequence.steps()[swap].array, vec![3, 5, 8, 1]);
}

#[test]
fn bubble_counts_every_comparison() {
    let sequence = run(Algorithm::Bubble, &[4, 3, 2, 1]);
    let comparisons = sequence.iter().filter(|s| s.event.is_comparison()).count();
    let swaps = sequence.iter().filter(|s| s.event.is_swap()).count();
    assert_eq!((comparisons, swaps), (6, 6));
}

#[test]
fn bubble_stops_after_a_clean_pass() {
    let sequence = run(Algorithm::Bubble, &[1, 2, 3, 4, 5]);
    let comparisons = sequence.iter().filter(|s| s.event.is_comparison()).count();
    assert_eq!(comparisons, 4);
}

#[test]
fn bitonic_rejects_length_six() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate(
        Algorithm::Bitonic,
        &[6, 5, 4, 3, 2, 1],
        None,
        &GeneratorConfig::default(),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::InvalidInputShape {
            algorithm: Algorithm::Bitonic,
            ..
        }
    ));
}

#[test]
fn selection_settles_left_to_right() {
    let sequence = run(Algorithm::Selection, &[3, 1, 2]);
    let before_terminal = &sequence.steps()[sequence.len() - 2];
    assert_eq!(before_terminal.settled, vec![0, 1]);
}

#[test]
fn heap_prepends_extracted_indices() {
    let sequence = run(Algorithm::Heap, &[2, 9, 4, 7]);
    let before_terminal = &sequence.steps()[sequence.len() - 2];
    assert_eq!(before_terminal.settled, vec![1, 2, 3]);
}

#[test]
fn miracle_caps_and_intervenes() {
    let config = GeneratorConfig {
        miracle_cap: 3,
        ..GeneratorConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let sequence = generate(Algorithm::Miracle, &[2, 1], None, &config, &mut rng).unwrap();
    let interventions = sequence
        .iter()
        .filter(|s| matches!(s.event, StepEvent::Intervention { attempts: 3 }))
        .count();
    assert_eq!(interventions, 1);
    assert_eq!(sequence.last().unwrap().array, vec![1, 2]);
}

#[test]
fn memory_budget_is_enforced() {
    let config = GeneratorConfig {
        memory_limit: 4 * 1024,
        ..GeneratorConfig::default()
    };
    let input: Vec<Value> = (0..64).rev().collect();
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate(Algorithm::Bubble, &input, None, &config, &mut rng).unwrap_err();
    assert!(matches!(err, GenerateError::StepLimitExceeded { .. }));
}
