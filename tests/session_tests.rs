// Integration tests for session rebuilds

use sortty::algorithms::errors::GenerateError;
use sortty::algorithms::{Algorithm, Mode};
use sortty::projection::ElementId;
use sortty::session::{Session, SessionConfig, SessionError};
use sortty::snapshot::{SearchStatus, Value};
use std::time::Instant;

fn config(algorithm: Algorithm) -> SessionConfig {
    SessionConfig {
        algorithm,
        seed: Some(7),
        ..SessionConfig::default()
    }
}

fn with_values(algorithm: Algorithm, values: &[Value]) -> SessionConfig {
    SessionConfig {
        values: Some(values.to_vec()),
        ..config(algorithm)
    }
}

fn sorted_ids(session: &Session) -> Vec<ElementId> {
    let mut ids: Vec<ElementId> = session.elements().iter().map(|e| e.id).collect();
    ids.sort();
    ids
}

fn final_status(session: &Session) -> SearchStatus {
    session
        .sequence()
        .last()
        .and_then(|step| step.event.probe())
        .map(|probe| probe.status)
        .unwrap()
}

#[test]
fn same_seed_same_session() {
    let now = Instant::now();
    let a = Session::new(config(Algorithm::Quick), now).unwrap();
    let b = Session::new(config(Algorithm::Quick), now).unwrap();
    assert_eq!(a.values(), b.values());
    assert_eq!(a.sequence().steps(), b.sequence().steps());
    assert_eq!(a.size(), 30);
}

#[test]
fn invalid_sizes_are_rejected() {
    let now = Instant::now();
    for size in [0, 201] {
        let err = Session::new(
            SessionConfig {
                size,
                ..config(Algorithm::Bubble)
            },
            now,
        )
        .err()
        .unwrap();
        assert_eq!(
            err,
            SessionError::InvalidSize {
                size,
                min: 1,
                max: 200
            }
        );
    }
}

#[test]
fn bitonic_resizes_random_input() {
    let now = Instant::now();
    let mut session = Session::new(config(Algorithm::Bitonic), now).unwrap();
    assert_eq!(session.size(), 32);
    let notice = session.take_notice().unwrap();
    assert!(notice.contains("Adjusted to 32"), "{}", notice);
    assert_eq!(session.take_notice(), None);

    session.set_size(150, now).unwrap();
    assert_eq!(session.size(), 128);
}

#[test]
fn switching_to_bitonic_regenerates_random_input() {
    let now = Instant::now();
    let mut session = Session::new(config(Algorithm::Bubble), now).unwrap();
    session.set_algorithm(Algorithm::Bitonic, now).unwrap();
    assert_eq!(session.algorithm(), Algorithm::Bitonic);
    assert_eq!(session.size(), 32);
    assert!(session.take_notice().is_some());
}

#[test]
fn failed_change_leaves_session_untouched() {
    let now = Instant::now();
    let values = [6, 1, 5, 2, 4, 3];
    let mut session = Session::new(with_values(Algorithm::Bubble, &values), now).unwrap();
    session.player_mut().jump_to(4, now);
    let steps_before = session.sequence().len();

    let err = session.set_algorithm(Algorithm::Bitonic, now).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Generate(GenerateError::InvalidInputShape {
            algorithm: Algorithm::Bitonic,
            ..
        })
    ));
    assert_eq!(session.algorithm(), Algorithm::Bubble);
    assert_eq!(session.values(), values.to_vec());
    assert_eq!(session.sequence().len(), steps_before);
    assert_eq!(session.player().cursor(), 4);
}

#[test]
fn explicit_bitonic_input_must_be_power_of_two() {
    let err = Session::new(with_values(Algorithm::Bitonic, &[3, 1, 2]), Instant::now())
        .err()
        .unwrap();
    assert!(matches!(err, SessionError::Generate(_)));
}

#[test]
fn algorithm_change_keeps_the_input() {
    let now = Instant::now();
    let mut session = Session::new(config(Algorithm::Bubble), now).unwrap();
    let values = session.values();
    let ids = sorted_ids(&session);
    session.set_algorithm(Algorithm::Heap, now).unwrap();
    assert_eq!(session.values(), values);
    assert_eq!(sorted_ids(&session), ids);
    assert_eq!(session.player().cursor(), 0);
}

#[test]
fn final_frame_is_sorted_with_the_same_ids() {
    let now = Instant::now();
    let mut session = Session::new(config(Algorithm::Heap), now).unwrap();
    let ids = sorted_ids(&session);
    session.player_mut().jump_to_end(now);

    let frame = session.current_frame().to_vec();
    assert!(frame.windows(2).all(|w| w[0].value <= w[1].value));
    let mut frame_ids: Vec<ElementId> = frame.iter().map(|e| e.id).collect();
    frame_ids.sort();
    assert_eq!(frame_ids, ids);
    assert_eq!(session.current_roles().len(), frame.len());
}

#[test]
fn shuffle_keeps_element_ids() {
    let now = Instant::now();
    let mut session = Session::new(config(Algorithm::Insertion), now).unwrap();
    let ids = sorted_ids(&session);
    session.shuffle(now).unwrap();
    assert_eq!(sorted_ids(&session), ids);
}

#[test]
fn reset_draws_fresh_ids() {
    let now = Instant::now();
    let mut session = Session::new(config(Algorithm::Insertion), now).unwrap();
    let ids = sorted_ids(&session);
    session.reset(now).unwrap();
    assert_eq!(session.size(), ids.len());
    assert!(sorted_ids(&session).iter().all(|id| !ids.contains(id)));
}

#[test]
fn set_size_clamps() {
    let now = Instant::now();
    let mut session = Session::new(config(Algorithm::Bubble), now).unwrap();
    session.set_size(1000, now).unwrap();
    assert_eq!(session.size(), 200);
    session.set_size(0, now).unwrap();
    assert_eq!(session.size(), 1);
}

#[test]
fn search_mode_picks_a_present_target() {
    let now = Instant::now();
    let mut session = Session::new(config(Algorithm::Bubble), now).unwrap();
    session.set_mode(Mode::Search, now).unwrap();
    assert_eq!(session.algorithm(), Algorithm::Linear);
    let target = session.target().unwrap();
    assert!(session.values().contains(&target));
    assert!(matches!(final_status(&session), SearchStatus::Found(_)));

    session.set_mode(Mode::Sort, now).unwrap();
    assert_eq!(session.algorithm(), Algorithm::Bubble);
}

#[test]
fn absent_target_is_inserted() {
    let now = Instant::now();
    let config = SessionConfig {
        target: Some(4),
        ..with_values(Algorithm::Binary, &[1, 3, 5, 7])
    };
    let session = Session::new(config, now).unwrap();
    assert_eq!(session.size(), 5);
    assert!(session.values().contains(&4));
    assert!(matches!(final_status(&session), SearchStatus::Found(_)));
}

#[test]
fn keep_absent_leaves_the_array_alone() {
    let now = Instant::now();
    let config = SessionConfig {
        target: Some(4),
        keep_absent: true,
        ..with_values(Algorithm::Binary, &[1, 3, 5, 7])
    };
    let mut session = Session::new(config, now).unwrap();
    assert_eq!(session.values(), vec![1, 3, 5, 7]);
    assert_eq!(final_status(&session), SearchStatus::Absent);

    session.set_target(6, now).unwrap();
    assert_eq!(session.size(), 4);
    assert_eq!(session.target(), Some(6));
    assert_eq!(final_status(&session), SearchStatus::Absent);
}

#[test]
fn set_target_inserts_missing_value() {
    let now = Instant::now();
    let mut session = Session::new(with_values(Algorithm::Jump, &[10, 20, 30]), now).unwrap();
    session.set_target(25, now).unwrap();
    assert_eq!(session.target(), Some(25));
    assert_eq!(session.size(), 4);
    assert!(matches!(final_status(&session), SearchStatus::Found(_)));
}

#[test]
fn rebuild_keeps_speed_and_pauses() {
    let now = Instant::now();
    let mut session = Session::new(config(Algorithm::Bubble), now).unwrap();
    let speed = session.player().speed().faster(40);
    session.set_speed(speed);
    session.player_mut().play(now).unwrap();

    session.shuffle(now).unwrap();
    assert!(!session.player().is_playing());
    assert_eq!(session.player().speed(), speed);
}
