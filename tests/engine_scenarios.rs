//! End-to-end scenarios driven through the public API.

use flowstate::{Action, Engine, EngineError, DEFAULT_INITIAL_STATE};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const START: &str = "START";
const S1: &str = "STATE_1";
const S2: &str = "STATE_2";
const S3: &str = "STATE_3";
const S4: &str = "STATE_4";
const FINISH: &str = "FINISH";

const E1: &str = "EVENT_1";
const E2: &str = "EVENT_2";
const E3: &str = "EVENT_3";
const E4: &str = "EVENT_4";
const E5: &str = "EVENT_5";

#[test]
fn engine_without_options_uses_default_initial_state() {
    let engine = Engine::new();

    assert_eq!(engine.initial_state().name(), DEFAULT_INITIAL_STATE);
    assert_eq!(engine.current_state().name(), DEFAULT_INITIAL_STATE);
    assert_eq!(engine.initial_state().name(), engine.current_state().name());
}

#[test]
fn builder_walks_the_full_graph() {
    let mut engine = Engine::builder()
        .initial_state(START)
        .transition(START, E1, S1)
        .transition(S1, E2, S2)
        .transition(S1, E4, S4)
        .transition(S2, E3, S3)
        .transition(S3, E3, S2)
        .transition(S3, E5, FINISH)
        .transition(S4, E5, FINISH)
        .build()
        .unwrap();

    assert_eq!(engine.initial_state().name(), START);

    let next = engine.process_event(E1).unwrap();
    assert_eq!(next.name(), S1);

    let next = engine.process_event(E2).unwrap();
    assert_eq!(next.name(), S2);

    // E2 is not defined on STATE_2
    let err = engine.process_event(E2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "event \"EVENT_2\" is not defined for the state \"STATE_2\""
    );
    assert_eq!(engine.current_state().name(), S2);
}

#[test]
fn cyclic_transitions_walk_both_directions() {
    let mut engine = Engine::builder()
        .initial_state(S2)
        .transition(S2, E3, S3)
        .transition(S3, E3, S2)
        .build()
        .unwrap();

    engine.process_event(E3).unwrap();
    assert_eq!(engine.current_state().name(), S3);
    engine.process_event(E3).unwrap();
    assert_eq!(engine.current_state().name(), S2);
}

#[test]
fn register_state_returns_destination_and_keeps_cursor() {
    let mut engine = Engine::with_initial_state(START);

    let s1 = engine.register_state(START, E1, S1).unwrap();
    assert_eq!(s1.name(), S1);

    assert_eq!(engine.current_state().name(), START);
    assert_eq!(engine.get_state(S1).unwrap().name(), S1);
}

#[test]
fn duplicate_registration_preserves_first_edge() {
    let mut engine = Engine::with_initial_state(START);
    engine.register_state(START, E1, S1).unwrap();

    let err = engine.register_state(START, E1, S2).unwrap_err();
    assert!(matches!(err, EngineError::DuplicateEvent { .. }));

    let start = engine.get_state(START).unwrap();
    assert_eq!(start.successor(&E1.into()).unwrap(), S1);
}

#[test]
fn lookup_is_idempotent() {
    let mut engine = Engine::with_initial_state(START);
    engine.register_state(START, E1, S1).unwrap();

    let first = engine.get_state(S1).map(|s| s.name().clone());
    let second = engine.get_state(S1).map(|s| s.name().clone());
    assert_eq!(first, second);

    assert!(engine.get_state("FAKE STATE").is_none());
    assert!(engine.get_state("FAKE STATE").is_none());
}

#[test]
fn failing_action_gates_the_transition() {
    let mut engine = Engine::with_initial_state(S1);
    engine.register_state(S1, E1, S2).unwrap();
    engine
        .attach_action(E1, Action::new(|| Err("some error".into())))
        .unwrap();

    let err = engine.process_event(E1).unwrap_err();
    assert_eq!(err.to_string(), "some error");
    assert_eq!(engine.current_state().name(), S1);
}

#[test]
fn successful_action_allows_the_transition() {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);

    let mut engine = Engine::with_initial_state(S1);
    engine.register_state(S1, E1, S2).unwrap();
    engine
        .attach_action(
            E1,
            Action::new(move || {
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        )
        .unwrap();

    let next = engine.process_event(E1).unwrap();
    assert_eq!(next.name(), S2);
    assert_eq!(engine.current_state().name(), S2);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn jump_bypasses_attached_actions() {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);

    let mut engine = Engine::with_initial_state(S1);
    engine.register_state(S1, E1, S2).unwrap();
    engine
        .attach_action(
            E1,
            Action::new(move || {
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        )
        .unwrap();

    engine.jump_to_state(S2).unwrap();
    assert_eq!(engine.current_state().name(), S2);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn jump_to_unknown_state_fails() {
    let mut engine = Engine::with_initial_state(START);

    let err = engine.jump_to_state("NOWHERE").unwrap_err();
    assert_eq!(err.to_string(), "state \"NOWHERE\" is not defined");
    assert_eq!(engine.current_state().name(), START);
}

#[test]
fn builder_action_fires_only_on_process_event() {
    let val = Arc::new(AtomicUsize::new(10));
    let seen = Arc::clone(&val);

    let mut engine = Engine::builder()
        .initial_state(START)
        .transition_with_action(
            START,
            E1,
            S1,
            Action::new(move || {
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        )
        .build()
        .unwrap();

    assert_eq!(val.load(Ordering::SeqCst), 10);
    engine.process_event(E1).unwrap();
    assert_eq!(val.load(Ordering::SeqCst), 11);
}

#[test]
fn builder_surfaces_action_failure_from_process_event() {
    let mut engine = Engine::builder()
        .initial_state(START)
        .transition_with_action(START, E1, S1, Action::new(|| Err("some error".into())))
        .build()
        .unwrap();

    let err = engine.process_event(E1).unwrap_err();
    assert_eq!(err.to_string(), "some error");
    assert_eq!(engine.current_state().name(), START);
}

#[test]
fn builder_reports_first_failing_step() {
    let result = Engine::builder()
        .initial_state(START)
        .transition(START, E1, S1)
        .transition(START, E1, S2)
        .build();

    assert!(matches!(
        result,
        Err(EngineError::DuplicateEvent { .. })
    ));
}

#[test]
fn registration_remains_legal_after_processing_events() {
    let mut engine = Engine::builder()
        .initial_state(START)
        .transition(START, E1, S1)
        .build()
        .unwrap();

    engine.process_event(E1).unwrap();

    // late registration adds unreached nodes and edges
    engine.register_state(S3, E5, FINISH).unwrap();
    assert!(engine.get_state(S3).is_some());
    assert!(engine.get_state(FINISH).is_some());
    assert_eq!(engine.current_state().name(), S1);
}
