//! Turnstile State Machine
//!
//! This example demonstrates a cyclic state machine with a
//! host-driven reset.
//!
//! Key concepts:
//! - Cyclic transitions (LOCKED <-> UNLOCKED)
//! - Unknown events leave the cursor in place
//! - jump_to_state resets the machine without firing actions
//!
//! Run with: cargo run --example turnstile

use flowstate::Engine;

fn main() {
    println!("=== Turnstile State Machine ===\n");

    let mut engine = Engine::builder()
        .initial_state("LOCKED")
        .transition("LOCKED", "coin", "UNLOCKED")
        .transition("UNLOCKED", "push", "LOCKED")
        .build()
        .expect("turnstile graph is well-formed");

    println!("Initial state: {}", engine.current_state().name());

    for event in ["push", "coin", "coin", "push"] {
        match engine.process_event(event) {
            Ok(state) => println!("'{event}' -> {}", state.name()),
            Err(err) => println!("'{event}' rejected: {err}"),
        }
    }

    // maintenance override: force the turnstile open
    engine
        .jump_to_state("UNLOCKED")
        .expect("UNLOCKED is registered");
    println!("\nAfter maintenance jump: {}", engine.current_state().name());
}
