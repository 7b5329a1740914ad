//! Document Approval Workflow
//!
//! This example demonstrates a multi-stage approval workflow with
//! transition actions.
//!
//! Key concepts:
//! - Multi-stage linear workflow (DRAFT -> REVIEW -> APPROVED -> PUBLISHED)
//! - Actions perform side effects (audit logging)
//! - A failing action blocks its transition
//!
//! Run with: cargo run --example document_workflow

use flowstate::{Action, Engine};

fn audit(entry: &'static str) -> Action {
    Action::new(move || {
        println!("  [Audit] {entry}");
        Ok(())
    })
}

fn main() {
    println!("=== Document Approval Workflow ===\n");

    let mut engine = Engine::builder()
        .initial_state("DRAFT")
        .transition_with_action("DRAFT", "submit", "REVIEW", audit("draft submitted for review"))
        .transition_with_action("REVIEW", "approve", "APPROVED", audit("review approved"))
        .transition_with_action("APPROVED", "publish", "PUBLISHED", audit("document published"))
        .transition("REVIEW", "reject", "DRAFT")
        .build()
        .expect("workflow graph is well-formed");

    println!("Starting in: {}", engine.current_state().name());

    for event in ["submit", "approve", "publish"] {
        match engine.process_event(event) {
            Ok(state) => println!("'{event}' fired -> now in {}", state.name()),
            Err(err) => println!("'{event}' failed: {err}"),
        }
    }

    // PUBLISHED has no outgoing transitions; further events are rejected
    if let Err(err) = engine.process_event("submit") {
        println!("\nTerminal state holds: {err}");
    }
}
