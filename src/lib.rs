//! Flowstate: a small finite state machine engine
//!
//! Flowstate lets a host application declare named states, the named
//! events that transition between them, and optional side-effecting
//! actions run when a transition fires, then drives a single current
//! state through that graph as events are fed in.
//!
//! # Core Concepts
//!
//! - **State**: a named node holding its outgoing transitions
//! - **Event**: a named trigger, resolved against the current state
//! - **Action**: an optional callback that can abort its transition by
//!   failing
//! - **Cursor**: the engine's single pointer to the current state,
//!   moved only by successful transitions or explicit jumps
//!
//! # Example
//!
//! ```rust
//! use flowstate::{Action, Engine};
//!
//! # fn main() -> Result<(), flowstate::EngineError> {
//! let mut engine = Engine::builder()
//!     .initial_state("DRAFT")
//!     .transition("DRAFT", "submit", "REVIEW")
//!     .transition_with_action(
//!         "REVIEW",
//!         "approve",
//!         "PUBLISHED",
//!         Action::new(|| {
//!             println!("archiving approval record");
//!             Ok(())
//!         }),
//!     )
//!     .build()?;
//!
//! engine.process_event("submit")?;
//! engine.process_event("approve")?;
//! assert_eq!(engine.current_state().name(), "PUBLISHED");
//!
//! // jumps override the cursor without firing any action
//! engine.jump_to_state("DRAFT")?;
//! assert_eq!(engine.current_state().name(), "DRAFT");
//! # Ok(())
//! # }
//! ```
//!
//! The engine is synchronous and single-threaded by design: actions run
//! to completion inside `process_event`, and hosts that share an engine
//! across threads serialize access externally.

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::EngineBuilder;
pub use crate::core::{
    Action, ActionError, Engine, EngineError, EventName, State, StateName, DEFAULT_INITIAL_STATE,
};
