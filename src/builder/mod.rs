//! Builder API for assembling engines from ordered configuration
//! steps.
//!
//! The builder records initial-state, transition and transition-plus-
//! action steps, then applies them in declared order when
//! [`EngineBuilder::build`] runs, stopping at the first failure.

mod engine;

pub use engine::EngineBuilder;
