//! The behavioral side of the engine.
//!
//! # Key Concepts
//!
//! - **Resolution**: `send` filters the active state's transitions by event
//!   and picks a winner through guards
//! - **Switching**: exit hook of the old state, assignment, label update,
//!   entry hook of the new state
//! - **Outcomes**: configuration errors are returned as [`MachineError`];
//!   events the active state does not handle are reported as [`Diagnostic`]s

mod engine;
mod outcome;

pub use engine::{Observer, StateMachine};
pub use outcome::{Diagnostic, MachineError, SendOutcome};
