//! Core data model of the state graph.
//!
//! This module contains the static side of the engine:
//! - States with their ordered transitions and lifecycle hooks
//! - Guards, actions and hooks invoked against the host
//! - The name-keyed registry used to resolve transition targets
//! - Immutable history of completed switches
//!
//! Nothing in this module changes which state is active; that is the job of
//! [`crate::machine::StateMachine`].

mod guard;
mod history;
mod registry;
mod state;
mod transition;

pub use guard::{Action, Guard, Hook};
pub use history::{StateHistory, StateTransition};
pub use registry::{RegistryError, StateRegistry};
pub use state::{is_state, one_of_state, State, StateRef};
pub use transition::Transition;
