//! Build errors for state machine and transition builders.

use crate::core::RegistryError;
use crate::machine::MachineError;
use crate::validation::GraphIssue;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition target state not specified. Call .to(name)")]
    MissingTarget,

    #[error("Initial state '{0}' is not a registered state")]
    UnknownInitialState(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Machine(#[from] MachineError),

    #[error("State graph has {} issue(s)", .0.len())]
    InvalidGraph(Vec<GraphIssue>),
}
