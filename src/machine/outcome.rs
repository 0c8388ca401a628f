//! Results and errors of driving a state machine.

use thiserror::Error;

/// Fatal errors. These indicate a malformed state graph or a misuse of the
/// machine and are propagated to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("an event name is required to send")]
    InvalidArgument,

    #[error("cannot send event '{event}' with no active state")]
    InvalidState { event: String },

    #[error("multiple transitions found without a condition for event '{event}' in state '{state}'")]
    AmbiguousTransition { event: String, state: String },

    #[error("machine is already initialized in state '{state}'")]
    AlreadyInitialized { state: String },

    #[error("machine has never been initialized")]
    NotInitialized,
}

/// Non-fatal conditions. They are logged and returned to the caller, but the
/// call itself succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("no transitions found in current state '{state}' for event '{event}'")]
    NoMatchingTransition { state: String, event: String },

    #[error("transition target '{target}' is not a registered state")]
    InvalidTransitionTarget { target: String },
}

/// What a successful call did to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// A state switch completed
    Transitioned { from: Option<String>, to: String },

    /// Guarded candidates existed but none of their guards passed
    GuardsRejected,

    /// Nothing was switched; the diagnostic explains why
    Ignored(Diagnostic),
}

impl SendOutcome {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// Name of the entered state, if a switch completed.
    pub fn entered(&self) -> Option<&str> {
        match self {
            Self::Transitioned { to, .. } => Some(to.as_str()),
            _ => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Ignored(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}
