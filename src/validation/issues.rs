//! Problems detected in a state graph.

use thiserror::Error;

/// A defect in an authored state graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphIssue {
    #[error("transition '{event}' in state '{state}' targets unknown state '{target}'")]
    DanglingTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("state '{state}' has several transitions for event '{event}' and not all are guarded")]
    AmbiguousEvent { state: String, event: String },
}
