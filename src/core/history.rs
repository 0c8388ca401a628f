//! State switch history tracking.
//!
//! Every completed switch is recorded by state name, together with the event
//! that caused it. Initialization and resets are recorded with no event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single completed state switch.
///
/// # Example
///
/// ```rust
/// use polymachine::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Some("Idle".to_string()),
///     to: "Running".to_string(),
///     event: Some("start".to_string()),
///     timestamp: Utc::now(),
/// };
///
/// assert!(!transition.is_self_transition());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being left, `None` when the machine was initialized
    pub from: Option<String>,
    /// The state being entered
    pub to: String,
    /// The event that fired the transition, `None` for initialization and resets
    pub event: Option<String>,
    /// When the switch completed
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    pub fn is_self_transition(&self) -> bool {
        self.from.as_deref() == Some(self.to.as_str())
    }
}

/// Ordered history of state switches, optionally capped.
///
/// Once a cap is set, recording past it drops the oldest entries.
///
/// # Example
///
/// ```rust
/// use polymachine::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::bounded(2);
///
/// for (from, to) in [("Idle", "Running"), ("Running", "Done"), ("Done", "Idle")] {
///     history.record(StateTransition {
///         from: Some(from.to_string()),
///         to: to.to_string(),
///         event: None,
///         timestamp: Utc::now(),
///     });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path(), vec!["Running", "Done", "Idle"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
    #[serde(default)]
    max_len: Option<usize>,
}

impl StateHistory {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            max_len: None,
        }
    }

    /// Create an empty history keeping at most `max_len` entries.
    pub fn bounded(max_len: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            max_len: Some(max_len),
        }
    }

    /// Append a switch, dropping the oldest entries beyond the cap.
    pub fn record(&mut self, transition: StateTransition) {
        self.transitions.push_back(transition);
        self.trim();
    }

    /// Change the cap, trimming immediately if the history is over it.
    pub fn set_limit(&mut self, max_len: Option<usize>) {
        self.max_len = max_len;
        self.trim();
    }

    pub fn limit(&self) -> Option<usize> {
        self.max_len
    }

    fn trim(&mut self) {
        if let Some(max) = self.max_len {
            while self.transitions.len() > max {
                self.transitions.pop_front();
            }
        }
    }

    /// Get the path of state names traversed.
    ///
    /// Starts with the `from` of the oldest retained record when there is
    /// one, then the `to` of each record.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(from) = self.transitions.front().and_then(|t| t.from.as_deref()) {
            path.push(from);
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Elapsed time between the oldest and the newest retained record.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Retained records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &StateTransition> {
        self.transitions.iter()
    }

    pub fn get(&self, index: usize) -> Option<&StateTransition> {
        self.transitions.get(index)
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
