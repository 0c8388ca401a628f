//! Runtime configuration for a state machine.

use serde::{Deserialize, Serialize};

const DEFAULT_MAX_HISTORY: usize = 1000;

/// Behavior switches for a [`StateMachine`](crate::machine::StateMachine).
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use polymachine::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{ "name": "player" }"#).unwrap();
///
/// assert_eq!(config.name.as_deref(), Some("player"));
/// assert!(config.notify_self_transitions);
/// assert!(config.record_history);
/// assert_eq!(config.max_history, Some(1000));
/// assert!(!config.validate_on_build);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Label attached to every log event emitted by the machine
    pub name: Option<String>,

    /// Publish a transient empty label before a self-transition so that
    /// edge-triggered observers see a change
    pub notify_self_transitions: bool,

    /// Record completed switches in the machine history
    pub record_history: bool,

    /// Oldest history entries are dropped past this many; `None` keeps all
    pub max_history: Option<usize>,

    /// Reject graphs with dangling targets or unguarded duplicate events at build time
    pub validate_on_build: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            name: None,
            notify_self_transitions: true,
            record_history: true,
            max_history: Some(DEFAULT_MAX_HISTORY),
            validate_on_build: false,
        }
    }
}

impl MachineConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub(crate) fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("state-machine")
    }
}
