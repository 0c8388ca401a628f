//! Checkpoint and resume support for state machines.
//!
//! A checkpoint records where a machine is, not how it behaves: state names,
//! the initial state and the switch history. Guards, actions and hooks live
//! in code and are supplied again by the graph the checkpoint is restored
//! into.

use crate::core::StateHistory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Name of the state the machine was initialized with
    pub initial_state: Option<String>,

    /// Name of the active state
    pub current_state: Option<String>,

    /// Complete switch history
    pub history: StateHistory,
}

impl Checkpoint {
    pub fn new(
        initial_state: Option<String>,
        current_state: Option<String>,
        history: StateHistory,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state,
            current_state,
            history,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::encode("json", e))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::decode("json", e))?;
        checkpoint.ensure_supported()
    }

    /// Compact binary encoding.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::encode("binary", e))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            bincode::deserialize(bytes).map_err(|e| CheckpointError::decode("binary", e))?;
        checkpoint.ensure_supported()
    }

    fn ensure_supported(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateTransition;

    fn sample() -> Checkpoint {
        let mut history = StateHistory::bounded(1000);
        history.record(StateTransition {
            from: None,
            to: "Idle".to_string(),
            event: None,
            timestamp: Utc::now(),
        });
        history.record(StateTransition {
            from: Some("Idle".to_string()),
            to: "Running".to_string(),
            event: Some("start".to_string()),
            timestamp: Utc::now(),
        });
        Checkpoint::new(Some("Idle".to_string()), Some("Running".to_string()), history)
    }

    #[test]
    fn new_checkpoint_has_current_version_and_unique_id() {
        let a = sample();
        let b = sample();

        assert_eq!(a.version, CHECKPOINT_VERSION);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn json_preserves_checkpoint() {
        let checkpoint = sample();

        let json = checkpoint.to_json().unwrap();
        let restored = Checkpoint::from_json(&json).unwrap();

        assert_eq!(restored, checkpoint);
    }

    #[test]
    fn binary_preserves_checkpoint() {
        let checkpoint = sample();

        let bytes = checkpoint.to_binary().unwrap();
        let restored = Checkpoint::from_binary(&bytes).unwrap();

        assert_eq!(restored, checkpoint);
    }

    #[test]
    fn future_version_is_rejected() {
        let mut checkpoint = sample();
        checkpoint.version = CHECKPOINT_VERSION + 1;
        let json = serde_json::to_string(&checkpoint).unwrap();

        let result = Checkpoint::from_json(&json);

        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn garbage_input_fails_to_decode() {
        assert!(matches!(
            Checkpoint::from_json("not json"),
            Err(CheckpointError::Decode { format: "json", .. })
        ));
        assert!(matches!(
            Checkpoint::from_binary(&[0xff, 0x01]),
            Err(CheckpointError::Decode { format: "binary", .. })
        ));
    }
}
