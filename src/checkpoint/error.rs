//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while saving or restoring a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Failed to encode checkpoint as {format}: {reason}")]
    Encode { format: &'static str, reason: String },

    #[error("Failed to decode {format} checkpoint: {reason}")]
    Decode { format: &'static str, reason: String },

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint names a state the target machine does not register
    #[error("Checkpoint references unknown state '{name}'")]
    UnknownState { name: String },
}

impl CheckpointError {
    pub(crate) fn encode(format: &'static str, err: impl ToString) -> Self {
        Self::Encode {
            format,
            reason: err.to_string(),
        }
    }

    pub(crate) fn decode(format: &'static str, err: impl ToString) -> Self {
        Self::Decode {
            format,
            reason: err.to_string(),
        }
    }
}
