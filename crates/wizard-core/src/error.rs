//! Error taxonomy for simulation operations.

use thiserror::Error;

use crate::types::ActorHandle;

/// Errors raised by engine operations.
///
/// The engine never aborts on these: `MissingActor` and `InvalidState` are
/// logged and the offending input is dropped.
#[derive(Debug, Error)]
pub enum SimError {
    /// The handle no longer refers to a live actor.
    #[error("actor {0} is not in the scene")]
    MissingActor(ActorHandle),

    /// The operation does not apply in the current state.
    #[error("{operation} is not valid while {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimError {
    /// Errors the engine drops after logging rather than surfacing.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, SimError::MissingActor(_) | SimError::InvalidState { .. })
    }
}
