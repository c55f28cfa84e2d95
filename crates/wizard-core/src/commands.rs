//! Commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, in order.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// All host and player inputs the engine understands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Gesture ---
    /// Touch down: begin channelling a spell.
    PressStart,
    /// Touch up: release the channelled spell.
    PressEnd,

    // --- Viewer ---
    /// Latest camera transform reported by the AR session.
    SetViewerTransform { transform: Mat4 },

    // --- Session ---
    /// Begin a session from the title screen.
    StartSession,
    /// Dismiss the death screen and play again.
    Restart,
    /// Place a stationary practice target.
    PlaceTarget { position: Vec3 },

    // --- App lifecycle ---
    /// App moved to the background.
    EnterBackground,
    /// App returned to the foreground.
    EnterForeground,
}
