//! Game state snapshot: the complete visible state handed to the host each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{SceneEvent, UiEvent};
use crate::types::{ActorHandle, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub cast: CastPhase,
    pub session: SessionView,
    pub actors: Vec<ActorView>,
    pub scene_events: Vec<SceneEvent>,
    pub ui_events: Vec<UiEvent>,
}

/// Score and death-screen readouts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub score: u32,
    pub best_score: u32,
    pub started: bool,
    pub alive: bool,
    /// Score to show on the death screen; `None` while no death screen is up.
    pub final_score: Option<u32>,
    /// Whether the enemy spawner is currently armed.
    pub spawner_armed: bool,
    pub backgrounded: bool,
}

/// A live actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub actor: ActorHandle,
    pub tag: ActorTag,
    /// World-space position.
    pub position: Vec3,
    pub velocity: Option<Vec3>,
    pub attached: bool,
}
