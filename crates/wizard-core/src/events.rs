//! Events emitted by the simulation.
//!
//! `SceneEvent`s tell the host what to mirror onto its scene graph.
//! `UiEvent`s feed score labels and the death screen.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::ActorHandle;

/// Scene graph changes the host must apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// A new actor exists. If `attached`, parent it to the camera at `position`
    /// (a viewer-local offset); otherwise `position` is in world space.
    ActorSpawned {
        actor: ActorHandle,
        tag: ActorTag,
        position: Vec3,
        attached: bool,
    },
    /// Re-parent an attached actor into world space at `position`.
    ActorDetached { actor: ActorHandle, position: Vec3 },
    /// Apply an impulse to a physics body.
    ImpulseApplied {
        actor: ActorHandle,
        impulse: Vec3,
        affected_by_gravity: bool,
    },
    /// Remove the actor's node.
    ActorRemoved {
        actor: ActorHandle,
        reason: RemovalReason,
    },
    /// Play a cosmetic effect.
    EffectSpawned {
        kind: EffectKind,
        point: Vec3,
        lifetime_secs: f64,
    },
    /// Wand animation cue: raised while channelling, lowered on release.
    WandTilt { raised: bool },
}

/// Notifications for the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    /// A session began (first start or restart).
    SessionStarted,
    /// Score label should show a new value.
    ScoreChanged { score: u32 },
    /// Player was struck; show the death screen.
    PlayerHit { final_score: u32, best_score: u32 },
    /// Two non-player actors destroyed each other.
    ProjectileDestroyed { point: Vec3, target_destroyed: bool },
}

/// A contact reported by the host physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub a: ActorHandle,
    pub b: ActorHandle,
    /// World-space contact point, used only to place effects.
    pub point: Vec3,
}
