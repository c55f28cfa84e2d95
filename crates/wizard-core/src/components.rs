//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ActorTag;

/// Every actor carries exactly one of these. The tag is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    tag: ActorTag,
}

impl Actor {
    pub fn new(tag: ActorTag) -> Self {
        Self { tag }
    }

    pub fn tag(&self) -> ActorTag {
        self.tag
    }
}

/// Actor rides on the viewer at a fixed local offset instead of moving freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttachedToViewer {
    pub offset: Vec3,
}

/// Fired bodies that fall under gravity when the engine integrates motion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AffectedByGravity;
