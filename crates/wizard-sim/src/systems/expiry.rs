//! Expiry system: removes actors whose lifespan task fell due.

use hecs::World;

use wizard_core::enums::RemovalReason;
use wizard_core::events::SceneEvent;
use wizard_core::types::ActorHandle;

use crate::world_setup;

/// Remove `actor` if it is still alive. Returns whether anything was removed.
///
/// An actor destroyed by a contact before its lifespan ran out is simply
/// skipped.
pub fn run(world: &mut World, actor: ActorHandle, scene_events: &mut Vec<SceneEvent>) -> bool {
    match world_setup::remove_actor(world, actor, RemovalReason::Expired, scene_events) {
        Ok(tag) => {
            log::debug!("{tag:?} {actor} expired");
            true
        }
        Err(_) => false,
    }
}
