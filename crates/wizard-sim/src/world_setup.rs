//! Actor spawn factories and registry helpers.
//!
//! Every actor is a hecs entity with an `Actor` tag and a `Position`.
//! Handles given to the host are the entity's bit representation.

use glam::{Mat4, Vec3};
use hecs::{Entity, EntityBuilder, World};

use wizard_core::components::*;
use wizard_core::constants::SPELL_CHANNEL_OFFSET;
use wizard_core::enums::{ActorTag, RemovalReason};
use wizard_core::error::SimError;
use wizard_core::events::SceneEvent;
use wizard_core::orientation::local_to_world;
use wizard_core::types::{ActorHandle, Position, Velocity};

pub fn handle_of(entity: Entity) -> ActorHandle {
    ActorHandle(entity.to_bits().get())
}

/// Resolve a handle to a live entity.
pub fn entity_of(world: &World, handle: ActorHandle) -> Result<Entity, SimError> {
    Entity::from_bits(handle.0)
        .filter(|entity| world.contains(*entity))
        .ok_or(SimError::MissingActor(handle))
}

/// Category tag of a live actor.
pub fn tag_of(world: &World, handle: ActorHandle) -> Result<ActorTag, SimError> {
    let entity = entity_of(world, handle)?;
    world
        .get::<&Actor>(entity)
        .map(|actor| actor.tag())
        .map_err(|_| SimError::MissingActor(handle))
}

/// Spawn the player's body, riding on the viewer origin.
pub fn spawn_player(
    world: &mut World,
    viewer: &Mat4,
    scene_events: &mut Vec<SceneEvent>,
) -> ActorHandle {
    spawn_attached(world, ActorTag::Player, Vec3::ZERO, viewer, scene_events)
}

/// Spawn a channelled spell glowing at the wand tip.
pub fn spawn_channelled_spell(
    world: &mut World,
    viewer: &Mat4,
    scene_events: &mut Vec<SceneEvent>,
) -> ActorHandle {
    spawn_attached(
        world,
        ActorTag::Spell,
        SPELL_CHANNEL_OFFSET,
        viewer,
        scene_events,
    )
}

fn spawn_attached(
    world: &mut World,
    tag: ActorTag,
    offset: Vec3,
    viewer: &Mat4,
    scene_events: &mut Vec<SceneEvent>,
) -> ActorHandle {
    let entity = world.spawn((
        Actor::new(tag),
        Position(local_to_world(viewer, offset)),
        AttachedToViewer { offset },
    ));
    let actor = handle_of(entity);
    scene_events.push(SceneEvent::ActorSpawned {
        actor,
        tag,
        position: offset,
        attached: true,
    });
    actor
}

/// Spawn an enemy projectile in world space. `velocity` is `None` when the
/// host integrates motion itself.
pub fn spawn_enemy_projectile(
    world: &mut World,
    position: Vec3,
    velocity: Option<Vec3>,
    scene_events: &mut Vec<SceneEvent>,
) -> ActorHandle {
    let mut builder = EntityBuilder::new();
    builder
        .add(Actor::new(ActorTag::EnemyProjectile))
        .add(Position(position));
    if let Some(velocity) = velocity {
        builder.add(Velocity(velocity));
    }
    let actor = handle_of(world.spawn(builder.build()));
    scene_events.push(SceneEvent::ActorSpawned {
        actor,
        tag: ActorTag::EnemyProjectile,
        position,
        attached: false,
    });
    actor
}

/// Spawn a stationary practice target.
pub fn spawn_target(
    world: &mut World,
    position: Vec3,
    scene_events: &mut Vec<SceneEvent>,
) -> ActorHandle {
    let entity = world.spawn((Actor::new(ActorTag::Target), Position(position)));
    let actor = handle_of(entity);
    scene_events.push(SceneEvent::ActorSpawned {
        actor,
        tag: ActorTag::Target,
        position,
        attached: false,
    });
    actor
}

/// Remove an actor and tell the host. Returns the removed actor's tag.
pub fn remove_actor(
    world: &mut World,
    handle: ActorHandle,
    reason: RemovalReason,
    scene_events: &mut Vec<SceneEvent>,
) -> Result<ActorTag, SimError> {
    let entity = entity_of(world, handle)?;
    let tag = tag_of(world, handle)?;
    world
        .despawn(entity)
        .map_err(|_| SimError::MissingActor(handle))?;
    scene_events.push(SceneEvent::ActorRemoved {
        actor: handle,
        reason,
    });
    Ok(tag)
}

/// Handles of every live actor carrying `tag`, in registry order.
pub fn actors_with_tag(world: &World, tag: ActorTag) -> Vec<ActorHandle> {
    world
        .query::<&Actor>()
        .iter()
        .filter(|(_, actor)| actor.tag() == tag)
        .map(|(entity, _)| handle_of(entity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_projectile_carries_velocity_only_when_given() {
        let mut world = World::new();
        let mut events = Vec::new();
        let moving = spawn_enemy_projectile(
            &mut world,
            Vec3::new(0.0, 0.0, -4.0),
            Some(Vec3::new(0.0, 0.0, 4.0)),
            &mut events,
        );
        let parked = spawn_enemy_projectile(&mut world, Vec3::ZERO, None, &mut events);

        let moving = entity_of(&world, moving).unwrap();
        let parked = entity_of(&world, parked).unwrap();
        assert_eq!(
            world.get::<&Velocity>(moving).unwrap().0,
            Vec3::new(0.0, 0.0, 4.0)
        );
        assert!(world.get::<&Velocity>(parked).is_err());
        assert_eq!(world.get::<&Position>(moving).unwrap().0, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn removed_handle_no_longer_resolves() {
        let mut world = World::new();
        let mut events = Vec::new();
        let target = spawn_target(&mut world, Vec3::ZERO, &mut events);
        assert_eq!(
            remove_actor(&mut world, target, RemovalReason::Expired, &mut events).unwrap(),
            ActorTag::Target
        );
        assert!(matches!(
            entity_of(&world, target),
            Err(SimError::MissingActor(h)) if h == target
        ));
    }
}
