//! Snapshot system: queries the world and builds a `GameStateSnapshot`.
//!
//! Read-only; never modifies the world.

use hecs::World;

use wizard_core::components::{Actor, AttachedToViewer};
use wizard_core::events::{SceneEvent, UiEvent};
use wizard_core::state::{ActorView, GameStateSnapshot};
use wizard_core::types::{Position, SimTime, Velocity};

use crate::session::GameSession;
use crate::systems::casting::Wand;
use crate::world_setup::handle_of;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    session: &GameSession,
    wand: &Wand,
    scene_events: Vec<SceneEvent>,
    ui_events: Vec<UiEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase: session.phase(),
        cast: wand.phase(),
        session: session.view(),
        actors: build_actors(world),
        scene_events,
        ui_events,
    }
}

fn build_actors(world: &World) -> Vec<ActorView> {
    let mut query = world.query::<(
        &Actor,
        &Position,
        Option<&Velocity>,
        Option<&AttachedToViewer>,
    )>();
    let mut actors: Vec<ActorView> = query
        .iter()
        .map(|(entity, (actor, pos, vel, attached))| ActorView {
            actor: handle_of(entity),
            tag: actor.tag(),
            position: pos.0,
            velocity: vel.map(|v| v.0),
            attached: attached.is_some(),
        })
        .collect();
    actors.sort_by_key(|a| a.actor);
    actors
}
