//! Enemy projectile spawner, run on every `Task::SpawnEnemy` tick.

use glam::Mat4;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use wizard_core::config::SimConfig;
use wizard_core::constants::PROJECTILE_MASS;
use wizard_core::events::{SceneEvent, UiEvent};
use wizard_core::orientation::viewer_pose;
use wizard_core::types::{secs_to_ticks, ActorHandle};

use crate::scheduler::{Scheduler, Task};
use crate::session::GameSession;
use crate::world_setup;

/// Spawn one projectile a few meters down the view axis, flying back at the
/// viewer, and count the tick toward the score.
///
/// Does nothing unless a run is in progress.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut GameSession,
    scheduler: &mut Scheduler<Task>,
    viewer: &Mat4,
    config: &SimConfig,
    scene_events: &mut Vec<SceneEvent>,
    ui_events: &mut Vec<UiEvent>,
) -> Option<ActorHandle> {
    if !session.is_playing() {
        log::debug!("spawn tick skipped: no run in progress");
        return None;
    }

    let pose = viewer_pose(viewer);
    let (near, far) = (
        config.spawn_distance_min.min(config.spawn_distance_max),
        config.spawn_distance_max.max(config.spawn_distance_min),
    );
    let distance = rng.gen_range(near..=far) as f32;
    let position = pose.origin + pose.forward * distance;
    let impulse = -pose.forward * config.enemy_strength;

    let velocity = config.kinematics.then(|| impulse / PROJECTILE_MASS);
    let projectile = world_setup::spawn_enemy_projectile(world, position, velocity, scene_events);
    scene_events.push(SceneEvent::ImpulseApplied {
        actor: projectile,
        impulse,
        affected_by_gravity: false,
    });

    scheduler.schedule_once(
        secs_to_ticks(config.enemy_lifespan_secs),
        Task::Expire(projectile),
    );

    // Score counts spawn ticks survived, not dodges or intercepts.
    session.record_spawn(ui_events);
    log::debug!(
        "spawned {projectile} at {distance} m, score {}",
        session.score()
    );
    Some(projectile)
}
