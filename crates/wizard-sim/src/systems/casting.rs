//! Spell casting state machine: press to channel, release to fire.

use glam::{Mat4, Vec3};
use hecs::World;

use wizard_core::components::{AffectedByGravity, AttachedToViewer};
use wizard_core::config::SimConfig;
use wizard_core::constants::{PROJECTILE_MASS, WAND_OFFSET};
use wizard_core::enums::CastPhase;
use wizard_core::error::SimError;
use wizard_core::events::SceneEvent;
use wizard_core::orientation::{local_to_world, viewer_pose};
use wizard_core::types::{secs_to_ticks, ActorHandle, Position, Velocity};

use crate::scheduler::{Scheduler, Task};
use crate::world_setup;

/// Where the cast gesture currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CastState {
    #[default]
    Idle,
    /// Holding a spell on the wand. Only one can exist at a time.
    Channeling { spell: ActorHandle },
}

/// The player's wand: cast state plus the release animation clock.
#[derive(Debug, Clone, Default)]
pub struct Wand {
    state: CastState,
    /// Tick at which the last release animation finishes.
    fire_animation_ends_at: u64,
}

impl Wand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CastState {
        self.state
    }

    pub fn phase(&self) -> CastPhase {
        match self.state {
            CastState::Idle => CastPhase::Idle,
            CastState::Channeling { .. } => CastPhase::Channeling,
        }
    }

    /// Spell currently held on the wand, if any.
    pub fn channelled_spell(&self) -> Option<ActorHandle> {
        match self.state {
            CastState::Idle => None,
            CastState::Channeling { spell } => Some(spell),
        }
    }

    pub fn is_animating(&self, now: u64) -> bool {
        now < self.fire_animation_ends_at
    }

    /// World position of the wand model hanging below and ahead of the viewer.
    pub fn rig_position(viewer: &Mat4) -> Vec3 {
        local_to_world(viewer, WAND_OFFSET)
    }
}

/// Touch down. Returns the new spell, or `None` when the press is ignored
/// (already channelling, or the last release is still animating).
pub fn press_start(
    world: &mut World,
    wand: &mut Wand,
    viewer: &Mat4,
    now: u64,
    scene_events: &mut Vec<SceneEvent>,
) -> Option<ActorHandle> {
    if let CastState::Channeling { spell } = wand.state {
        log::debug!("press start ignored: already channelling {spell}");
        return None;
    }
    if wand.is_animating(now) {
        log::debug!("press start ignored: release animation still playing");
        return None;
    }

    let spell = world_setup::spawn_channelled_spell(world, viewer, scene_events);
    wand.state = CastState::Channeling { spell };
    scene_events.push(SceneEvent::WandTilt { raised: true });
    log::debug!("channelling {spell}");
    Some(spell)
}

/// Touch up. Fires the held spell along the view direction and schedules
/// its removal.
///
/// The wand returns to `Idle` even when the spell vanished while it was
/// held (for example, it touched an incoming projectile).
pub fn press_end(
    world: &mut World,
    wand: &mut Wand,
    scheduler: &mut Scheduler<Task>,
    viewer: &Mat4,
    config: &SimConfig,
    scene_events: &mut Vec<SceneEvent>,
) -> Result<ActorHandle, SimError> {
    let spell = match wand.state {
        CastState::Idle => {
            return Err(SimError::InvalidState {
                operation: "press_end",
                state: "idle",
            })
        }
        CastState::Channeling { spell } => spell,
    };
    wand.state = CastState::Idle;

    let entity = world_setup::entity_of(world, spell)?;
    let attached = world
        .remove_one::<AttachedToViewer>(entity)
        .map_err(|_| SimError::MissingActor(spell))?;

    let pose = viewer_pose(viewer);
    let position = local_to_world(viewer, attached.offset);
    let impulse = pose.forward * config.spell_strength;

    if let Ok(mut pos) = world.get::<&mut Position>(entity) {
        pos.0 = position;
    }
    if config.kinematics {
        world
            .insert(entity, (Velocity(impulse / PROJECTILE_MASS), AffectedByGravity))
            .map_err(|_| SimError::MissingActor(spell))?;
    }

    scheduler.schedule_once(
        secs_to_ticks(config.spell_lifespan_secs),
        Task::Expire(spell),
    );

    let now = scheduler.now();
    wand.fire_animation_ends_at = if config.fire_animation_secs > 0.0 {
        now + secs_to_ticks(config.fire_animation_secs)
    } else {
        now
    };

    scene_events.push(SceneEvent::ActorDetached {
        actor: spell,
        position,
    });
    scene_events.push(SceneEvent::ImpulseApplied {
        actor: spell,
        impulse,
        affected_by_gravity: true,
    });
    scene_events.push(SceneEvent::WandTilt { raised: false });
    log::debug!("fired {spell} with impulse {impulse}");
    Ok(spell)
}
