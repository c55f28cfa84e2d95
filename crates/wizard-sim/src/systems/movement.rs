//! Kinematic integration and viewer attachment.
//!
//! Hosts with their own physics disable integration via `SimConfig::kinematics`;
//! attachment sync always runs so the registry tracks the viewer.

use glam::Mat4;
use hecs::World;

use wizard_core::components::{AffectedByGravity, AttachedToViewer};
use wizard_core::constants::{DT, GRAVITY};
use wizard_core::orientation::local_to_world;
use wizard_core::types::{Position, Velocity};

/// Integrate velocity into position for every free-flying body.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel, gravity)) in
        world.query_mut::<(&mut Position, &mut Velocity, Option<&AffectedByGravity>)>()
    {
        if gravity.is_some() {
            vel.0 += GRAVITY * DT;
        }
        pos.0 += vel.0 * DT;
    }
}

/// Move every attached actor to its offset under the current viewer transform.
pub fn sync_attached(world: &mut World, viewer: &Mat4) {
    for (_entity, (pos, attached)) in world.query_mut::<(&mut Position, &AttachedToViewer)>() {
        pos.0 = local_to_world(viewer, attached.offset);
    }
}
