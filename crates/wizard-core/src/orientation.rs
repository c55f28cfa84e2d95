//! Viewer pose helpers.
//!
//! The host hands over the camera's 4x4 world transform. The camera looks
//! down its local -Z axis, so the view direction is the negated third basis
//! column and the aim point sits one meter in front of the translation.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Direction and aim point derived from a viewer transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewerPose {
    /// Unit vector the viewer is looking along.
    pub forward: Vec3,
    /// Translation column plus `forward`.
    pub position: Vec3,
    /// Camera origin (the translation column).
    pub origin: Vec3,
}

impl Default for ViewerPose {
    fn default() -> Self {
        viewer_pose(&Mat4::IDENTITY)
    }
}

/// View direction of a transform.
pub fn forward(transform: &Mat4) -> Vec3 {
    (-transform.z_axis.truncate()).normalize_or_zero()
}

/// Compute the viewer pose for a camera transform.
pub fn viewer_pose(transform: &Mat4) -> ViewerPose {
    let forward = forward(transform);
    let origin = transform.w_axis.truncate();
    ViewerPose {
        forward,
        position: origin + forward,
        origin,
    }
}

/// Map a point expressed in the viewer's local frame into world space.
pub fn local_to_world(transform: &Mat4, local: Vec3) -> Vec3 {
    transform.transform_point3(local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    #[test]
    fn identity_looks_down_negative_z() {
        let pose = viewer_pose(&Mat4::IDENTITY);
        assert_eq!(pose.forward, Vec3::NEG_Z);
        assert_eq!(pose.position, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(pose.origin, Vec3::ZERO);
    }

    #[test]
    fn translation_offsets_position_only() {
        let transform = Mat4::from_translation(Vec3::new(2.0, 1.5, 3.0));
        let pose = viewer_pose(&transform);
        assert_eq!(pose.forward, Vec3::NEG_Z);
        assert!((pose.position - Vec3::new(2.0, 1.5, 2.0)).length() < 1e-6);
    }

    #[test]
    fn rotation_turns_forward() {
        // Yaw 90 degrees left: -Z rotates onto -X.
        let transform = Mat4::from_quat(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        let pose = viewer_pose(&transform);
        assert!((pose.forward - Vec3::NEG_X).length() < 1e-6);
        assert!((pose.forward.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn local_offset_follows_rotation() {
        let transform = Mat4::from_rotation_translation(
            Quat::from_rotation_y(std::f32::consts::PI),
            Vec3::new(0.0, 1.0, 0.0),
        );
        let world = local_to_world(&transform, Vec3::new(0.0, 0.0, -0.8));
        assert!((world - Vec3::new(0.0, 1.0, 0.8)).length() < 1e-6);
    }
}
