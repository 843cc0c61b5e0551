//! Pointer-driven rotation and depth easing
//!
//! Maps the raw pointer offset into a damped rotational/positional target and
//! walks each mesh toward it every tick, on top of an optional constant-rate
//! base spin. The easing is an exponential-decay approach to the target: no
//! velocity is kept between ticks, only the transform itself.

use crate::gfx::scene::Transform;
use crate::sim::pointer::PointerSnapshot;

/// Scale from raw pixel offset to easing target
pub const POINTER_TO_TARGET: f32 = 0.001;

/// Per-tick easing target derived from the latest pointer offset
///
/// Recomputed from the pointer snapshot every tick; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EasingTarget {
    pub x: f32,
    pub y: f32,
}

impl EasingTarget {
    pub fn from_pointer(pointer: PointerSnapshot) -> Self {
        Self {
            x: pointer.x * POINTER_TO_TARGET,
            y: pointer.y * POINTER_TO_TARGET,
        }
    }
}

/// Per-mesh easing configuration
///
/// `base_spin` selects whether the mesh's yaw is overwritten from elapsed
/// time before easing is applied. Both assignments are kept sequential on
/// purpose: with the spin enabled the easing only perturbs the spin, while
/// without it the yaw accumulates purely from easing. Do not merge them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasingParams {
    /// Overwrite yaw with `angular_speed * elapsed` each tick
    pub base_spin: bool,
    /// Spin rate in radians per second (only meaningful with `base_spin`)
    pub angular_speed: f32,
    /// Easing factor for yaw toward the horizontal target
    pub ease_y: f32,
    /// Easing factor for pitch toward the vertical target (also couples into
    /// the depth drift)
    pub ease_x: f32,
}

impl Default for EasingParams {
    fn default() -> Self {
        Self {
            base_spin: true,
            angular_speed: 0.5,
            ease_y: 0.5,
            ease_x: 0.05,
        }
    }
}

impl EasingParams {
    /// Fixed-yaw variant: no base spin, rotation accumulates from easing only
    pub fn without_spin() -> Self {
        Self {
            base_spin: false,
            ..Self::default()
        }
    }

    /// Applies one tick of easing to a mesh transform
    ///
    /// Order matters and mirrors the motion design:
    /// 1. optional base spin overwrites yaw from elapsed time;
    /// 2. yaw and pitch ease toward the target;
    /// 3. depth drifts by the pitch easing residual, using the pitch value
    ///    already updated in step 2.
    pub fn apply_to(&self, transform: &mut Transform, target: EasingTarget, elapsed: f32) {
        if self.base_spin {
            transform.rotation.y = self.angular_speed * elapsed;
        }

        transform.rotation.y += self.ease_y * (target.x - transform.rotation.y);
        transform.rotation.x += self.ease_x * (target.y - transform.rotation.x);
        transform.position.z += -self.ease_x * (target.y - transform.rotation.x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_pointer_offset() {
        let target = EasingTarget::from_pointer(PointerSnapshot { x: 400.0, y: -250.0 });
        assert!((target.x - 0.4).abs() < 1e-6);
        assert!((target.y + 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_single_step_toward_target() {
        let params = EasingParams::without_spin();
        let mut transform = Transform::default();
        params.apply_to(&mut transform, EasingTarget { x: 1.0, y: 0.0 }, 0.0);
        // One tick covers half the distance: 0.5 * (1.0 - 0.0)
        assert!((transform.rotation.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_idempotent_at_rest() {
        let params = EasingParams::without_spin();
        let mut transform = Transform::default();
        transform.rotation.y = 0.3;
        transform.rotation.x = -0.1;
        let z_before = transform.position.z;

        // Target matches the current rotation, so easing contributes nothing
        params.apply_to(
            &mut transform,
            EasingTarget { x: 0.3, y: -0.1 },
            0.0,
        );
        assert!((transform.rotation.y - 0.3).abs() < 1e-6);
        assert!((transform.rotation.x + 0.1).abs() < 1e-6);
        assert!((transform.position.z - z_before).abs() < 1e-6);
    }

    #[test]
    fn test_base_spin_overwrites_accumulated_yaw() {
        let params = EasingParams::default();
        let mut transform = Transform::default();
        transform.rotation.y = 42.0; // stale easing accumulation

        params.apply_to(&mut transform, EasingTarget::default(), 2.0);
        // Yaw restarts from 0.5 * 2.0 and then eases toward zero
        let expected = 1.0 + 0.5 * (0.0 - 1.0);
        assert!((transform.rotation.y - expected).abs() < 1e-6);
    }

    #[test]
    fn test_without_spin_yaw_accumulates() {
        let params = EasingParams::without_spin();
        let mut transform = Transform::default();
        let target = EasingTarget { x: 1.0, y: 0.0 };

        params.apply_to(&mut transform, target, 10.0);
        params.apply_to(&mut transform, target, 20.0);
        // Elapsed time is irrelevant without the spin; two easing steps
        assert!((transform.rotation.y - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_depth_drift_uses_updated_pitch() {
        let params = EasingParams::without_spin();
        let mut transform = Transform::default();
        let target = EasingTarget { x: 0.0, y: 1.0 };

        params.apply_to(&mut transform, target, 0.0);
        // Pitch moved to 0.05 first, so the drift sees the residual 0.95
        assert!((transform.rotation.x - 0.05).abs() < 1e-6);
        assert!((transform.position.z + 0.05 * 0.95).abs() < 1e-6);
    }
}
