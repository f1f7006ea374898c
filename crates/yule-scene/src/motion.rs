//! Pure time-based motion functions.
//!
//! Every animated transform in the scene is a closed-form function of
//! elapsed time in seconds, so rendering is frame-rate independent and
//! each function is trivially testable in isolation.

use std::f32::consts::TAU;

/// Tree rotation rate in radians per second.
pub const TREE_YAW_RATE: f32 = 0.3;

/// Star spin rate in radians per second.
pub const STAR_SPIN_RATE: f32 = 0.6;

/// Period of the tree breathing oscillation, seconds.
pub const BREATH_PERIOD: f32 = 5.0;

/// Breathing amplitude as a fraction of the base scale.
pub const BREATH_AMPLITUDE: f32 = 0.02;

/// Period of the star brightness pulse, seconds.
pub const PULSE_PERIOD: f32 = 2.0;

/// Ornament sway amplitude about the z axis, radians.
pub const SWAY_Z_AMPLITUDE: f32 = 0.08;

/// Ornament sway amplitude about the x axis, radians.
pub const SWAY_X_AMPLITUDE: f32 = 0.05;

/// Yaw of the tree group at elapsed time `t`.
pub fn tree_yaw(t: f32) -> f32 {
    t * TREE_YAW_RATE
}

/// Breathing scale multiplier around 1.0 (within ±2%).
pub fn breath_scale(t: f32) -> f32 {
    1.0 + (t * TAU / BREATH_PERIOD).sin() * BREATH_AMPLITUDE
}

/// Pendulum sway of an ornament: `(rot_z, rot_x)` in radians.
pub fn ornament_sway(t: f32, phase: f32) -> (f32, f32) {
    let rot_z = (t * 1.5 + phase).sin() * SWAY_Z_AMPLITUDE;
    let rot_x = (t * 1.2 + phase).cos() * SWAY_X_AMPLITUDE;
    (rot_z, rot_x)
}

/// Axial spin of the tree-top star.
pub fn star_spin(t: f32) -> f32 {
    t * STAR_SPIN_RATE
}

/// Brightness pulse of the star, in `[0.8, 1.0]`.
pub fn star_pulse(t: f32) -> f32 {
    0.9 + (t * TAU / PULSE_PERIOD).sin() * 0.1
}

/// Gentle float of a gift box: `(y offset, yaw wobble)`.
pub fn gift_float(t: f32, phase: f32) -> (f32, f32) {
    let bob = (t * 2.0 + phase).sin() * 0.08;
    let wobble = (t + phase).sin() * 0.06;
    (bob, wobble)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sway_within_amplitude() {
        for i in 0..500 {
            let t = i as f32 * 0.173;
            let phase = (i as f32 * 0.713) % TAU;
            let (rot_z, rot_x) = ornament_sway(t, phase);
            assert!(rot_z.abs() <= SWAY_Z_AMPLITUDE + 1e-6);
            assert!(rot_x.abs() <= SWAY_X_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn test_breath_within_two_percent() {
        for i in 0..500 {
            let t = i as f32 * 0.091;
            let scale = breath_scale(t);
            assert!((0.98..=1.02).contains(&scale), "scale {scale} at t {t}");
        }
    }

    #[test]
    fn test_breath_periodic() {
        let a = breath_scale(1.3);
        let b = breath_scale(1.3 + BREATH_PERIOD);
        assert!((a - b).abs() < 1e-4);
    }

    #[test]
    fn test_star_pulse_bounds() {
        for i in 0..500 {
            let pulse = star_pulse(i as f32 * 0.057);
            assert!((0.8..=1.0).contains(&pulse));
        }
    }

    #[test]
    fn test_rotation_is_time_linear() {
        // Frame-rate independence: doubling elapsed time doubles the angle.
        assert!((tree_yaw(4.0) - 2.0 * tree_yaw(2.0)).abs() < 1e-6);
        assert!((star_spin(4.0) - 2.0 * star_spin(2.0)).abs() < 1e-6);
    }
}
