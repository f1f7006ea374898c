//! Orbit camera around the scene center.

use glam::{Mat4, Vec3};

/// Closest the camera may approach the target.
pub const MIN_DISTANCE: f32 = 12.0;

/// Farthest the camera may pull back.
pub const MAX_DISTANCE: f32 = 30.0;

/// Polar angle limits (from the +Y axis); the upper clamp keeps the
/// camera from dipping below the ground plane.
pub const MIN_POLAR: f32 = 0.3;
pub const MAX_POLAR: f32 = std::f32::consts::PI / 2.1;

/// Vertical field of view in radians.
const FOV_Y: f32 = 40.0 * std::f32::consts::PI / 180.0;

/// Spherical-coordinate orbit camera with clamped zoom and tilt.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    azimuth: f32,
    polar: f32,
    distance: f32,
    target: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Equivalent of an eye at (0, 6, 18) looking at the origin.
        let eye = Vec3::new(0.0, 6.0, 18.0);
        let distance = eye.length();
        Self {
            azimuth: 0.0,
            polar: (eye.y / distance).acos(),
            distance,
            target: Vec3::ZERO,
        }
    }
}

impl OrbitCamera {
    /// Rotate around the vertical axis.
    pub fn orbit(&mut self, delta: f32) {
        self.azimuth += delta;
    }

    /// Move toward or away from the target, within the distance clamps.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Tilt up or down, within the polar clamps.
    pub fn tilt(&mut self, delta: f32) {
        self.polar = (self.polar + delta).clamp(MIN_POLAR, MAX_POLAR);
    }

    /// Current camera position in world space.
    pub fn eye(&self) -> Vec3 {
        let dir = Vec3::new(
            self.polar.sin() * self.azimuth.sin(),
            self.polar.cos(),
            self.polar.sin() * self.azimuth.cos(),
        );
        self.target + dir * self.distance
    }

    /// Combined view-projection matrix for the given aspect ratio.
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(FOV_Y, aspect, 0.1, 100.0);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_eye() {
        let eye = OrbitCamera::default().eye();
        assert!((eye - Vec3::new(0.0, 6.0, 18.0)).length() < 1e-3);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = OrbitCamera::default();
        camera.zoom(-100.0);
        assert!((camera.distance - MIN_DISTANCE).abs() < 1e-6);
        camera.zoom(100.0);
        assert!((camera.distance - MAX_DISTANCE).abs() < 1e-6);
    }

    #[test]
    fn test_tilt_clamped() {
        let mut camera = OrbitCamera::default();
        camera.tilt(10.0);
        assert!(camera.polar <= MAX_POLAR);
        camera.tilt(-10.0);
        assert!(camera.polar >= MIN_POLAR);
    }

    #[test]
    fn test_target_projects_to_center() {
        let camera = OrbitCamera::default();
        let clip = camera.view_projection(1.6) * Vec3::ZERO.extend(1.0);
        assert!(clip.w > 0.0);
        assert!((clip.x / clip.w).abs() < 1e-5);
        assert!((clip.y / clip.w).abs() < 1e-5);
    }
}
