//! Falling snow field (stateful).
//!
//! Each flake is a plain value record in an arena `Vec`, mutated in place
//! by [`SnowField::advance`]. Horizontal wind drift is stateless and
//! applied at sample time from elapsed time and the flake's phase offset.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// A flake is recycled once it falls below this height.
pub const RECYCLE_FLOOR: f32 = -2.0;

/// Recycled flakes restart from this height.
pub const RECYCLE_CEILING: f32 = 22.0;

/// Half-extent of the spawn volume in x and z.
pub const SPAWN_EXTENT: f32 = 25.0;

/// Top of the initial spawn volume.
const SPAWN_TOP: f32 = 25.0;

/// Amplitude of the horizontal wind drift.
const DRIFT_RADIUS: f32 = 0.5;

/// State for a single snowflake.
#[derive(Debug, Clone, Copy)]
pub struct Snowflake {
    /// Un-drifted position; only y changes as the flake falls.
    pub base: Vec3,
    /// Fall speed in units per second.
    pub fall_speed: f32,
    /// Drift oscillation rate.
    pub drift_speed: f32,
    /// Phase offset for the drift oscillation.
    pub drift_phase: f32,
    /// Size bucket (0=small, 1=medium, 2=large).
    pub size: u8,
}

/// Arena of falling snowflakes.
#[derive(Debug)]
pub struct SnowField {
    flakes: Vec<Snowflake>,
}

impl SnowField {
    /// Spawn `count` flakes uniformly inside the spawn volume.
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        let flakes = (0..count)
            .map(|_| Snowflake {
                base: Vec3::new(
                    (rng.random::<f32>() - 0.5) * 2.0 * SPAWN_EXTENT,
                    rng.random::<f32>() * SPAWN_TOP,
                    (rng.random::<f32>() - 0.5) * 2.0 * SPAWN_EXTENT,
                ),
                // 0.02..0.08 units per frame in the 60 fps reference motion.
                fall_speed: 1.2 + rng.random::<f32>() * 3.6,
                drift_speed: 0.2 + rng.random::<f32>() * 0.5,
                drift_phase: rng.random::<f32>() * TAU,
                size: rng.random_range(0..3),
            })
            .collect();
        Self { flakes }
    }

    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    /// Advance the fall by `dt` seconds. Flakes below the floor restart
    /// at the ceiling with a fresh horizontal position; this is the only
    /// state transition in the scene.
    pub fn advance<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        for flake in &mut self.flakes {
            flake.base.y -= flake.fall_speed * dt;
            if flake.base.y < RECYCLE_FLOOR {
                flake.base.y = RECYCLE_CEILING;
                flake.base.x = (rng.random::<f32>() - 0.5) * 2.0 * SPAWN_EXTENT;
                flake.base.z = (rng.random::<f32>() - 0.5) * 2.0 * SPAWN_EXTENT;
            }
        }
    }
}

/// Display position of a flake at elapsed time `t`, with wind drift.
pub fn drifted(flake: &Snowflake, t: f32) -> Vec3 {
    Vec3::new(
        flake.base.x + (t * flake.drift_speed + flake.drift_phase).sin() * DRIFT_RADIUS,
        flake.base.y,
        flake.base.z + (t * flake.drift_speed * 0.8 + flake.drift_phase).cos() * DRIFT_RADIUS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_spawn_volume() {
        let mut rng = StdRng::seed_from_u64(2);
        let field = SnowField::new(300, &mut rng);
        assert_eq!(field.len(), 300);
        for flake in field.flakes() {
            assert!(flake.base.x.abs() <= SPAWN_EXTENT);
            assert!(flake.base.z.abs() <= SPAWN_EXTENT);
            assert!((0.0..=SPAWN_TOP).contains(&flake.base.y));
            assert!(flake.size < 3);
        }
    }

    #[test]
    fn test_linear_fall() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut field = SnowField::new(50, &mut rng);
        // Start everything high enough that no flake recycles during the test.
        for flake in &mut field.flakes {
            flake.base.y = 20.0;
        }
        let speeds: Vec<f32> = field.flakes().iter().map(|f| f.fall_speed).collect();

        let dt = 1.0 / 60.0;
        let steps = 30;
        for _ in 0..steps {
            field.advance(dt, &mut rng);
        }

        for (flake, speed) in field.flakes().iter().zip(speeds) {
            let expected = 20.0 - steps as f32 * dt * speed;
            assert!((flake.base.y - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_recycle_resets_to_ceiling() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut field = SnowField::new(20, &mut rng);
        for flake in &mut field.flakes {
            flake.base.y = RECYCLE_FLOOR + 0.01;
        }
        // One large step pushes every flake through the floor.
        field.advance(1.0, &mut rng);
        for flake in field.flakes() {
            assert_eq!(flake.base.y, RECYCLE_CEILING);
            assert!(flake.base.x.abs() <= SPAWN_EXTENT);
            assert!(flake.base.z.abs() <= SPAWN_EXTENT);
        }
    }

    #[test]
    fn test_drift_bounded() {
        let mut rng = StdRng::seed_from_u64(6);
        let field = SnowField::new(10, &mut rng);
        for flake in field.flakes() {
            for i in 0..100 {
                let pos = drifted(flake, i as f32 * 0.37);
                assert!((pos.x - flake.base.x).abs() <= DRIFT_RADIUS + 1e-6);
                assert!((pos.z - flake.base.z).abs() <= DRIFT_RADIUS + 1e-6);
                assert_eq!(pos.y, flake.base.y);
            }
        }
    }
}
