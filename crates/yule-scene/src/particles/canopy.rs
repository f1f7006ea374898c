//! Conical point-cloud sampling for the tree foliage.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use ratatui::style::Color;

use crate::palette;

/// Geometric bounds of one conical canopy layer.
#[derive(Debug, Clone, Copy)]
pub struct LayerSpec {
    pub count: usize,
    pub radius: f32,
    pub height: f32,
    pub y_offset: f32,
}

impl LayerSpec {
    /// Scale the point count by a density multiplier, keeping at least one.
    pub fn scaled(self, density: f32) -> Self {
        Self {
            count: ((self.count as f32 * density) as usize).max(1),
            ..self
        }
    }
}

/// The three canopy layers, bottom to top.
pub const LAYERS: [LayerSpec; 3] = [
    LayerSpec {
        count: 6000,
        radius: 2.8,
        height: 2.5,
        y_offset: 0.5,
    },
    LayerSpec {
        count: 4000,
        radius: 2.1,
        height: 2.0,
        y_offset: 2.2,
    },
    LayerSpec {
        count: 2000,
        radius: 1.4,
        height: 1.5,
        y_offset: 3.6,
    },
];

/// One point of the tree foliage cloud, in tree-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanopyPoint {
    pub pos: Vec3,
    pub color: Color,
}

/// Sample one conical layer.
///
/// Radial density is biased toward the trunk via a square-root transform
/// of a uniform draw, then tapered linearly with height to form a cone.
pub fn sample_layer<R: Rng>(spec: LayerSpec, rng: &mut R) -> Vec<CanopyPoint> {
    (0..spec.count)
        .map(|_| {
            let r = rng.random::<f32>().sqrt();
            let angle = rng.random::<f32>() * TAU;
            let h = rng.random::<f32>() * spec.height;

            let max_r = (1.0 - h / spec.height) * spec.radius;
            let radial = r * max_r;

            CanopyPoint {
                pos: Vec3::new(angle.cos() * radial, h + spec.y_offset, angle.sin() * radial),
                color: palette::canopy_color(rng),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_points_inside_cone() {
        let mut rng = StdRng::seed_from_u64(11);
        for spec in LAYERS {
            for point in sample_layer(spec, &mut rng) {
                let h = point.pos.y - spec.y_offset;
                assert!((0.0..=spec.height).contains(&h));

                let radial = (point.pos.x * point.pos.x + point.pos.z * point.pos.z).sqrt();
                let bound = (1.0 - h / spec.height) * spec.radius;
                assert!(radial <= bound + 1e-4, "radial {radial} > bound {bound}");
            }
        }
    }

    #[test]
    fn test_bottom_layer_example() {
        let spec = LayerSpec {
            count: 100,
            radius: 2.8,
            height: 2.5,
            y_offset: 0.5,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let points = sample_layer(spec, &mut rng);
        assert_eq!(points.len(), 100);
        for point in points {
            assert!((0.5..=3.0).contains(&point.pos.y));
            let radial = (point.pos.x * point.pos.x + point.pos.z * point.pos.z).sqrt();
            let bound = (1.0 - (point.pos.y - 0.5) / 2.5) * 2.8;
            assert!(radial <= bound + 1e-4);
        }
    }

    #[test]
    fn test_density_scaling() {
        let spec = LAYERS[0].scaled(0.25);
        assert_eq!(spec.count, 1500);
        assert_eq!(LAYERS[2].scaled(0.0001).count, 1);
    }

    #[test]
    fn test_same_seed_same_layer() {
        let a = sample_layer(LAYERS[1], &mut StdRng::seed_from_u64(99));
        let b = sample_layer(LAYERS[1], &mut StdRng::seed_from_u64(99));
        assert_eq!(a.len(), b.len());
        assert!(a.iter().zip(&b).all(|(x, y)| x == y));
    }
}
