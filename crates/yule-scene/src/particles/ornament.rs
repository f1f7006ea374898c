//! Ornament placement over the tree surface.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use ratatui::style::Color;

use crate::palette;

/// Total number of ornaments on the tree.
pub const ORNAMENT_COUNT: usize = 45;

/// One ring band of the tree surface where ornaments may hang.
#[derive(Debug, Clone, Copy)]
struct Band {
    radius: f32,
    h_start: f32,
    h_end: f32,
}

const BANDS: [Band; 3] = [
    Band {
        radius: 2.4,
        h_start: 0.8,
        h_end: 2.2,
    },
    Band {
        radius: 1.8,
        h_start: 2.4,
        h_end: 3.4,
    },
    Band {
        radius: 1.1,
        h_start: 3.6,
        h_end: 4.8,
    },
];

/// Ornament shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentKind {
    Bauble,
    Bow,
}

/// A hanging ornament, fixed after generation; only its sway rotation is
/// recomputed each frame from elapsed time and the phase offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ornament {
    /// Hang point in tree-local coordinates.
    pub pos: Vec3,
    pub color: Color,
    /// Phase offset so ornaments do not sway in lockstep.
    pub phase: f32,
    pub kind: OrnamentKind,
}

/// Place [`ORNAMENT_COUNT`] ornaments over the ring bands, round-robin by
/// index, with the band radius tapered toward the top of each band.
pub fn sample_ornaments<R: Rng>(rng: &mut R) -> Vec<Ornament> {
    (0..ORNAMENT_COUNT)
        .map(|i| {
            let band = BANDS[i % BANDS.len()];
            let h = band.h_start + rng.random::<f32>() * (band.h_end - band.h_start);
            let max_r = (1.0 - (h - band.h_start) / (band.h_end + 1.0)) * band.radius;
            let angle = rng.random::<f32>() * TAU;

            let kind = if rng.random::<f32>() > 0.8 {
                OrnamentKind::Bow
            } else {
                OrnamentKind::Bauble
            };
            let color = match kind {
                OrnamentKind::Bow => palette::BOW_RED,
                OrnamentKind::Bauble => {
                    palette::ORNAMENT_COLORS[rng.random_range(0..palette::ORNAMENT_COLORS.len())]
                }
            };

            Ornament {
                pos: Vec3::new(angle.cos() * max_r, h, angle.sin() * max_r),
                color,
                phase: rng.random::<f32>() * TAU,
                kind,
            }
        })
        .collect()
}
