//! Scene assembly: owns every sampled point cloud and emits renderable
//! splats for a given elapsed time.

use std::f32::consts::TAU;

use glam::{Mat4, Quat, Vec3};
use rand::{Rng, SeedableRng, rngs::StdRng};
use ratatui::style::Color;

use crate::chars;
use crate::motion;
use crate::palette;
use crate::particles::canopy::{self, CanopyPoint};
use crate::particles::ornament::{self, Ornament, OrnamentKind};
use crate::particles::snow::{self, SnowField};

/// Vertical offset applied to the main assembly (tree, gifts, ground).
/// Snow stays at its original height for full-screen coverage.
const STAGE_OFFSET: f32 = -2.0;

/// Base uniform scale of the tree.
const TREE_SCALE: f32 = 1.3;

/// Tree-local position of the star cluster.
const STAR_POS: Vec3 = Vec3::new(0.0, 5.2, 0.0);

/// Hang vector from an ornament's anchor down to its bauble.
const HANG: Vec3 = Vec3::new(0.0, -0.1, 0.0);

/// Fixed gift spots around the tree base: position and wrap color.
const GIFT_SPOTS: [(Vec3, Color); 7] = [
    (Vec3::new(-1.8, 0.0, 1.5), Color::Rgb(220, 20, 60)),
    (Vec3::new(1.8, 0.0, 1.2), Color::Rgb(255, 215, 0)),
    (Vec3::new(-0.5, 0.0, 2.5), Color::Rgb(30, 144, 255)),
    (Vec3::new(1.0, 0.0, 2.8), Color::Rgb(186, 85, 211)),
    (Vec3::new(-3.0, 0.0, -1.0), Color::Rgb(34, 197, 94)),
    (Vec3::new(2.5, 0.0, -1.5), Color::Rgb(255, 255, 255)),
    (Vec3::new(0.2, 0.0, -2.5), Color::Rgb(255, 77, 77)),
];

const GIFT_SURFACE_POINTS: usize = 160;
const GIFT_BOW_POINTS: usize = 18;
const TRUNK_POINTS: usize = 240;
const FLOOR_POINTS: usize = 700;
const FLOOR_RADIUS: f32 = 35.0;
const MOUND_POINTS: usize = 380;
const MOUND_RADIUS: f32 = 12.0;

/// One renderable point with its glyph and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Splat {
    pub pos: Vec3,
    pub glyph: char,
    pub color: Color,
}

#[derive(Debug, Clone, Copy)]
enum GiftPart {
    Wrap,
    Ribbon,
    Bow,
}

#[derive(Debug, Clone, Copy)]
struct GiftPoint {
    pos: Vec3,
    part: GiftPart,
}

#[derive(Debug)]
struct Gift {
    position: Vec3,
    color: Color,
    yaw: f32,
    phase: f32,
    cloud: Vec<GiftPoint>,
}

#[derive(Debug, Clone, Copy)]
struct GroundPoint {
    pos: Vec3,
    color: Color,
    glyph: char,
}

/// The full holiday scene. All clouds are sampled once at construction
/// from the seed; per-frame work is limited to the snow fall state and
/// closed-form transforms.
#[derive(Debug)]
pub struct Scene {
    canopy: Vec<CanopyPoint>,
    ornaments: Vec<Ornament>,
    snow: SnowField,
    gifts: Vec<Gift>,
    trunk: Vec<Vec3>,
    star: Vec<Vec3>,
    ground: Vec<GroundPoint>,
    rng: StdRng,
}

impl Scene {
    /// Build the scene. The same seed always yields the same scene.
    pub fn new(seed: u64, snow_count: usize, density: f32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let canopy = canopy::LAYERS
            .iter()
            .flat_map(|spec| canopy::sample_layer(spec.scaled(density), &mut rng))
            .collect();
        let ornaments = ornament::sample_ornaments(&mut rng);
        let snow = SnowField::new(snow_count, &mut rng);
        let gifts = GIFT_SPOTS
            .iter()
            .map(|&(position, color)| Gift {
                position,
                color,
                yaw: rng.random::<f32>() * std::f32::consts::PI,
                phase: rng.random::<f32>() * TAU,
                cloud: sample_gift_cloud(&mut rng),
            })
            .collect();
        let trunk = sample_trunk(&mut rng);
        let star = star_cluster();
        let ground = sample_ground(&mut rng);

        Self {
            canopy,
            ornaments,
            snow,
            gifts,
            trunk,
            star,
            ground,
            rng,
        }
    }

    /// Advance the stateful parts of the scene by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.snow.advance(dt, &mut self.rng);
    }

    /// Emit every renderable point for elapsed time `t` into `out`.
    pub fn splats(&self, t: f32, out: &mut Vec<Splat>) {
        out.clear();

        let tree = Mat4::from_translation(Vec3::new(0.0, STAGE_OFFSET, 0.0))
            * Mat4::from_rotation_y(motion::tree_yaw(t))
            * Mat4::from_scale(Vec3::splat(TREE_SCALE * motion::breath_scale(t)));

        for (i, point) in self.canopy.iter().enumerate() {
            out.push(Splat {
                pos: tree.transform_point3(point.pos),
                glyph: chars::CANOPY_CHARS[i % chars::CANOPY_CHARS.len()],
                color: point.color,
            });
        }

        for &pos in &self.trunk {
            out.push(Splat {
                pos: tree.transform_point3(pos),
                glyph: chars::TRUNK_CHAR,
                color: palette::TRUNK_BROWN,
            });
        }

        for ornament in &self.ornaments {
            let (rot_z, rot_x) = motion::ornament_sway(t, ornament.phase);
            let swing = Quat::from_rotation_z(rot_z) * Quat::from_rotation_x(rot_x) * HANG;
            let glyph = match ornament.kind {
                OrnamentKind::Bauble => chars::ORNAMENT_CHAR,
                OrnamentKind::Bow => chars::BOW_CHAR,
            };
            out.push(Splat {
                pos: tree.transform_point3(ornament.pos + swing),
                glyph,
                color: ornament.color,
            });
        }

        let pulse = motion::star_pulse(t);
        let spin = Quat::from_rotation_y(motion::star_spin(t));
        let star_color = palette::scale_color(palette::STAR_GOLD, pulse);
        for (i, &pos) in self.star.iter().enumerate() {
            let glyph = if i == 0 {
                chars::STAR_CHAR
            } else {
                chars::STAR_RAY_CHAR
            };
            out.push(Splat {
                pos: tree.transform_point3(STAR_POS + spin * pos),
                glyph,
                color: star_color,
            });
        }

        for gift in &self.gifts {
            let (bob, wobble) = motion::gift_float(t, gift.phase);
            let rot = Quat::from_rotation_y(gift.yaw + wobble);
            let base = gift.position + Vec3::new(0.0, STAGE_OFFSET + bob, 0.0);
            for point in &gift.cloud {
                let color = match point.part {
                    GiftPart::Wrap => gift.color,
                    GiftPart::Ribbon | GiftPart::Bow => palette::RIBBON_WHITE,
                };
                out.push(Splat {
                    pos: base + rot * point.pos,
                    glyph: chars::GIFT_CHAR,
                    color,
                });
            }
        }

        for ground in &self.ground {
            out.push(Splat {
                pos: ground.pos,
                glyph: ground.glyph,
                color: ground.color,
            });
        }

        for (i, flake) in self.snow.flakes().iter().enumerate() {
            // Two glyphs per size bucket; vary only within the bucket.
            let glyph_idx = (flake.size as usize * 2 + i % 2) % chars::SNOW_CHARS.len();
            out.push(Splat {
                pos: snow::drifted(flake, t),
                glyph: chars::SNOW_CHARS[glyph_idx],
                color: palette::SNOW_WHITE,
            });
        }
    }
}

/// Surface point cloud for one gift box (1.0 x 0.8 x 1.0) with ribbon
/// bands and a bow knot, in gift-local coordinates.
fn sample_gift_cloud<R: Rng>(rng: &mut R) -> Vec<GiftPoint> {
    let mut cloud = Vec::with_capacity(GIFT_SURFACE_POINTS + GIFT_BOW_POINTS);

    for _ in 0..GIFT_SURFACE_POINTS {
        let u = rng.random::<f32>() - 0.5;
        let v = rng.random::<f32>() - 0.5;
        // Five visible faces; the bottom face is never seen.
        let pos = match rng.random_range(0..5) {
            0 => Vec3::new(u, v * 0.8, 0.5),
            1 => Vec3::new(u, v * 0.8, -0.5),
            2 => Vec3::new(0.5, v * 0.8, u),
            3 => Vec3::new(-0.5, v * 0.8, u),
            _ => Vec3::new(u, 0.4, v),
        };
        // The two ribbon bands run through the middle of each axis.
        let part = if pos.x.abs() < 0.1 || pos.z.abs() < 0.1 {
            GiftPart::Ribbon
        } else {
            GiftPart::Wrap
        };
        cloud.push(GiftPoint { pos, part });
    }

    for _ in 0..GIFT_BOW_POINTS {
        let theta = rng.random::<f32>() * TAU;
        let cos_phi = rng.random::<f32>() * 2.0 - 1.0;
        let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
        let dir = Vec3::new(sin_phi * theta.cos(), cos_phi, sin_phi * theta.sin());
        cloud.push(GiftPoint {
            pos: Vec3::new(0.0, 0.45, 0.0) + dir * 0.15,
            part: GiftPart::Bow,
        });
    }

    cloud
}

/// Tapered cylinder shell for the trunk (r 0.45 at the base, 0.35 at the
/// top, height 1.2 centered at y 0.4), in tree-local coordinates.
fn sample_trunk<R: Rng>(rng: &mut R) -> Vec<Vec3> {
    (0..TRUNK_POINTS)
        .map(|_| {
            let h = rng.random::<f32>() * 1.2;
            let radius = 0.45 + (0.35 - 0.45) * (h / 1.2);
            let angle = rng.random::<f32>() * TAU;
            Vec3::new(angle.cos() * radius, h - 0.2, angle.sin() * radius)
        })
        .collect()
}

/// Octahedron vertex cluster for the tree-top star, centered at origin.
fn star_cluster() -> Vec<Vec3> {
    vec![
        Vec3::ZERO,
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(-0.5, 0.0, 0.0),
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(0.0, 0.0, 0.5),
        Vec3::new(0.0, 0.0, -0.5),
    ]
}

/// Ground plane scatter plus the brighter snow mound under the tree, in
/// world coordinates (stage offset already applied).
fn sample_ground<R: Rng>(rng: &mut R) -> Vec<GroundPoint> {
    let mut points = Vec::with_capacity(FLOOR_POINTS + MOUND_POINTS);

    for _ in 0..FLOOR_POINTS {
        let radius = rng.random::<f32>().sqrt() * FLOOR_RADIUS;
        let angle = rng.random::<f32>() * TAU;
        points.push(GroundPoint {
            pos: Vec3::new(
                angle.cos() * radius,
                STAGE_OFFSET - 0.01,
                angle.sin() * radius,
            ),
            color: palette::FLOOR_BLUE,
            glyph: chars::GROUND_CHAR,
        });
    }

    for _ in 0..MOUND_POINTS {
        let radius = rng.random::<f32>().sqrt() * MOUND_RADIUS;
        let angle = rng.random::<f32>() * TAU;
        points.push(GroundPoint {
            pos: Vec3::new(angle.cos() * radius, STAGE_OFFSET, angle.sin() * radius),
            color: palette::MOUND_WHITE,
            glyph: chars::MOUND_CHAR,
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_scene() {
        let a = Scene::new(1234, 100, 0.1);
        let b = Scene::new(1234, 100, 0.1);

        let mut splats_a = Vec::new();
        let mut splats_b = Vec::new();
        a.splats(0.0, &mut splats_a);
        b.splats(0.0, &mut splats_b);

        assert_eq!(splats_a.len(), splats_b.len());
        assert!(splats_a.iter().zip(&splats_b).all(|(x, y)| x == y));
    }

    #[test]
    fn test_splat_count_is_stable_across_frames() {
        let mut scene = Scene::new(9, 50, 0.1);
        let mut out = Vec::new();
        scene.splats(0.0, &mut out);
        let count = out.len();

        scene.advance(0.5);
        scene.splats(0.5, &mut out);
        assert_eq!(out.len(), count);
    }

    #[test]
    fn test_breathing_stays_within_scale_bounds() {
        let scene = Scene::new(77, 0, 0.05);
        let mut out = Vec::new();

        // The widest canopy point can never leave the breathing envelope.
        for i in 0..60 {
            let t = i as f32 * 0.25;
            scene.splats(t, &mut out);
            let max_radial = out
                .iter()
                .filter(|s| chars::CANOPY_CHARS.contains(&s.glyph) && s.pos.y > -1.5)
                .map(|s| (s.pos.x * s.pos.x + s.pos.z * s.pos.z).sqrt())
                .fold(0.0_f32, f32::max);
            // Bottom layer radius 2.8, base scale 1.3, +2% breathing.
            assert!(max_radial <= 2.8 * TREE_SCALE * 1.02 + 1e-3);
        }
    }

    #[test]
    fn test_snow_glyph_matches_size_bucket() {
        let scene = Scene::new(31, 120, 0.05);
        let mut out = Vec::new();
        scene.splats(0.0, &mut out);

        // Snow splats are emitted last, in flake order.
        let tail = &out[out.len() - scene.snow.len()..];
        for (flake, splat) in scene.snow.flakes().iter().zip(tail) {
            let bucket = flake.size as usize * 2;
            assert!(
                chars::SNOW_CHARS[bucket..bucket + 2].contains(&splat.glyph),
                "size {} flake rendered with glyph {}",
                flake.size,
                splat.glyph
            );
        }
    }

    #[test]
    fn test_gift_cloud_inside_box_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for point in sample_gift_cloud(&mut rng) {
            assert!(point.pos.x.abs() <= 0.5 + 1e-6);
            assert!(point.pos.z.abs() <= 0.5 + 1e-6);
            assert!(point.pos.y >= -0.4 - 1e-6 && point.pos.y <= 0.6 + 1e-6);
        }
    }
}
