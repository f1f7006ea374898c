//! Color tables and color utility functions for the scene.

use rand::Rng;
use ratatui::style::Color;

/// Bauble colors: red, gold, white, green.
pub const ORNAMENT_COLORS: [Color; 4] = [
    Color::Rgb(255, 34, 34),
    Color::Rgb(255, 204, 0),
    Color::Rgb(255, 255, 255),
    Color::Rgb(34, 187, 34),
];

/// Deep red used for bow ornaments.
pub const BOW_RED: Color = Color::Rgb(204, 0, 0);

/// Tree trunk brown.
pub const TRUNK_BROWN: Color = Color::Rgb(74, 48, 32);

/// Gold of the tree-top star.
pub const STAR_GOLD: Color = Color::Rgb(255, 215, 0);

/// Falling snow, slightly dimmed white.
pub const SNOW_WHITE: Color = Color::Rgb(235, 235, 245);

/// White ribbon and bow on gift boxes.
pub const RIBBON_WHITE: Color = Color::Rgb(240, 240, 240);

/// Dark night-blue ground plane.
pub const FLOOR_BLUE: Color = Color::Rgb(16, 16, 52);

/// Faint white of the snow mound under the tree.
pub const MOUND_WHITE: Color = Color::Rgb(82, 88, 112);

/// Pick a foliage color: mostly varied dark greens with ~15% white snow tips.
pub fn canopy_color<R: Rng>(rng: &mut R) -> Color {
    if rng.random::<f32>() > 0.85 {
        return Color::Rgb(255, 255, 255);
    }
    let hue = 0.35 + rng.random::<f32>() * 0.05;
    let lightness = 0.15 + rng.random::<f32>() * 0.2;
    hsl_to_rgb(hue, 0.7, lightness)
}

/// Scale an RGB color's brightness by `factor` (clamped to 0..=1 per channel).
pub fn scale_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * factor).clamp(0.0, 255.0) as u8,
            (g as f32 * factor).clamp(0.0, 255.0) as u8,
            (b as f32 * factor).clamp(0.0, 255.0) as u8,
        ),
        other => other,
    }
}

/// Convert HSL to RGB color. Hue is in the `0..=1` range, as produced by
/// the scene's color generators.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
