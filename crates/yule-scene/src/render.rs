//! Depth-buffered rasterization of scene splats onto the terminal grid.

use glam::{Mat4, Vec3};
use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::camera::OrbitCamera;
use crate::chars::STARFIELD_CHARS;
use crate::scene::{Scene, Splat};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 0.5;

#[derive(Debug, Clone, Copy)]
struct Cell {
    glyph: char,
    color: Color,
    depth: f32,
}

const EMPTY: Cell = Cell {
    glyph: ' ',
    color: Color::Reset,
    depth: f32::INFINITY,
};

/// Owns the per-frame scratch buffers so rendering allocates only on
/// resize.
#[derive(Debug, Default)]
pub struct SceneRenderer {
    splats: Vec<Splat>,
    cells: Vec<Cell>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the scene for elapsed time `t` into the frame, with a
    /// twinkling starfield behind it.
    pub fn render(&mut self, frame: &mut Frame, scene: &Scene, camera: &OrbitCamera, t: f32) {
        let area = frame.area();
        let (width, height) = (area.width, area.height);
        if width == 0 || height == 0 {
            return;
        }

        self.cells.clear();
        self.cells.resize(width as usize * height as usize, EMPTY);

        let aspect = (width as f32 * CELL_ASPECT) / height as f32;
        let view_proj = camera.view_projection(aspect);

        scene.splats(t, &mut self.splats);
        for splat in &self.splats {
            let Some((col, row, depth)) = project(&view_proj, splat.pos, width, height) else {
                continue;
            };
            let cell = &mut self.cells[row as usize * width as usize + col as usize];
            if depth < cell.depth {
                *cell = Cell {
                    glyph: splat.glyph,
                    color: splat.color,
                    depth,
                };
            }
        }

        let lines: Vec<Line> = (0..height)
            .map(|y| {
                let spans: Vec<Span> = (0..width)
                    .map(|x| {
                        let cell = self.cells[y as usize * width as usize + x as usize];
                        if cell.glyph == ' ' {
                            starfield_char(x, y, t)
                        } else {
                            Span::styled(cell.glyph.to_string(), Style::new().fg(cell.color))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Project a world position to a terminal cell, returning `None` when the
/// point is behind the camera or outside the view.
fn project(view_proj: &Mat4, pos: Vec3, width: u16, height: u16) -> Option<(u16, u16, f32)> {
    let clip = *view_proj * pos.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    if ndc_x.abs() >= 1.0 || ndc_y.abs() >= 1.0 {
        return None;
    }

    let col = (((ndc_x + 1.0) * 0.5) * width as f32) as u16;
    let row = (((1.0 - ndc_y) * 0.5) * height as f32) as u16;
    Some((col.min(width - 1), row.min(height - 1), clip.w))
}

/// Sparse distant stars, deterministic per position and twinkle frame.
fn starfield_char(x: u16, y: u16, t: f32) -> Span<'static> {
    let twinkle = (t * 2.0) as usize;
    let seed = (x as usize)
        .wrapping_mul(31)
        .wrapping_add((y as usize).wrapping_mul(17))
        .wrapping_add(twinkle);

    // Stars at ~2% of positions.
    if seed % 100 < 2 {
        let ch = STARFIELD_CHARS[seed % STARFIELD_CHARS.len()];
        let color = match seed % 3 {
            0 => Color::Rgb(60, 60, 90),
            1 => Color::Rgb(100, 100, 150),
            _ => Color::Rgb(150, 150, 210),
        };
        Span::styled(ch.to_string(), Style::new().fg(color))
    } else {
        Span::raw(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_projects_near_center() {
        let camera = OrbitCamera::default();
        let view_proj = camera.view_projection(1.5);
        let (col, row, depth) = project(&view_proj, Vec3::ZERO, 80, 24).unwrap();
        assert!((38..=41).contains(&col));
        assert!((11..=13).contains(&row));
        assert!(depth > 0.0);
    }

    #[test]
    fn test_point_behind_camera_is_culled() {
        let camera = OrbitCamera::default();
        let view_proj = camera.view_projection(1.5);
        // The default eye sits near (0, 6, 18); this point is behind it.
        assert!(project(&view_proj, Vec3::new(0.0, 6.0, 40.0), 80, 24).is_none());
    }

    #[test]
    fn test_nearer_splat_wins_cell() {
        let camera = OrbitCamera::default();
        let view_proj = camera.view_projection(1.5);
        let near = project(&view_proj, Vec3::new(0.0, 0.0, 2.0), 80, 24).unwrap();
        let far = project(&view_proj, Vec3::new(0.0, 0.0, -2.0), 80, 24).unwrap();
        assert!(near.2 < far.2);
    }
}
