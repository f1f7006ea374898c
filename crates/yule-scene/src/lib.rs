//! Procedural holiday scene for the yule greeting card.
//!
//! This crate holds the animated core: one-shot seeded generation of the
//! tree canopy, ornaments and snow field, pure time-based motion
//! functions, and a depth-buffered software projector that rasterizes the
//! scene onto the terminal cell grid.

pub mod camera;
pub mod chars;
pub mod motion;
pub mod palette;
pub mod particles;
pub mod render;
pub mod scene;

pub use camera::OrbitCamera;
pub use palette::hsl_to_rgb;
pub use render::SceneRenderer;
pub use scene::{Scene, Splat};
