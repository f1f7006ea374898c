//! One-shot seeded particle generation and the snow field.

pub mod canopy;
pub mod ornament;
pub mod snow;
