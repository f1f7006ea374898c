//! Core types shared across the yule workspace.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Global animation speed setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed setting.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Normal,
            AnimationSpeed::Normal => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Multiplier applied to elapsed animation time.
    pub fn time_scale(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Normal => 1.0,
            AnimationSpeed::Fast => 1.8,
        }
    }

    /// Human-readable label for the help footer.
    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Normal => "normal",
            AnimationSpeed::Fast => "fast",
        }
    }
}

/// Accent color for the overlay text and greeting banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentTheme {
    #[default]
    Gold,
    Ice,
    Crimson,
}

impl AccentTheme {
    /// Convert theme to a Ratatui color.
    pub fn color(self) -> Color {
        match self {
            AccentTheme::Gold => Color::Rgb(255, 215, 0),
            AccentTheme::Ice => Color::Rgb(170, 210, 255),
            AccentTheme::Crimson => Color::Rgb(220, 20, 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_cycle_covers_all() {
        let mut speed = AnimationSpeed::Slow;
        let mut seen = vec![speed];
        for _ in 0..2 {
            speed = speed.next();
            seen.push(speed);
        }
        assert!(seen.contains(&AnimationSpeed::Slow));
        assert!(seen.contains(&AnimationSpeed::Normal));
        assert!(seen.contains(&AnimationSpeed::Fast));
        assert_eq!(speed.next(), AnimationSpeed::Slow);
    }

    #[test]
    fn test_time_scale_ordering() {
        assert!(AnimationSpeed::Slow.time_scale() < AnimationSpeed::Normal.time_scale());
        assert!(AnimationSpeed::Normal.time_scale() < AnimationSpeed::Fast.time_scale());
    }
}
