//! Level table: invader layouts and event frequencies
//!
//! Ten levels are precomputed at game start. Each level carries the
//! formation layout plus two frequency divisors: every tick draws a
//! uniform integer in `[0, divisor]` and the event fires on a draw of
//! exactly zero, so a smaller divisor means a more frequent event. The
//! divisors are plain integers everywhere; named tiers exist only as
//! constructor shorthands.

use std::error::Error;
use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Named frequency tiers used when building the table
pub mod tier {
    pub const VERY_LOW: u32 = 100;
    pub const LOW: u32 = 80;
    pub const MEDIUM: u32 = 60;
    pub const HIGH: u32 = 40;
    pub const VERY_HIGH: u32 = 20;
}

/// Errors in the level table, fatal at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// A level without invaders would clear instantly
    EmptyInvaderLayout { level: u32 },
    /// A zero divisor would fire its event every tick
    ZeroFrequencyDivisor { level: u32, field: &'static str },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::EmptyInvaderLayout { level } => {
                write!(f, "level {level} has an empty invader layout")
            }
            LevelError::ZeroFrequencyDivisor { level, field } => {
                write!(f, "level {level} has a zero {field} divisor")
            }
        }
    }
}

impl Error for LevelError {}

/// One immutable level definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub index: u32,
    pub invader_coords: Vec<Vec2>,
    pub asteroid_divisor: u32,
    pub shot_divisor: u32,
}

impl Level {
    pub fn new(
        index: u32,
        invader_coords: Vec<Vec2>,
        asteroid_divisor: u32,
        shot_divisor: u32,
    ) -> Result<Self, LevelError> {
        if invader_coords.is_empty() {
            return Err(LevelError::EmptyInvaderLayout { level: index });
        }
        if asteroid_divisor == 0 {
            return Err(LevelError::ZeroFrequencyDivisor {
                level: index,
                field: "asteroid",
            });
        }
        if shot_divisor == 0 {
            return Err(LevelError::ZeroFrequencyDivisor {
                level: index,
                field: "shot",
            });
        }
        Ok(Self {
            index,
            invader_coords,
            asteroid_divisor,
            shot_divisor,
        })
    }
}

/// Arrange a formation grid: columns spaced at 1.7 invader widths and
/// centered between the march borders, alternating rows staggered by one
/// invader width, each row starting further above the screen
pub fn layout_invaders(rows: u32, cols: u32) -> Vec<Vec2> {
    let nominal_shift = INVADER_SIZE;
    let additional_shift = if rows <= 1 { 0.0 } else { INVADER_SIZE };
    let span = INVADER_SIZE * 1.7 * (cols - 1) as f32 + nominal_shift + additional_shift;
    let initial_shift =
        ((INVADER_RIGHT_BORDER + INVADER_SIZE - INVADER_LEFT_BORDER) - span) / 2.0;

    let mut coords = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        let stagger = (row % 2) as f32 * nominal_shift;
        for col in 0..cols {
            coords.push(Vec2::new(
                initial_shift + INVADER_SIZE * 1.7 * col as f32 + stagger,
                -INVADER_SIZE - INVADER_SIZE * 1.2 * row as f32,
            ));
        }
    }
    coords
}

/// Build the ten-level table with increasing difficulty: bigger
/// formations, more asteroids, faster shooting
pub fn build_levels() -> Result<Vec<Level>, LevelError> {
    let table: [(u32, u32, u32, u32); 10] = [
        (1, 5, tier::VERY_LOW, 200),
        (1, 6, tier::VERY_LOW, 180),
        (2, 5, tier::LOW, 160),
        (2, 6, tier::LOW, 140),
        (3, 5, tier::MEDIUM, 120),
        (3, 6, tier::MEDIUM, 100),
        (4, 5, tier::HIGH, tier::LOW),
        (4, 6, tier::HIGH, tier::MEDIUM),
        (5, 5, tier::VERY_HIGH, tier::HIGH),
        (5, 6, tier::VERY_HIGH, tier::HIGH),
    ];

    table
        .iter()
        .enumerate()
        .map(|(i, &(rows, cols, asteroids, shots))| {
            Level::new(i as u32, layout_invaders(rows, cols), asteroids, shots)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_levels_with_growing_formations() {
        let levels = build_levels().unwrap();
        assert_eq!(levels.len(), 10);
        assert_eq!(levels[0].invader_coords.len(), 5);
        assert_eq!(levels[9].invader_coords.len(), 30);
        for pair in levels.windows(2) {
            assert!(pair[0].invader_coords.len() <= pair[1].invader_coords.len());
            // Difficulty only ever tightens
            assert!(pair[0].asteroid_divisor >= pair[1].asteroid_divisor);
            assert!(pair[0].shot_divisor >= pair[1].shot_divisor);
        }
    }

    #[test]
    fn test_layout_rows_start_above_screen() {
        let coords = layout_invaders(3, 5);
        assert_eq!(coords.len(), 15);
        for (i, coord) in coords.iter().enumerate() {
            let row = i as u32 / 5;
            assert_eq!(coord.y, -INVADER_SIZE - INVADER_SIZE * 1.2 * row as f32);
        }
    }

    #[test]
    fn test_layout_staggers_alternating_rows() {
        let coords = layout_invaders(2, 5);
        // Second row is shifted one invader width to the right
        assert_eq!(coords[5].x, coords[0].x + INVADER_SIZE);
    }

    #[test]
    fn test_layout_stays_between_march_borders() {
        for (rows, cols) in [(1, 5), (2, 6), (5, 6)] {
            for coord in layout_invaders(rows, cols) {
                assert!(coord.x >= INVADER_LEFT_BORDER);
                assert!(coord.x <= INVADER_RIGHT_BORDER);
            }
        }
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        let err = Level::new(3, Vec::new(), 10, 10).unwrap_err();
        assert_eq!(err, LevelError::EmptyInvaderLayout { level: 3 });
    }

    #[test]
    fn test_zero_divisor_is_rejected() {
        let coords = layout_invaders(1, 5);
        assert!(matches!(
            Level::new(0, coords.clone(), 0, 10),
            Err(LevelError::ZeroFrequencyDivisor { field: "asteroid", .. })
        ));
        assert!(matches!(
            Level::new(0, coords, 10, 0),
            Err(LevelError::ZeroFrequencyDivisor { field: "shot", .. })
        ));
    }
}
