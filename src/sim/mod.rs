//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod body;
pub mod enemy;
pub mod level;
pub mod projectile;
pub mod rocket;
pub mod spaceship;
pub mod swarm;
pub mod tick;

pub use body::{Body, Rect};
pub use enemy::{Enemy, EnemyKind};
pub use level::{Level, LevelError, build_levels};
pub use projectile::Projectile;
pub use rocket::{Rocket, Side};
pub use spaceship::Spaceship;
pub use swarm::{Kill, Swarm};
pub use tick::{GameEvent, GamePhase, GameState, ShipState, TickInput, tick};

use serde::{Deserialize, Serialize};

/// Horizontal steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    None,
    Right,
}

impl Direction {
    /// Sign of the direction as a scalar multiplier
    pub fn value(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::None => 0.0,
            Direction::Right => 1.0,
        }
    }
}
