//! Enemy projectile: a straight-line descending shot
//!
//! Spawned at an invader's lower-center point, destroyed when it leaves the
//! screen, strikes the spaceship, or is intercepted by a rocket. A destroyed
//! projectile plays a brief burst before removal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Rect;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    speed: f32,
    /// Set once something destroyed this projectile; a hit projectile no
    /// longer collides
    pub hit: bool,
    pub exploding: bool,
    pub away: bool,
    explosion_ticks: u32,
    pub hitbox: Rect,
}

impl Projectile {
    /// Create a projectile centered on the given emission point
    pub fn new(emission: Vec2) -> Self {
        let pos = Vec2::new(emission.x - PROJECTILE_WIDTH / 2.0, emission.y);
        let mut projectile = Self {
            pos,
            speed: PROJECTILE_SPEED,
            hit: false,
            exploding: false,
            away: false,
            explosion_ticks: 0,
            hitbox: Rect::default(),
        };
        projectile.update_hitbox();
        projectile
    }

    fn update_hitbox(&mut self) {
        self.hitbox = Rect::new(self.pos, Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT));
    }

    /// Start the destruction burst
    pub fn destroy(&mut self) {
        self.hit = true;
        self.exploding = true;
        self.explosion_ticks = PROJECTILE_EXPLOSION_TICKS;
    }

    /// One tick of movement or burst countdown
    pub fn advance(&mut self) {
        if !self.exploding {
            self.pos.y += self.speed;
            self.update_hitbox();
            if self.pos.y > SCREEN_HEIGHT {
                self.away = true;
            }
        } else {
            self.explosion_ticks = self.explosion_ticks.saturating_sub(1);
            if self.explosion_ticks == 0 {
                self.away = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_is_centered_on_emission_point() {
        let projectile = Projectile::new(Vec2::new(100.0, 50.0));
        assert_eq!(projectile.pos.x, 100.0 - PROJECTILE_WIDTH / 2.0);
        assert_eq!(projectile.pos.y, 50.0);
    }

    #[test]
    fn test_falls_and_despawns_below_screen() {
        let mut projectile = Projectile::new(Vec2::new(100.0, SCREEN_HEIGHT - 1.0));
        projectile.advance();
        assert!(projectile.away);
    }

    #[test]
    fn test_hitbox_follows_movement() {
        let mut projectile = Projectile::new(Vec2::new(100.0, 50.0));
        projectile.advance();
        assert_eq!(projectile.hitbox.pos, projectile.pos);
    }

    #[test]
    fn test_destroy_then_remove_after_burst() {
        let mut projectile = Projectile::new(Vec2::new(100.0, 50.0));
        projectile.destroy();
        assert!(projectile.hit);
        assert!(projectile.exploding);

        let y_before = projectile.pos.y;
        for _ in 0..PROJECTILE_EXPLOSION_TICKS {
            assert!(!projectile.away);
            projectile.advance();
        }
        assert!(projectile.away);
        // An exploding projectile no longer falls
        assert_eq!(projectile.pos.y, y_before);
    }
}
