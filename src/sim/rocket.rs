//! Player rocket: docked on the spaceship or launched ballistic
//!
//! Each side of the ship carries one rocket. A docked rocket follows the
//! ship with a cosmetic sway and cannot collide with anything; a launched
//! rocket accelerates upward until it leaves the screen or hits something,
//! then reloads back onto the ship on the following tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::spaceship::Spaceship;
use crate::consts::*;

/// Which side of the spaceship the rocket is mounted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn stow_offset(self) -> Vec2 {
        match self {
            Side::Left => Vec2::new(ROCKET_STOW_OFFSET_LEFT_X, ROCKET_STOW_OFFSET_Y),
            Side::Right => Vec2::new(ROCKET_STOW_OFFSET_RIGHT_X, ROCKET_STOW_OFFSET_Y),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    pub body: Body,
    pub side: Side,
    docked: bool,
}

impl Rocket {
    pub fn new(side: Side) -> Self {
        let size = Vec2::new(ROCKET_WIDTH, ROCKET_HEIGHT);
        // The exhaust flame is drawn but never collides
        let hit_size = Vec2::new(ROCKET_WIDTH, ROCKET_HEIGHT - ROCKET_FLAME_SIZE);
        let body = Body::new(
            Vec2::ZERO,
            Vec2::new(0.0, ROCKET_INITIAL_SPEED),
            size,
            Vec2::ZERO,
            hit_size,
        );
        Self {
            body,
            side,
            docked: true,
        }
    }

    pub fn is_launched(&self) -> bool {
        !self.docked
    }

    /// Launched rockets collide; docked or spent ones never do
    pub fn is_collidable(&self) -> bool {
        !self.docked && !self.body.away
    }

    /// Detach from the spaceship. Vertical speed starts at the initial
    /// launch value; the docked sway is kept as horizontal drift. Returns
    /// true if the rocket actually fired (it was docked).
    pub fn launch(&mut self) -> bool {
        if self.docked {
            self.docked = false;
            self.body.vel.y = ROCKET_INITIAL_SPEED;
            true
        } else {
            false
        }
    }

    /// The rocket hit something. Removal is immediate; the reload happens
    /// on the next tick's move, so a spent rocket can never hit anything
    /// else in the same tick.
    pub fn gone(&mut self) {
        self.body.away = true;
    }

    fn reload(&mut self) {
        self.docked = true;
        self.body.away = false;
        self.body.vel = Vec2::new(0.0, ROCKET_INITIAL_SPEED);
    }

    /// One tick: follow the ship while docked, fly ballistically while
    /// launched, reload once spent
    pub fn advance(&mut self, ship: &Spaceship) {
        if self.docked {
            self.body.pos = ship.body.pos + self.side.stow_offset();
            self.body.vel = Vec2::new(ship.speed / ROCKET_SWAY_DIVISOR, 0.0);
        } else if self.body.pos.y > OFF_SCREEN_TOP {
            self.body.vel.y += ROCKET_ACCELERATION;
            self.body.pos.y -= self.body.vel.y;
            self.body.pos.x += self.body.vel.x;
        } else {
            self.body.away = true;
        }
        self.body.update_hitbox();
        if self.body.away {
            self.reload();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;

    #[test]
    fn test_docked_rocket_follows_ship() {
        let mut ship = Spaceship::new();
        let mut rocket = Rocket::new(Side::Left);
        rocket.advance(&ship);
        assert_eq!(rocket.body.pos, ship.body.pos + Side::Left.stow_offset());

        ship.set_direction(Direction::Right);
        for _ in 0..30 {
            ship.advance();
            rocket.advance(&ship);
        }
        assert_eq!(rocket.body.pos, ship.body.pos + Side::Left.stow_offset());
        // Sway velocity mirrors a fraction of ship speed
        assert_eq!(rocket.body.vel.x, ship.speed / ROCKET_SWAY_DIVISOR);
        assert!(!rocket.is_collidable());
    }

    #[test]
    fn test_launch_accelerates_upward() {
        let ship = Spaceship::new();
        let mut rocket = Rocket::new(Side::Right);
        rocket.advance(&ship);

        assert!(rocket.launch());
        // A second fire command on a launched rocket is a no-op
        assert!(!rocket.launch());
        assert!(rocket.is_collidable());

        let y0 = rocket.body.pos.y;
        rocket.advance(&ship);
        let first_step = y0 - rocket.body.pos.y;
        let y1 = rocket.body.pos.y;
        rocket.advance(&ship);
        let second_step = y1 - rocket.body.pos.y;
        // Each tick covers more ground than the last
        assert!(first_step > 0.0);
        assert!(second_step > first_step);
    }

    #[test]
    fn test_reload_cycle_restores_docked_state() {
        let ship = Spaceship::new();
        let mut rocket = Rocket::new(Side::Left);
        rocket.advance(&ship);
        rocket.launch();

        // Fly until it crosses the top margin and reloads
        for _ in 0..10_000 {
            rocket.advance(&ship);
            if !rocket.is_launched() {
                break;
            }
        }
        assert!(!rocket.is_launched());
        assert!(!rocket.body.away);
        assert_eq!(rocket.body.vel, Vec2::new(0.0, ROCKET_INITIAL_SPEED));
    }

    #[test]
    fn test_gone_defers_reload_to_next_tick() {
        let ship = Spaceship::new();
        let mut rocket = Rocket::new(Side::Left);
        rocket.advance(&ship);
        rocket.launch();
        rocket.advance(&ship);

        rocket.gone();
        // Dead but not yet reloaded: no further impact this tick
        assert!(rocket.is_launched());
        assert!(!rocket.is_collidable());

        rocket.advance(&ship);
        assert!(!rocket.is_launched());
        assert!(!rocket.is_collidable());
    }
}
