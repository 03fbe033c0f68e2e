//! Player spaceship: bounded horizontal motion under acceleration control
//!
//! The ship accelerates toward the commanded direction, coasts to a stop
//! when no command is active, and bounces inelastically off the side walls.
//! When hit it remembers where it was, so the respawn puts it back in place.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Direction;
use super::body::Body;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spaceship {
    pub body: Body,
    /// Current horizontal speed, positive rightward
    pub speed: f32,
    /// Acceleration set by the steering command
    pub accel: f32,
    saved_pos: Vec2,
}

fn ship_body(pos: Vec2) -> Body {
    let size = Vec2::new(SHIP_WIDTH, SHIP_HEIGHT);
    let inset = Vec2::new(SHIP_HIT_INSET_X, SHIP_HIT_INSET_Y);
    Body::new(pos, Vec2::ZERO, size, inset, size - 2.0 * inset)
}

impl Spaceship {
    pub fn new() -> Self {
        // The start coordinate names the ship's center
        let pos = Vec2::new(
            SHIP_START_X - SHIP_WIDTH / 2.0,
            SHIP_START_Y - SHIP_HEIGHT / 2.0,
        );
        Self {
            body: ship_body(pos),
            speed: 0.0,
            accel: 0.0,
            saved_pos: Vec2::ZERO,
        }
    }

    /// Steering command: acceleration follows the commanded direction
    pub fn set_direction(&mut self, direction: Direction) {
        self.accel = direction.value() * SHIP_ACCELERATION;
    }

    /// The direction the player intends to move: the commanded direction
    /// while accelerating, otherwise the sign of the current drift
    pub fn logical_direction(&self) -> Direction {
        if self.accel > 0.0 {
            Direction::Right
        } else if self.accel < 0.0 {
            Direction::Left
        } else if self.speed > 0.0 {
            Direction::Right
        } else if self.speed < 0.0 {
            Direction::Left
        } else {
            Direction::None
        }
    }

    /// One tick of acceleration, drag, and wall-bounded movement
    pub fn advance(&mut self) {
        if self.accel != 0.0 {
            self.speed += self.accel;
            if self.speed.abs() > SHIP_MAX_SPEED {
                self.speed = SHIP_MAX_SPEED.copysign(self.speed);
            }
        } else if self.speed != 0.0 {
            self.speed = (self.speed.abs() - SHIP_ACCELERATION).copysign(self.speed);
            if self.speed.abs() < SHIP_ACCELERATION {
                self.speed = 0.0;
            }
        }

        let next_x = self.body.pos.x + self.speed;
        if next_x > 0.0 && next_x < SCREEN_WIDTH - self.body.size.x {
            self.body.pos.x = next_x;
        } else {
            // Inelastic wall bounce: direction flips, energy is lost,
            // the position holds for this tick
            self.speed = -self.speed / SHIP_WALL_DAMPING;
        }

        self.body.update_hitbox();
    }

    /// Record the position and start the explosion sequence
    pub fn hit(&mut self) {
        self.saved_pos = self.body.pos;
        self.body.detonate();
    }

    /// Restore the ship for respawn at its pre-explosion position.
    /// The explosion rewrote the body's box and hit region, so the body
    /// is rebuilt from scratch.
    pub fn reinitialize(&mut self) {
        self.body = ship_body(self.saved_pos);
        self.speed = 0.0;
        self.accel = 0.0;
    }
}

impl Default for Spaceship {
    fn default() -> Self {
        Self::new()
    }
}
