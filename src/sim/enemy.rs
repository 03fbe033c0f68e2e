//! Enemy variants: free-falling asteroids and formation invaders
//!
//! Two kinds of enemy share one body and one collision path:
//! - Asteroids fall with random velocity and acceleration, and sometimes
//!   help blow up more than one invader with a single rocket.
//! - Invaders fly into formation, march side to side, descend when the
//!   formation reverses, and shoot once in position.
//!
//! The variant tag is never consulted by collision or chain-blast code;
//! those paths treat every enemy uniformly through its body.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Direction;
use super::body::Body;
use crate::consts::*;

/// Per-variant state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EnemyKind {
    Asteroid {
        accel: Vec2,
    },
    Invader(InvaderState),
}

/// Formation-member state for an invader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvaderState {
    /// Signed horizontal march speed; the sign is this invader's direction
    pub march_speed: f32,
    pub descend_speed: f32,
    pub descend_step: u32,
    pub descend_steps: u32,
    pub entry_done: bool,
    pub descend_done: bool,
    /// Only invaders that completed entry may shoot
    pub can_shoot: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    pub score_value: u32,
    pub kind: EnemyKind,
}

impl Enemy {
    /// A free-falling asteroid with the given initial velocity and
    /// per-tick acceleration
    pub fn asteroid(pos: Vec2, vel: Vec2, accel: Vec2) -> Self {
        let size = Vec2::splat(ASTEROID_SIZE);
        let inset = Vec2::splat(ASTEROID_HIT_INSET);
        // The spawn height sits inside the despawn margin band, so no
        // entry exemption is needed
        let body = Body::new(pos, vel, size, inset, size - 2.0 * inset);
        Self {
            body,
            score_value: ASTEROID_SCORE,
            kind: EnemyKind::Asteroid { accel },
        }
    }

    /// A formation invader still in its entry phase, falling toward its
    /// nominal height
    pub fn invader(pos: Vec2, speed: f32) -> Self {
        let size = Vec2::splat(INVADER_SIZE);
        let inset = Vec2::splat(INVADER_HIT_INSET);
        let mut body = Body::new(
            pos,
            Vec2::new(0.0, INVADER_ENTRY_SPEED),
            size,
            inset,
            size - 2.0 * inset,
        );
        body.allow_off_screen = true;
        Self {
            body,
            score_value: INVADER_SCORE,
            kind: EnemyKind::Invader(InvaderState {
                march_speed: speed,
                descend_speed: speed,
                descend_step: 0,
                descend_steps: INVADER_DESCEND_STEPS,
                entry_done: false,
                descend_done: true,
                can_shoot: false,
            }),
        }
    }

    pub fn is_invader(&self) -> bool {
        matches!(self.kind, EnemyKind::Invader(_))
    }

    /// Entry complete: lock to the screen, enable shooting, start marching
    /// in the given shared direction
    pub fn arrive(&mut self, direction: Direction) {
        if let EnemyKind::Invader(state) = &mut self.kind {
            state.entry_done = true;
            state.can_shoot = true;
            state.march_speed *= direction.value();
            self.body.allow_off_screen = false;
            self.body.vel = Vec2::new(state.march_speed, 0.0);
        }
    }

    /// Begin one descend cycle; horizontal motion resumes when it finishes
    pub fn begin_descent(&mut self) {
        if let EnemyKind::Invader(state) = &mut self.kind {
            state.descend_step = 0;
            state.descend_done = false;
            self.body.vel = Vec2::new(0.0, state.descend_speed);
        }
    }

    /// Flip this invader's march direction
    pub fn reverse_march(&mut self) {
        if let EnemyKind::Invader(state) = &mut self.kind {
            state.march_speed = -state.march_speed;
        }
    }

    /// The direction this invader is marching in, if it is marching at all
    pub fn march_direction(&self) -> Option<Direction> {
        match &self.kind {
            EnemyKind::Invader(state) if state.entry_done => {
                if state.march_speed > 0.0 {
                    Some(Direction::Right)
                } else {
                    Some(Direction::Left)
                }
            }
            _ => None,
        }
    }

    /// True for invaders that finished entry and are not mid-explosion
    pub fn can_shoot(&self) -> bool {
        match &self.kind {
            EnemyKind::Invader(state) => state.can_shoot && !self.body.exploding,
            EnemyKind::Asteroid { .. } => false,
        }
    }

    /// Lower-center of the sprite box, where projectiles emerge
    pub fn projectile_spawn_pos(&self) -> Vec2 {
        Vec2::new(
            self.body.pos.x + self.body.size.x / 2.0,
            self.body.pos.y + self.body.size.y,
        )
    }

    /// One tick of variant-specific motion followed by the base move
    pub fn advance(&mut self) {
        match &mut self.kind {
            EnemyKind::Asteroid { accel } => {
                self.body.vel += *accel;
            }
            EnemyKind::Invader(state) => {
                if state.entry_done && !state.descend_done {
                    state.descend_step += 1;
                    if state.descend_step >= state.descend_steps {
                        state.descend_done = true;
                        self.body.vel = Vec2::new(state.march_speed, 0.0);
                    }
                }
            }
        }
        self.body.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asteroid_integrates_acceleration() {
        let mut asteroid = Enemy::asteroid(
            Vec2::new(100.0, ASTEROID_APPEAR_Y),
            Vec2::new(0.5, 1.0),
            Vec2::new(0.0, 0.25),
        );
        asteroid.advance();
        asteroid.advance();
        assert_eq!(asteroid.body.vel, Vec2::new(0.5, 1.5));
        assert_eq!(
            asteroid.body.pos,
            Vec2::new(101.0, ASTEROID_APPEAR_Y + 1.25 + 1.5)
        );
    }

    #[test]
    fn test_invader_entry_then_arrival() {
        let mut invader = Enemy::invader(Vec2::new(200.0, -INVADER_SIZE), 1.0);
        assert!(!invader.can_shoot());
        assert!(invader.body.allow_off_screen);
        assert_eq!(invader.march_direction(), None);

        invader.advance();
        assert_eq!(invader.body.vel, Vec2::new(0.0, INVADER_ENTRY_SPEED));

        invader.arrive(Direction::Left);
        assert!(invader.can_shoot());
        assert!(!invader.body.allow_off_screen);
        assert_eq!(invader.march_direction(), Some(Direction::Left));
        assert_eq!(invader.body.vel, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_descend_cycle_resumes_march() {
        let mut invader = Enemy::invader(Vec2::new(200.0, 60.0), 1.0);
        invader.arrive(Direction::Right);

        invader.begin_descent();
        invader.reverse_march();
        let y_start = invader.body.pos.y;
        for _ in 0..INVADER_DESCEND_STEPS {
            invader.advance();
        }
        // Descended for the full cycle, now marching the other way
        assert!(invader.body.pos.y > y_start);
        assert_eq!(invader.body.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(invader.march_direction(), Some(Direction::Left));
    }

    #[test]
    fn test_exploding_invader_cannot_shoot() {
        let mut invader = Enemy::invader(Vec2::new(200.0, 60.0), 1.0);
        invader.arrive(Direction::Right);
        assert!(invader.can_shoot());
        invader.body.detonate();
        assert!(!invader.can_shoot());
    }

    #[test]
    fn test_projectile_spawn_is_lower_center() {
        let invader = Enemy::invader(Vec2::new(200.0, 60.0), 1.0);
        let spawn = invader.projectile_spawn_pos();
        assert_eq!(spawn.x, 200.0 + INVADER_SIZE / 2.0);
        assert_eq!(spawn.y, 60.0 + INVADER_SIZE);
    }
}
