//! Enemy swarm manager
//!
//! Owns every enemy and enemy projectile. Handles spawning, mass movement,
//! formation reversal, chain-blast propagation between overlapping
//! explosions, and removal of spent bodies. Kills caused inside the swarm
//! (chain blasts) are reported back to the round controller for scoring.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::Direction;
use super::enemy::Enemy;
use super::projectile::Projectile;
use crate::consts::*;

/// A detonation worth points, reported with the victim's position at the
/// moment it was hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kill {
    pub score_value: u32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Swarm {
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
}

impl Swarm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asteroid with random position, velocity and acceleration
    pub fn spawn_asteroid(&mut self, rng: &mut Pcg32) {
        let x = rng.random_range(ASTEROID_BORDER_LEFT..=ASTEROID_BORDER_RIGHT);
        let vel = Vec2::new(
            rng.random_range(ASTEROID_SPEED_HORIZONTAL_MIN..=ASTEROID_SPEED_HORIZONTAL_MAX),
            rng.random_range(ASTEROID_SPEED_VERTICAL_MIN..=ASTEROID_SPEED_VERTICAL_MAX),
        );
        let accel = Vec2::new(
            rng.random_range(ASTEROID_ACCEL_HORIZONTAL_MIN..=ASTEROID_ACCEL_HORIZONTAL_MAX),
            rng.random_range(ASTEROID_ACCEL_VERTICAL_MIN..=ASTEROID_ACCEL_VERTICAL_MAX),
        );
        self.enemies
            .push(Enemy::asteroid(Vec2::new(x, ASTEROID_APPEAR_Y), vel, accel));
    }

    /// Create one invader per formation coordinate, all entering at the
    /// given speed
    pub fn spawn_formation(&mut self, coords: &[Vec2], speed: f32) {
        for &coord in coords {
            self.enemies.push(Enemy::invader(coord, speed));
        }
    }

    /// True once every invader has reached its nominal height
    pub fn all_entered(&self) -> bool {
        self.enemies
            .iter()
            .filter(|e| e.is_invader())
            .all(|e| e.body.pos.y >= INVADER_ARRIVAL_Y)
    }

    /// The formation is in place: pick one random march direction shared
    /// by every invader and start marching
    pub fn formation_arrived(&mut self, rng: &mut Pcg32) {
        let direction = if rng.random_range(0..2) == 0 {
            Direction::Right
        } else {
            Direction::Left
        };
        for enemy in &mut self.enemies {
            enemy.arrive(direction);
        }
    }

    /// Pick one eligible invader uniformly at random and let it shoot.
    /// No-op when nothing is eligible.
    pub fn fire_random_shot(&mut self, rng: &mut Pcg32) {
        let shooters: Vec<usize> = self
            .enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.can_shoot())
            .map(|(i, _)| i)
            .collect();
        if shooters.is_empty() {
            return;
        }
        let shooter = shooters[rng.random_range(0..shooters.len())];
        let spawn = self.enemies[shooter].projectile_spawn_pos();
        self.projectiles.push(Projectile::new(spawn));
    }

    /// Number of invaders still alive, the level-clear probe
    pub fn invader_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_invader()).count()
    }

    /// One tick of swarm movement: move every enemy and projectile,
    /// reverse the formation when a marching invader crosses its border,
    /// propagate chain blasts, then drop everything that is spent.
    /// Returns the chain kills for score attribution.
    pub fn advance(&mut self) -> Vec<Kill> {
        let mut reversal_needed = false;

        for enemy in &mut self.enemies {
            if enemy.body.exploding {
                enemy.body.step_explosion();
            } else {
                enemy.advance();
            }
            if enemy.body.is_off_screen() {
                enemy.body.away = true;
            }
            // A single border crossing reverses the whole formation
            if let Some(direction) = enemy.march_direction() {
                let x = enemy.body.pos.x;
                if (x >= INVADER_RIGHT_BORDER && direction == Direction::Right)
                    || (x <= INVADER_LEFT_BORDER && direction == Direction::Left)
                {
                    reversal_needed = true;
                }
            }
        }

        if reversal_needed {
            for enemy in &mut self.enemies {
                enemy.begin_descent();
                enemy.reverse_march();
            }
        }

        let kills = self.propagate_chain_blasts();

        self.enemies.retain(|e| !e.body.away);

        for projectile in &mut self.projectiles {
            projectile.advance();
        }
        self.projectiles.retain(|p| !p.away);

        kills
    }

    /// Every exploding enemy's blast region detonates any other enemy it
    /// overlaps, across variant kinds. Victims detonated here can chain
    /// further on later ticks while their own explosions play out.
    fn propagate_chain_blasts(&mut self) -> Vec<Kill> {
        let mut kills = Vec::new();
        for i in 0..self.enemies.len() {
            if !self.enemies[i].body.exploding {
                continue;
            }
            let blast = self.enemies[i].body.hitbox;
            for j in 0..self.enemies.len() {
                if i == j || self.enemies[j].body.exploding {
                    continue;
                }
                if blast.intersects(&self.enemies[j].body.hitbox) {
                    let victim = &mut self.enemies[j];
                    kills.push(Kill {
                        score_value: victim.score_value,
                        y: victim.body.pos.y,
                    });
                    victim.body.detonate();
                }
            }
        }
        kills
    }
}
