//! Fixed timestep round controller
//!
//! Drives one simulated tick: swarm spawning and movement, ship and rocket
//! kinematics, collision resolution across every entity group, the ship
//! lifecycle state machine, and level progression. The controller owns the
//! spaceship, both rockets, the level table and the player state; the swarm
//! owns every enemy and projectile.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::Direction;
use super::level::{Level, LevelError, build_levels};
use super::rocket::{Rocket, Side};
use super::spaceship::Spaceship;
use super::swarm::{Kill, Swarm};
use crate::consts::*;

/// Top-level phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    GameOver,
    Victory,
}

/// Ship lifecycle: controllable, mid-explosion, or respawn-blinking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShipState {
    Normal,
    /// Struck; the explosion animation is playing and the ship cannot be
    /// controlled or hit again
    Hit,
    /// Invulnerable respawn window. The first interval is longer and keeps
    /// movement disabled; afterwards visibility toggles at a fixed cadence.
    Blinking {
        remaining: u32,
        toggle_in: u32,
        visible: bool,
        first: bool,
    },
}

/// Things that happened during a tick, for the audio player and HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RocketLaunched { side: Side },
    EnemyDestroyed { points: u64 },
    ProjectileIntercepted,
    ShipHit { lives_left: u32 },
    LevelStarted { level: u32 },
    GameOver { score: u64 },
    Victory { score: u64 },
}

/// Logical input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Steering command; `Some(Direction::None)` is an explicit stop
    pub steer: Option<Direction>,
    pub fire_left: bool,
    pub fire_right: bool,
    /// Consumed by the host loop, not the simulation
    pub quit: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub level_index: u32,
    levels: Vec<Level>,
    /// False while the formation is still flying in
    pub invaders_in_place: bool,
    pub swarm: Swarm,
    pub spaceship: Spaceship,
    pub rockets: [Rocket; 2],
    pub lives: u32,
    pub score: u64,
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub ship_state: ShipState,
    /// Events of the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given seed. Fails fast on a malformed
    /// level table.
    pub fn new(seed: u64) -> Result<Self, LevelError> {
        let levels = build_levels()?;
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level_index: 0,
            levels,
            invaders_in_place: false,
            swarm: Swarm::new(),
            spaceship: Spaceship::new(),
            rockets: [Rocket::new(Side::Left), Rocket::new(Side::Right)],
            lives: STARTING_LIVES,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            ship_state: ShipState::Normal,
            events: Vec::new(),
        };
        // Dock the rockets onto the ship before the first tick
        for rocket in state.rockets.iter_mut() {
            rocket.advance(&state.spaceship);
        }
        start_level(&mut state);
        Ok(state)
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.level_index as usize]
    }

    pub fn level_count(&self) -> u32 {
        self.levels.len() as u32
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    apply_input(state, input);

    // The formation may still be flying in
    if !state.invaders_in_place && state.swarm.all_entered() {
        state.invaders_in_place = true;
        state.swarm.formation_arrived(&mut state.rng);
    }

    // Random events, gated by the level's frequency divisors
    let asteroid_divisor = state.current_level().asteroid_divisor;
    let shot_divisor = state.current_level().shot_divisor;
    if state.rng.random_range(0..=asteroid_divisor) == 0 {
        state.swarm.spawn_asteroid(&mut state.rng);
    }
    if state.invaders_in_place && state.rng.random_range(0..=shot_divisor) == 0 {
        state.swarm.fire_random_shot(&mut state.rng);
    }

    // Swarm movement, including chain-blast kills
    for kill in state.swarm.advance() {
        let points = kill_score(&kill);
        state.score += points;
        state.events.push(GameEvent::EnemyDestroyed { points });
    }

    // Ship and rockets
    if matches!(state.ship_state, ShipState::Hit) {
        state.spaceship.body.step_explosion();
    } else {
        state.spaceship.advance();
    }
    for rocket in state.rockets.iter_mut() {
        rocket.advance(&state.spaceship);
    }

    resolve_collisions(state);

    // The ship finished exploding on this tick
    if matches!(state.ship_state, ShipState::Hit) && state.spaceship.body.away {
        ship_post_explosion(state);
    }
    step_blinking(state);

    if state.phase == GamePhase::Playing && state.swarm.invader_count() == 0 {
        next_level(state);
    }
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    if let Some(direction) = input.steer {
        let movement_allowed = match state.ship_state {
            ShipState::Normal => true,
            ShipState::Blinking { first, .. } => !first,
            ShipState::Hit => false,
        };
        if movement_allowed {
            state.spaceship.set_direction(direction);
        }
    }
    // Firing needs a ship in one piece
    if matches!(state.ship_state, ShipState::Normal) {
        if input.fire_left && state.rockets[0].launch() {
            state.events.push(GameEvent::RocketLaunched { side: Side::Left });
        }
        if input.fire_right && state.rockets[1].launch() {
            state.events.push(GameEvent::RocketLaunched { side: Side::Right });
        }
    }
}

/// Distance bonus: kills farther from the bottom are worth more
fn kill_score(kill: &Kill) -> u64 {
    kill.score_value as u64 + ((SCREEN_HEIGHT - kill.y).max(0.0) / 10.0).floor() as u64
}

/// Resolve every pairwise overlap after all movement has happened.
/// Order matters: enemies first, then projectiles against the ship, then
/// rockets against projectiles, so a rocket spent on an enemy can no
/// longer intercept a projectile in the same tick.
fn resolve_collisions(state: &mut GameState) {
    let ship_normal = matches!(state.ship_state, ShipState::Normal);
    let mut ship_struck = false;

    for enemy in &mut state.swarm.enemies {
        if ship_normal
            && !ship_struck
            && state.spaceship.body.hitbox.intersects(&enemy.body.hitbox)
        {
            // An already-exploding enemy's blast region still kills;
            // detonation itself stays idempotent
            enemy.body.detonate();
            ship_struck = true;
        }
        for rocket in state.rockets.iter_mut() {
            if rocket.is_collidable() && rocket.body.hitbox.intersects(&enemy.body.hitbox) {
                rocket.gone();
                if !enemy.body.exploding {
                    let kill = Kill {
                        score_value: enemy.score_value,
                        y: enemy.body.pos.y,
                    };
                    enemy.body.detonate();
                    let points = kill_score(&kill);
                    state.score += points;
                    state.events.push(GameEvent::EnemyDestroyed { points });
                }
            }
        }
    }

    for projectile in &mut state.swarm.projectiles {
        if !projectile.hit
            && ship_normal
            && !ship_struck
            && state.spaceship.body.hitbox.intersects(&projectile.hitbox)
        {
            projectile.away = true;
            ship_struck = true;
        }
    }

    // One interception per rocket per tick: first match wins
    for rocket in state.rockets.iter_mut() {
        if !rocket.is_collidable() {
            continue;
        }
        for projectile in &mut state.swarm.projectiles {
            if !projectile.hit && rocket.body.hitbox.intersects(&projectile.hitbox) {
                rocket.gone();
                projectile.destroy();
                state.score += PROJECTILE_INTERCEPT_SCORE;
                state.events.push(GameEvent::ProjectileIntercepted);
                break;
            }
        }
    }

    if ship_struck {
        ship_was_hit(state);
    }
}

fn ship_was_hit(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.spaceship.hit();
    state.ship_state = ShipState::Hit;
    state
        .events
        .push(GameEvent::ShipHit { lives_left: state.lives });
    log::info!("spaceship hit, {} lives left", state.lives);
}

/// The ship's explosion animation has completed
fn ship_post_explosion(state: &mut GameState) {
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!("game over with score {}", state.score);
        return;
    }
    state.spaceship.reinitialize();
    state.ship_state = ShipState::Blinking {
        remaining: BLINK_WINDOW_TICKS,
        // The first outage is longer than the regular blink cadence
        toggle_in: BLINK_WINDOW_TICKS / 3,
        visible: false,
        first: true,
    };
}

fn step_blinking(state: &mut GameState) {
    let mut back_to_normal = false;
    if let ShipState::Blinking {
        remaining,
        toggle_in,
        visible,
        first,
    } = &mut state.ship_state
    {
        *remaining -= 1;
        if *remaining == 0 {
            back_to_normal = true;
        } else {
            *toggle_in -= 1;
            if *toggle_in == 0 {
                *visible = !*visible;
                *first = false;
                *toggle_in = BLINK_TOGGLE_TICKS;
            }
        }
    }
    if back_to_normal {
        state.ship_state = ShipState::Normal;
    }
}

fn start_level(state: &mut GameState) {
    let coords = state.current_level().invader_coords.clone();
    state.swarm.spawn_formation(&coords, INVADER_ENTRY_SPEED);
    state.invaders_in_place = false;
    state.events.push(GameEvent::LevelStarted {
        level: state.level_index + 1,
    });
    log::info!(
        "level {} started with {} invaders",
        state.level_index + 1,
        coords.len()
    );
}

fn next_level(state: &mut GameState) {
    state.level_index += 1;
    if state.level_index as usize >= state.levels.len() {
        state.phase = GamePhase::Victory;
        state.events.push(GameEvent::Victory { score: state.score });
        log::info!("all levels cleared, final score {}", state.score);
        return;
    }
    start_level(state);
}
