//! Interstellar - a space-invaders style arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity motion, collisions, game state)
//! - `scene`: Draw-list construction from simulation state
//! - `audio`: Sound-effect vocabulary and playback capability
//! - `platform`: Renderer/input/frame-pacing abstraction
//! - `settings`: Runtime preferences for the host loop

pub mod audio;
pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Simulated ticks per second
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Screen dimensions (logical pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Despawn margins - a body fully past one of these is gone
    pub const OFF_SCREEN_LEFT: f32 = -100.0;
    pub const OFF_SCREEN_RIGHT: f32 = SCREEN_WIDTH + 100.0;
    pub const OFF_SCREEN_TOP: f32 = -100.0;
    pub const OFF_SCREEN_BOTTOM: f32 = SCREEN_HEIGHT + 100.0;

    /// Spaceship
    pub const SHIP_WIDTH: f32 = 64.0;
    pub const SHIP_HEIGHT: f32 = 48.0;
    /// Hit region is inset from the sprite box so near misses feel fair
    pub const SHIP_HIT_INSET_X: f32 = 8.0;
    pub const SHIP_HIT_INSET_Y: f32 = 6.0;
    pub const SHIP_ACCELERATION: f32 = 0.35;
    pub const SHIP_MAX_SPEED: f32 = 7.0;
    /// Speed divisor applied when bouncing off a side wall
    pub const SHIP_WALL_DAMPING: f32 = 3.0;
    pub const SHIP_START_X: f32 = SCREEN_WIDTH / 2.0;
    pub const SHIP_START_Y: f32 = SCREEN_HEIGHT - 80.0;

    /// Invaders
    pub const INVADER_SIZE: f32 = 48.0;
    pub const INVADER_HIT_INSET: f32 = 4.0;
    pub const INVADER_LEFT_BORDER: f32 = 40.0;
    pub const INVADER_RIGHT_BORDER: f32 = SCREEN_WIDTH - 40.0 - INVADER_SIZE;
    /// Vertical coordinate every invader must reach before the formation
    /// starts marching
    pub const INVADER_ARRIVAL_Y: f32 = 60.0;
    pub const INVADER_ENTRY_SPEED: f32 = 1.0;
    pub const INVADER_DESCEND_STEPS: u32 = 20;
    pub const INVADER_SCORE: u32 = 100;

    /// Asteroids
    pub const ASTEROID_SIZE: f32 = 56.0;
    pub const ASTEROID_HIT_INSET: f32 = 6.0;
    pub const ASTEROID_APPEAR_Y: f32 = -80.0;
    pub const ASTEROID_BORDER_LEFT: f32 = 0.0;
    pub const ASTEROID_BORDER_RIGHT: f32 = SCREEN_WIDTH - ASTEROID_SIZE;
    pub const ASTEROID_SPEED_VERTICAL_MIN: f32 = 1.0;
    pub const ASTEROID_SPEED_VERTICAL_MAX: f32 = 2.5;
    pub const ASTEROID_SPEED_HORIZONTAL_MIN: f32 = -1.0;
    pub const ASTEROID_SPEED_HORIZONTAL_MAX: f32 = 1.0;
    pub const ASTEROID_ACCEL_VERTICAL_MIN: f32 = 0.0;
    pub const ASTEROID_ACCEL_VERTICAL_MAX: f32 = 0.05;
    pub const ASTEROID_ACCEL_HORIZONTAL_MIN: f32 = -0.02;
    pub const ASTEROID_ACCEL_HORIZONTAL_MAX: f32 = 0.02;
    pub const ASTEROID_SCORE: u32 = 50;

    /// Rockets
    pub const ROCKET_WIDTH: f32 = 12.0;
    pub const ROCKET_HEIGHT: f32 = 36.0;
    /// The exhaust flame at the bottom of the sprite is not part of the
    /// hit region
    pub const ROCKET_FLAME_SIZE: f32 = 10.0;
    pub const ROCKET_INITIAL_SPEED: f32 = 3.0;
    pub const ROCKET_ACCELERATION: f32 = 0.2;
    /// Docked rockets sway with a fraction of the ship's speed
    pub const ROCKET_SWAY_DIVISOR: f32 = 4.0;
    pub const ROCKET_STOW_OFFSET_LEFT_X: f32 = 4.0;
    pub const ROCKET_STOW_OFFSET_RIGHT_X: f32 = SHIP_WIDTH - ROCKET_WIDTH - 4.0;
    pub const ROCKET_STOW_OFFSET_Y: f32 = 18.0;

    /// Enemy projectiles
    pub const PROJECTILE_WIDTH: f32 = 6.0;
    pub const PROJECTILE_HEIGHT: f32 = 16.0;
    pub const PROJECTILE_SPEED: f32 = 4.0;
    pub const PROJECTILE_EXPLOSION_TICKS: u32 = 6;
    /// Flat bonus for shooting down a projectile
    pub const PROJECTILE_INTERCEPT_SCORE: u64 = 10;

    /// Explosions
    pub const EXPLOSION_SIZE: f32 = 64.0;
    pub const EXPLOSION_FRAMES: u32 = 5;
    /// Ticks each explosion frame stays on screen
    pub const EXPLOSION_FRAME_TICKS: u32 = 6;
    /// Blast hit region is inset from the explosion sprite box
    pub const EXPLOSION_HIT_INSET: f32 = 8.0;

    /// Ship respawn blinking
    pub const BLINK_WINDOW_TICKS: u32 = 180;
    pub const BLINK_TOGGLE_TICKS: u32 = 15;

    pub const STARTING_LIVES: u32 = 3;
}
