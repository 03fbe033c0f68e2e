//! Sound-effect vocabulary and playback capability
//!
//! The simulation reports what happened through [`GameEvent`]s; this module
//! maps them onto fire-and-forget playback triggers. A missing audio device
//! degrades to silence and never stops gameplay.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Rocket leaves the ship
    Launch,
    /// Something blew up (the player may pick a variant)
    Explosion,
}

/// Playback capability. Implementations are fire-and-forget; the core
/// never consults a return value.
pub trait AudioPlayer {
    fn play(&mut self, effect: SoundEffect);
}

/// Silent playback for headless runs or absent audio devices
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioPlayer for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Forward one tick's events to the audio player
pub fn dispatch(events: &[GameEvent], audio: &mut dyn AudioPlayer) {
    for event in events {
        match event {
            GameEvent::RocketLaunched { .. } => audio.play(SoundEffect::Launch),
            GameEvent::EnemyDestroyed { .. }
            | GameEvent::ProjectileIntercepted
            | GameEvent::ShipHit { .. } => audio.play(SoundEffect::Explosion),
            GameEvent::LevelStarted { .. }
            | GameEvent::GameOver { .. }
            | GameEvent::Victory { .. } => {}
        }
    }
}
