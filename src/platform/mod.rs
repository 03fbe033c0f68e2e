//! Platform abstraction layer
//!
//! Capability boundaries between the simulation and the outside world:
//! - [`Renderer`]: draw-image and outline-rectangle calls, no pixels
//! - [`InputSource`]: discrete logical commands, no raw device state
//! - [`FrameLimiter`]: fixed-rate pacing for the native loop

use glam::Vec2;

use crate::scene::SpriteId;
use crate::sim::{Direction, Rect, TickInput};

/// Drawing surface. The core supplies positions and image handles only.
pub trait Renderer {
    fn draw_sprite(&mut self, sprite: SpriteId, pos: Vec2);
    /// Debug outline, used for hitbox visualization
    fn draw_rect_outline(&mut self, rect: Rect);
}

/// Logical input commands delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeftStart,
    MoveRightStart,
    MoveStop,
    FireLeft,
    FireRight,
    Quit,
}

/// Source of logical commands for one frame
pub trait InputSource {
    fn poll(&mut self) -> Vec<Command>;
}

/// Fold a frame's commands into the tick input. Fire commands are
/// one-shot; the steering command persists until replaced.
pub fn apply_commands(input: &mut TickInput, commands: &[Command]) {
    input.fire_left = false;
    input.fire_right = false;
    for command in commands {
        match command {
            Command::MoveLeftStart => input.steer = Some(Direction::Left),
            Command::MoveRightStart => input.steer = Some(Direction::Right),
            Command::MoveStop => input.steer = Some(Direction::None),
            Command::FireLeft => input.fire_left = true,
            Command::FireRight => input.fire_right = true,
            Command::Quit => input.quit = true,
        }
    }
}

/// Keeps the native loop at a fixed frame rate
#[cfg(not(target_arch = "wasm32"))]
pub struct FrameLimiter {
    period: std::time::Duration,
    next_deadline: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        let period = std::time::Duration::from_secs(1) / fps.max(1);
        Self {
            period,
            next_deadline: std::time::Instant::now() + period,
        }
    }

    /// Sleep out the rest of the frame. Falls behind gracefully: a slow
    /// frame shifts the schedule instead of bursting to catch up.
    pub fn wait(&mut self) {
        let now = std::time::Instant::now();
        if now < self.next_deadline {
            std::thread::sleep(self.next_deadline - now);
            self.next_deadline += self.period;
        } else {
            self.next_deadline = now + self.period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_fold_into_tick_input() {
        let mut input = TickInput::default();
        apply_commands(&mut input, &[Command::MoveLeftStart, Command::FireLeft]);
        assert_eq!(input.steer, Some(Direction::Left));
        assert!(input.fire_left);
        assert!(!input.fire_right);

        // Fire is one-shot, steering persists
        apply_commands(&mut input, &[]);
        assert_eq!(input.steer, Some(Direction::Left));
        assert!(!input.fire_left);

        apply_commands(&mut input, &[Command::MoveStop, Command::Quit]);
        assert_eq!(input.steer, Some(Direction::None));
        assert!(input.quit);
    }
}
