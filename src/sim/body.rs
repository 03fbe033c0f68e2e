//! Base moving body: position, velocity, hit region, explosion sequencing
//!
//! Every entity in the simulation is built on [`Body`]. The hit region is
//! always recomputed from the current position when the body moves, so
//! collision tests never see a stale rectangle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle used for hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// A degenerate rectangle takes part in no collision
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Strict overlap test; empty rectangles never intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.pos.x < other.pos.x + other.size.x
            && other.pos.x < self.pos.x + self.size.x
            && self.pos.y < other.pos.y + other.size.y
            && other.pos.y < self.pos.y + self.size.y
    }
}

/// A positioned, movable, optionally collidable game object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Sprite box (drawing size)
    pub size: Vec2,
    /// Hit region offset relative to `pos`
    pub hit_offset: Vec2,
    /// Hit region size; zero width means the body is not collidable
    pub hit_size: Vec2,
    /// Cached hit region in screen coordinates
    pub hitbox: Rect,
    /// Pending removal
    pub away: bool,
    pub exploding: bool,
    pub explosion_frame: u32,
    frame_ticks: u32,
    /// Entry-phase exception to the despawn test
    pub allow_off_screen: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2, hit_offset: Vec2, hit_size: Vec2) -> Self {
        let mut body = Self {
            pos,
            vel,
            size,
            hit_offset,
            hit_size,
            hitbox: Rect::default(),
            away: false,
            exploding: false,
            explosion_frame: 0,
            frame_ticks: 0,
            allow_off_screen: false,
        };
        body.update_hitbox();
        body
    }

    /// Advance position by velocity and refresh the hit region
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.update_hitbox();
    }

    /// Recompute the hit region from the current position
    pub fn update_hitbox(&mut self) {
        self.hitbox = if self.hit_size.x <= 0.0 {
            Rect::default()
        } else {
            Rect::new(self.pos + self.hit_offset, self.hit_size)
        };
    }

    /// True iff the body is not entry-exempt and has fully crossed a
    /// despawn margin
    pub fn is_off_screen(&self) -> bool {
        !self.allow_off_screen
            && (self.pos.x > OFF_SCREEN_RIGHT
                || self.pos.y > OFF_SCREEN_BOTTOM
                || self.pos.x + self.size.x < OFF_SCREEN_LEFT
                || self.pos.y + self.size.y < OFF_SCREEN_TOP)
    }

    /// Enter the exploding state: recenter on the explosion box and swap
    /// the hit region for the blast region. Idempotent.
    pub fn detonate(&mut self) {
        if self.exploding {
            return;
        }
        self.exploding = true;
        self.explosion_frame = 0;
        self.frame_ticks = EXPLOSION_FRAME_TICKS;
        let explosion_size = Vec2::splat(EXPLOSION_SIZE);
        self.pos += (self.size - explosion_size) / 2.0;
        self.size = explosion_size;
        self.hit_offset = Vec2::splat(EXPLOSION_HIT_INSET);
        self.hit_size = explosion_size - 2.0 * Vec2::splat(EXPLOSION_HIT_INSET);
        self.update_hitbox();
    }

    /// Advance the explosion animation by one tick. Returns true on the
    /// tick the animation completes; `away` is set at the same moment.
    pub fn step_explosion(&mut self) -> bool {
        if !self.exploding || self.away {
            return false;
        }
        self.frame_ticks -= 1;
        if self.frame_ticks == 0 {
            if self.explosion_frame + 1 < EXPLOSION_FRAMES {
                self.explosion_frame += 1;
                self.frame_ticks = EXPLOSION_FRAME_TICKS;
            } else {
                self.away = true;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_body() -> Body {
        Body::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(2.0, -1.0),
            Vec2::new(48.0, 48.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(40.0, 40.0),
        )
    }

    #[test]
    fn test_hitbox_tracks_position() {
        let mut body = test_body();
        body.advance();
        assert_eq!(body.pos, Vec2::new(102.0, 99.0));
        assert_eq!(body.hitbox.pos, Vec2::new(106.0, 103.0));
        assert_eq!(body.hitbox.size, Vec2::new(40.0, 40.0));
    }

    #[test]
    fn test_zero_hit_size_is_not_collidable() {
        let mut body = test_body();
        body.hit_size = Vec2::ZERO;
        body.update_hitbox();
        let other = test_body();
        assert!(!body.hitbox.intersects(&other.hitbox));
    }

    #[test]
    fn test_off_screen_margins() {
        let mut body = test_body();
        assert!(!body.is_off_screen());

        body.pos.y = OFF_SCREEN_BOTTOM + 1.0;
        assert!(body.is_off_screen());

        body.allow_off_screen = true;
        assert!(!body.is_off_screen());
    }

    #[test]
    fn test_detonate_swaps_hit_region_and_is_idempotent() {
        let mut body = test_body();
        body.detonate();
        assert!(body.exploding);
        assert_eq!(body.size, Vec2::splat(EXPLOSION_SIZE));
        assert_eq!(
            body.hitbox.size,
            Vec2::splat(EXPLOSION_SIZE - 2.0 * EXPLOSION_HIT_INSET)
        );

        let snapshot = body.clone();
        body.detonate();
        assert_eq!(body.pos, snapshot.pos);
        assert_eq!(body.explosion_frame, snapshot.explosion_frame);
    }

    #[test]
    fn test_explosion_runs_to_completion() {
        let mut body = test_body();
        body.detonate();
        let mut completed_at = None;
        for tick in 0..(EXPLOSION_FRAMES * EXPLOSION_FRAME_TICKS + 10) {
            if body.step_explosion() {
                completed_at = Some(tick + 1);
                break;
            }
        }
        assert_eq!(completed_at, Some(EXPLOSION_FRAMES * EXPLOSION_FRAME_TICKS));
        assert!(body.away);
        // Further stepping is a no-op
        assert!(!body.step_explosion());
    }

    #[test]
    fn test_rect_intersections() {
        let a = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(9.0, 9.0), Vec2::new(10.0, 10.0));
        let c = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(5.0, 5.0));
        assert!(a.intersects(&b));
        // Touching edges do not count as overlap
        assert!(!a.intersects(&c));
    }
}
