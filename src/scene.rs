//! Draw-list construction
//!
//! Walks the game state and emits draw calls through the [`Renderer`]
//! capability. This is where visibility rules live: blink half-cycles,
//! explosion frames, and which rockets are shown when. No pixel work
//! happens here.

use crate::platform::Renderer;
use crate::sim::{EnemyKind, GameState, ShipState};

/// Image handles understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Ship,
    ShipExplosion(u32),
    Invader,
    Asteroid,
    EnemyExplosion(u32),
    Rocket,
    Projectile,
    ProjectileBurst,
}

/// Emit one frame's draw calls
pub fn draw(state: &GameState, renderer: &mut dyn Renderer, debug_hitboxes: bool) {
    for enemy in &state.swarm.enemies {
        let sprite = if enemy.body.exploding {
            SpriteId::EnemyExplosion(enemy.body.explosion_frame)
        } else {
            match enemy.kind {
                EnemyKind::Invader(_) => SpriteId::Invader,
                EnemyKind::Asteroid { .. } => SpriteId::Asteroid,
            }
        };
        renderer.draw_sprite(sprite, enemy.body.pos);
    }

    for projectile in &state.swarm.projectiles {
        let sprite = if projectile.exploding {
            SpriteId::ProjectileBurst
        } else {
            SpriteId::Projectile
        };
        renderer.draw_sprite(sprite, projectile.pos);
    }

    // A launched rocket is independent of the ship and always shown
    for rocket in &state.rockets {
        if rocket.is_launched() {
            renderer.draw_sprite(SpriteId::Rocket, rocket.body.pos);
        }
    }

    let ship_shown = match state.ship_state {
        ShipState::Normal => true,
        ShipState::Hit => {
            renderer.draw_sprite(
                SpriteId::ShipExplosion(state.spaceship.body.explosion_frame),
                state.spaceship.body.pos,
            );
            false
        }
        ShipState::Blinking { visible, .. } => visible,
    };
    if ship_shown {
        // Docked rockets ride along with an intact, visible ship
        for rocket in &state.rockets {
            if !rocket.is_launched() {
                renderer.draw_sprite(SpriteId::Rocket, rocket.body.pos);
            }
        }
        renderer.draw_sprite(SpriteId::Ship, state.spaceship.body.pos);
    }

    if debug_hitboxes {
        for enemy in &state.swarm.enemies {
            renderer.draw_rect_outline(enemy.body.hitbox);
        }
        for projectile in &state.swarm.projectiles {
            renderer.draw_rect_outline(projectile.hitbox);
        }
        for rocket in &state.rockets {
            if rocket.is_collidable() {
                renderer.draw_rect_outline(rocket.body.hitbox);
            }
        }
        if matches!(state.ship_state, ShipState::Normal) {
            renderer.draw_rect_outline(state.spaceship.body.hitbox);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Rect};
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder {
        sprites: Vec<SpriteId>,
        outlines: usize,
    }

    impl Renderer for Recorder {
        fn draw_sprite(&mut self, sprite: SpriteId, _pos: Vec2) {
            self.sprites.push(sprite);
        }

        fn draw_rect_outline(&mut self, _rect: Rect) {
            self.outlines += 1;
        }
    }

    fn count(recorder: &Recorder, sprite: SpriteId) -> usize {
        recorder.sprites.iter().filter(|s| **s == sprite).count()
    }

    #[test]
    fn test_fresh_game_draws_formation_ship_and_docked_rockets() {
        let state = GameState::new(1).unwrap();
        let mut recorder = Recorder::default();
        draw(&state, &mut recorder, false);

        assert_eq!(count(&recorder, SpriteId::Invader), 5);
        assert_eq!(count(&recorder, SpriteId::Ship), 1);
        assert_eq!(count(&recorder, SpriteId::Rocket), 2);
        assert_eq!(recorder.outlines, 0);
    }

    #[test]
    fn test_invisible_blink_hides_ship_and_docked_rockets() {
        let mut state = GameState::new(1).unwrap();
        state.ship_state = ShipState::Blinking {
            remaining: 100,
            toggle_in: 10,
            visible: false,
            first: false,
        };
        let mut recorder = Recorder::default();
        draw(&state, &mut recorder, false);
        assert_eq!(count(&recorder, SpriteId::Ship), 0);
        assert_eq!(count(&recorder, SpriteId::Rocket), 0);
    }

    #[test]
    fn test_launched_rocket_drawn_even_while_ship_hidden() {
        let mut state = GameState::new(1).unwrap();
        state.rockets[0].launch();
        state.ship_state = ShipState::Hit;
        state.spaceship.hit();
        let mut recorder = Recorder::default();
        draw(&state, &mut recorder, false);

        assert_eq!(count(&recorder, SpriteId::Rocket), 1);
        assert_eq!(count(&recorder, SpriteId::Ship), 0);
        assert_eq!(count(&recorder, SpriteId::ShipExplosion(0)), 1);
    }

    #[test]
    fn test_debug_outlines_cover_active_hitboxes() {
        let state = GameState::new(1).unwrap();
        let mut recorder = Recorder::default();
        draw(&state, &mut recorder, true);
        // 5 invaders + the ship; docked rockets are not collidable
        assert_eq!(recorder.outlines, 6);
    }
}
