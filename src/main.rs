//! Interstellar entry point
//!
//! Runs the simulation headlessly at a fixed 60 Hz with a scripted demo
//! pilot, forwarding events to a logging audio player and the draw list to
//! a counting renderer. Prints a JSON run report on exit.

use glam::Vec2;
use serde::Serialize;

use interstellar::audio::{self, AudioPlayer, SoundEffect};
use interstellar::consts::*;
use interstellar::platform::{self, Command, FrameLimiter, InputSource, Renderer};
use interstellar::scene::{self, SpriteId};
use interstellar::settings::Settings;
use interstellar::sim::{GamePhase, GameState, Rect, TickInput, tick};

/// Simple autopilot: chase the nearest live enemy and fire when lined up
#[derive(Default)]
struct DemoPilot {
    pending: Vec<Command>,
    fire_left_next: bool,
}

impl DemoPilot {
    fn observe(&mut self, state: &GameState) {
        let ship = &state.spaceship.body;
        let ship_center = ship.pos.x + ship.size.x / 2.0;

        let target = state
            .swarm
            .enemies
            .iter()
            .filter(|e| !e.body.exploding)
            .map(|e| e.body.pos.x + e.body.size.x / 2.0)
            .min_by(|a, b| {
                (a - ship_center)
                    .abs()
                    .partial_cmp(&(b - ship_center).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        match target {
            Some(x) if x < ship_center - 12.0 => self.pending.push(Command::MoveLeftStart),
            Some(x) if x > ship_center + 12.0 => self.pending.push(Command::MoveRightStart),
            Some(_) => {
                self.pending.push(Command::MoveStop);
                // Alternate sides so both rockets see use
                self.pending.push(if self.fire_left_next {
                    Command::FireLeft
                } else {
                    Command::FireRight
                });
                self.fire_left_next = !self.fire_left_next;
            }
            None => self.pending.push(Command::MoveStop),
        }
    }
}

impl InputSource for DemoPilot {
    fn poll(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }
}

/// Logs playback triggers instead of making noise
#[derive(Default)]
struct LogAudio;

impl AudioPlayer for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("audio: {effect:?}");
    }
}

/// Counts draw calls so headless runs still exercise the draw list
#[derive(Default)]
struct CountingRenderer {
    sprites: usize,
    outlines: usize,
}

impl Renderer for CountingRenderer {
    fn draw_sprite(&mut self, _sprite: SpriteId, _pos: Vec2) {
        self.sprites += 1;
    }

    fn draw_rect_outline(&mut self, _rect: Rect) {
        self.outlines += 1;
    }
}

#[derive(Serialize)]
struct RunReport {
    seed: u64,
    outcome: GamePhase,
    score: u64,
    lives: u32,
    level: u32,
    ticks: u64,
}

fn main() {
    env_logger::init();
    let settings = Settings::load();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .or(settings.seed)
        .unwrap_or_else(rand::random::<u64>);
    log::info!("starting with seed {seed}");

    let mut state = match GameState::new(seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("level table is invalid: {err}");
            std::process::exit(1);
        }
    };

    let mut pilot = DemoPilot::default();
    let mut audio_out = LogAudio;
    let mut renderer = CountingRenderer::default();
    let mut limiter = FrameLimiter::new(TICKS_PER_SECOND);
    let mut input = TickInput::default();
    let progress_interval = settings.progress_interval.max(1);

    loop {
        pilot.observe(&state);
        let commands = pilot.poll();
        platform::apply_commands(&mut input, &commands);
        if input.quit {
            break;
        }

        tick(&mut state, &input);
        audio::dispatch(&state.events, &mut audio_out);

        renderer.sprites = 0;
        renderer.outlines = 0;
        scene::draw(&state, &mut renderer, settings.debug_hitboxes);

        if state.time_ticks % progress_interval == 0 {
            log::info!(
                "tick {}: level {} score {} lives {} ({} sprites)",
                state.time_ticks,
                state.level_index + 1,
                state.score,
                state.lives,
                renderer.sprites,
            );
        }

        if state.phase != GamePhase::Playing {
            break;
        }
        if settings.max_ticks.is_some_and(|cap| state.time_ticks >= cap) {
            log::info!("tick cap reached");
            break;
        }

        limiter.wait();
    }

    let report = RunReport {
        seed,
        outcome: state.phase,
        score: state.score,
        lives: state.lives,
        level: (state.level_index + 1).min(state.level_count()),
        ticks: state.time_ticks,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("cannot serialize run report: {err}"),
    }
}
