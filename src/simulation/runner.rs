//! Batch runner: random shots against a headless game

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::*;
use crate::game::Game;
use crate::settings::InitSettings;
use crate::shooting::{AimScheme, PowerPreset};

use super::config::SimConfig;
use super::metrics::{ComboResult, ShotOutcome, SimSummary};

const SIM_FRAME_DT: f32 = 1.0 / 60.0;

/// Where the simulated pointer goes down
const PRESS_POINT: Vec2 = Vec2::new(640.0, 500.0);

/// A randomized pointer gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomShot {
    /// Start minus end, in pixels
    pub drag: Vec2,
    /// Seconds between press and release
    pub held: f32,
}

impl RandomShot {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            drag: Vec2::new(rng.gen_range(-30.0..=30.0), rng.gen_range(0.0..=160.0)),
            held: rng.gen_range(0.05..=MAX_CHARGE_SECONDS),
        }
    }
}

fn headless_game(scheme: AimScheme, preset: PowerPreset) -> Game {
    let settings = InitSettings {
        aim_scheme: scheme,
        power_preset: preset,
        show_preview: false,
        ..Default::default()
    };
    let mut game = Game::headless(&settings);
    game.events.set_enabled(false);
    game
}

/// Fire one shot and run until the attempt resets. None if it never does.
pub fn run_shot(game: &mut Game, shot: RandomShot, now: &mut f64, max_frames: u32) -> Option<ShotOutcome> {
    game.on_press_start(PRESS_POINT, *now);
    game.on_press_move(PRESS_POINT - shot.drag);
    *now += shot.held as f64;
    if !game.on_press_end(*now) {
        return None;
    }
    let power = game.last_shot().map(|plan| plan.power).unwrap_or_default();

    let mut scored = false;
    for frame in 1..=max_frames {
        *now += SIM_FRAME_DT as f64;
        let report = game.tick(SIM_FRAME_DT, *now);
        scored |= report.scored;
        if report.reset.is_some() {
            return Some(ShotOutcome { scored, power, frames: frame });
        }
    }
    None
}

/// All shots for one aim scheme / power preset pair
pub fn run_combo(config: &SimConfig, scheme: AimScheme, preset: PowerPreset, rng: &mut StdRng) -> ComboResult {
    let mut result = ComboResult::new(scheme, preset);
    let mut game = headless_game(scheme, preset);
    let mut now = 0.0;

    for _ in 0..config.shots {
        let shot = RandomShot::generate(rng);
        let outcome = run_shot(&mut game, shot, &mut now, config.max_frames_per_shot);
        if outcome.is_none() {
            // Ball never came back; start over with a fresh court
            game = headless_game(scheme, preset);
            now = 0.0;
        }
        result.record(outcome);
    }

    result.finalize();
    result
}

/// Run every configured pair and report
pub fn run_simulation(config: SimConfig) -> SimSummary {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    let mut rng = StdRng::seed_from_u64(seed);

    let mut results = Vec::new();
    for scheme in config.schemes() {
        for preset in config.presets() {
            if !config.quiet {
                println!("Simulating {} aim, {} preset ({} shots)...", scheme.name(), preset.name(), config.shots);
            }
            results.push(run_combo(&config, scheme, preset, &mut rng));
        }
    }

    let summary = SimSummary {
        timestamp: chrono::Utc::now().to_rfc3339(),
        seed,
        results,
    };

    println!("\n{}", summary.format_table());
    println!("Seed: {}", seed);

    if let Some(ref output_file) = config.output_file {
        match serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("Failed to serialize results: {}", e))
            .and_then(|json| {
                std::fs::write(output_file, json).map_err(|e| format!("Failed to write {}: {}", output_file, e))
            }) {
            Ok(()) => println!("Results written to {}", output_file),
            Err(e) => eprintln!("{}", e),
        }
    }

    summary
}
