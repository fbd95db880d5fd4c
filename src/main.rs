//! Hoopshot - drag to aim, hold to charge, release to shoot

use bevy::prelude::*;
use hoopshot::{
    BasketScored, Game, InitSettings, RimFlash, camera, constants::*, effects, events, game,
    input, tuning, ui, world,
};

fn main() {
    // Settings file first, then command-line overrides
    let mut settings = InitSettings::load();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = settings.apply_args(&args) {
        warn!("{}, ignoring command line", e);
    }

    let tweaks = tuning::load_global_tweaks();
    let game = Game::new(&settings, &tweaks);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                resolution: bevy::window::WindowResolution::new(
                    settings.window_width,
                    settings.window_height,
                ),
                title: "Hoopshot".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(settings)
        .insert_resource(tweaks)
        .insert_resource(game)
        .init_resource::<RimFlash>()
        .add_message::<BasketScored>()
        .add_systems(
            Startup,
            (world::setup_court, camera::spawn_camera, ui::spawn_hud),
        )
        // Pointer -> frame tick -> event dispatch must stay in order
        .add_systems(
            Update,
            (
                input::capture_pointer,
                game::tick_game,
                events::dispatch_game_events,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                game::sync_ball_mesh,
                effects::spawn_confetti,
                effects::update_confetti,
                effects::animate_rim_flash,
                ui::update_hud,
                ui::animate_score_flash,
                ui::draw_aim_indicator,
                ui::draw_trajectory_preview,
                ui::draw_ball_trail,
                camera::orbit_camera,
            )
                .after(events::dispatch_game_events),
        )
        .run();
}
