//! HUD components and systems (score, shots, power)

use bevy::prelude::*;

use crate::constants::*;
use crate::game::Game;

/// Score text component
#[derive(Component)]
pub struct ScoreText;

/// Shots text component
#[derive(Component)]
pub struct ShotsText;

/// Power text component
#[derive(Component)]
pub struct PowerText;

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn shots_label(shots: u32) -> String {
    format!("Shots: {}", shots)
}

pub fn power_label(percent: u32) -> String {
    format!("Power: {}%", percent)
}

/// Top-left column of counters
pub fn spawn_hud(mut commands: Commands) {
    let font = TextFont {
        font_size: 24.0,
        ..default()
    };

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            left: Val::Px(16.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(score_label(0)),
                font.clone(),
                TextColor(TEXT_PRIMARY),
                ScoreText,
                super::ScoreFlash::default(),
            ));
            parent.spawn((
                Text::new(shots_label(0)),
                font.clone(),
                TextColor(TEXT_PRIMARY),
                ShotsText,
            ));
            parent.spawn((
                Text::new(power_label(0)),
                font,
                TextColor(TEXT_ACCENT),
                PowerText,
            ));
        });
}

/// Refresh the counters from the session
pub fn update_hud(
    game: Res<Game>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<ShotsText>, Without<PowerText>)>,
    mut shots_query: Query<&mut Text, (With<ShotsText>, Without<ScoreText>, Without<PowerText>)>,
    mut power_query: Query<&mut Text, (With<PowerText>, Without<ScoreText>, Without<ShotsText>)>,
) {
    if let Ok(mut text) = score_query.single_mut() {
        text.0 = score_label(game.session.score);
    }
    if let Ok(mut text) = shots_query.single_mut() {
        text.0 = shots_label(game.session.shots_taken);
    }
    if let Ok(mut text) = power_query.single_mut() {
        text.0 = power_label(game.power_percent());
    }
}
