//! World-space overlays drawn with gizmos: aim arrow, arc preview, ball trail

use bevy::prelude::*;

use crate::constants::*;
use crate::game::Game;

/// Arrow color for an aim hue in degrees
pub fn aim_color(hue: f32) -> Color {
    Color::hsl(hue, 1.0, 0.5)
}

/// Aim arrow while idle or charging
pub fn draw_aim_indicator(game: Res<Game>, mut gizmos: Gizmos) {
    let Some(indicator) = game.aim_indicator() else {
        return;
    };
    let end = indicator.origin + indicator.direction * indicator.length;
    gizmos.arrow(indicator.origin, end, aim_color(indicator.hue));
}

/// Dots along the predicted arc
pub fn draw_trajectory_preview(game: Res<Game>, mut gizmos: Gizmos) {
    if !game.show_preview() {
        return;
    }
    for &point in game.preview() {
        gizmos.sphere(Isometry3d::from_translation(point), PREVIEW_DOT_RADIUS, PREVIEW_DOT_COLOR);
    }
}

/// Line through recent positions plus fading particles
pub fn draw_ball_trail(game: Res<Game>, mut gizmos: Gizmos) {
    if game.trail.len() > 1 {
        gizmos.linestrip(game.trail.points().copied(), TRAIL_COLOR.with_alpha(0.5));
    }
    for particle in game.trail.particles() {
        let color = TRAIL_COLOR.with_alpha(particle.life);
        gizmos.sphere(
            Isometry3d::from_translation(particle.position),
            BALL_RADIUS * 0.3 * particle.life,
            color,
        );
    }
}
