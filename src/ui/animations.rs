//! Score text flash on a basket

use bevy::prelude::*;

use crate::constants::*;
use crate::events::BasketScored;

const SCORE_FLASH_DURATION: f32 = 0.6;

/// Score text flicker state
#[derive(Component, Debug, Default)]
pub struct ScoreFlash {
    pub timer: f32, // Time remaining in flash
}

/// Blend from `base` toward `flash` by `amount` (0..=1)
pub fn blend_color(base: Color, flash: Color, amount: f32) -> Color {
    let base = base.to_srgba();
    let flash = flash.to_srgba();
    Color::srgb(
        base.red + (flash.red - base.red) * amount,
        base.green + (flash.green - base.green) * amount,
        base.blue + (flash.blue - base.blue) * amount,
    )
}

/// Flicker the score text in the accent color after each basket
pub fn animate_score_flash(
    time: Res<Time>,
    mut scored: MessageReader<BasketScored>,
    mut query: Query<(&mut TextColor, &mut ScoreFlash)>,
) {
    let basket = scored.read().last().is_some();

    for (mut color, mut flash) in &mut query {
        if basket {
            flash.timer = SCORE_FLASH_DURATION;
        }
        if flash.timer <= 0.0 {
            continue;
        }

        flash.timer -= time.delta_secs();
        if flash.timer <= 0.0 {
            color.0 = TEXT_PRIMARY;
        } else {
            let blend = ((flash.timer * 25.0).sin() + 1.0) / 2.0;
            color.0 = blend_color(TEXT_PRIMARY, TEXT_ACCENT, blend);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend_color(Color::BLACK, Color::WHITE, 0.0), Color::srgb(0.0, 0.0, 0.0));
        assert_eq!(blend_color(Color::BLACK, Color::WHITE, 1.0), Color::srgb(1.0, 1.0, 1.0));
        let mid = blend_color(Color::BLACK, Color::WHITE, 0.5).to_srgba();
        assert!((mid.red - 0.5).abs() < 1e-6);
    }
}
