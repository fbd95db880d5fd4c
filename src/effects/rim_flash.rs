//! Rim light flash on a basket

use bevy::prelude::*;

use crate::constants::*;
use crate::events::BasketScored;
use crate::world::RimLight;

/// Countdown for the brightened rim light
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct RimFlash {
    pub remaining: f32, // Seconds left at flash intensity
}

impl RimFlash {
    /// Start (or restart) the flash
    pub fn trigger(&mut self) {
        self.remaining = RIM_FLASH_DURATION;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Count down and return the intensity multiplier for this frame
    pub fn advance(&mut self, dt: f32) -> f32 {
        if !self.is_active() {
            return 1.0;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        if self.is_active() { RIM_FLASH_MULTIPLIER } else { 1.0 }
    }
}

/// Flash the rim light on baskets, restore it afterwards
pub fn animate_rim_flash(
    time: Res<Time>,
    mut flash: ResMut<RimFlash>,
    mut scored: MessageReader<BasketScored>,
    mut lights: Query<&mut PointLight, With<RimLight>>,
) {
    if scored.read().last().is_some() {
        flash.trigger();
    }

    let multiplier = flash.advance(time.delta_secs());

    for mut light in &mut lights {
        light.intensity = RIM_LIGHT_INTENSITY * multiplier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_lasts_its_duration() {
        let mut flash = RimFlash::default();
        assert_eq!(flash.advance(0.1), 1.0);

        flash.trigger();
        assert_eq!(flash.advance(0.1), RIM_FLASH_MULTIPLIER);
        assert_eq!(flash.advance(0.1), RIM_FLASH_MULTIPLIER);
        assert_eq!(flash.advance(0.15), 1.0);
        assert!(!flash.is_active());
    }

    #[test]
    fn test_retrigger_restarts() {
        let mut flash = RimFlash::default();
        flash.trigger();
        flash.advance(0.25);
        flash.trigger();
        assert_eq!(flash.advance(0.25), RIM_FLASH_MULTIPLIER);
    }
}
