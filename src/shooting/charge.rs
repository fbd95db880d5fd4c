//! Shot charging - hold time to launch power

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Linear power curve: `base + min(charge, max_charge) * gain`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerCurve {
    pub base_power: f32,
    pub charge_gain: f32, // Extra power per second held
    pub max_charge: f32,  // Seconds
}

impl PowerCurve {
    /// Seconds of charge for a hold of `held` seconds (clamped to `[0, max_charge]`)
    pub fn charge_for(&self, held: f32) -> f32 {
        held.clamp(0.0, self.max_charge)
    }

    pub fn power(&self, charge: f32) -> f32 {
        self.base_power + self.charge_for(charge) * self.charge_gain
    }

    /// Charge as a 0-100 display percentage
    pub fn percent(&self, charge: f32) -> u32 {
        if self.max_charge <= 0.0 {
            return 0;
        }
        (self.charge_for(charge) / self.max_charge * 100.0).round() as u32
    }

    /// Charge as a 0-1 fraction
    pub fn ratio(&self, charge: f32) -> f32 {
        if self.max_charge <= 0.0 {
            return 0.0;
        }
        self.charge_for(charge) / self.max_charge
    }
}

impl Default for PowerCurve {
    fn default() -> Self {
        PowerPreset::Standard.curve()
    }
}

/// Named power curves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerPreset {
    /// 15 + charge * 20
    #[default]
    Standard,
    /// 8 + charge * 12, gentler arcs for angle aiming
    Soft,
}

impl PowerPreset {
    pub fn curve(self) -> PowerCurve {
        match self {
            PowerPreset::Standard => PowerCurve {
                base_power: STANDARD_BASE_POWER,
                charge_gain: STANDARD_CHARGE_GAIN,
                max_charge: MAX_CHARGE_SECONDS,
            },
            PowerPreset::Soft => PowerCurve {
                base_power: SOFT_BASE_POWER,
                charge_gain: SOFT_CHARGE_GAIN,
                max_charge: MAX_CHARGE_SECONDS,
            },
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "standard" => Some(PowerPreset::Standard),
            "soft" => Some(PowerPreset::Soft),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PowerPreset::Standard => "standard",
            PowerPreset::Soft => "soft",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_power() {
        let curve = PowerPreset::Standard.curve();
        assert_eq!(curve.power(0.0), 15.0);
        assert!((curve.power(0.5) - 25.0).abs() < 1e-5);
        assert!((curve.power(1.5) - 45.0).abs() < 1e-5);
    }

    #[test]
    fn test_soft_power() {
        let curve = PowerPreset::Soft.curve();
        assert_eq!(curve.power(0.0), 8.0);
        assert!((curve.power(1.0) - 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_charge_clamps_at_max() {
        let curve = PowerCurve::default();
        assert_eq!(curve.charge_for(4.0), MAX_CHARGE_SECONDS);
        assert_eq!(curve.power(4.0), curve.power(MAX_CHARGE_SECONDS));
        assert_eq!(curve.charge_for(-1.0), 0.0);
    }

    #[test]
    fn test_charge_is_monotonic() {
        let curve = PowerCurve::default();
        let mut last = curve.power(0.0);
        for i in 1..40 {
            let p = curve.power(i as f32 * 0.05);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_percent() {
        let curve = PowerCurve::default();
        assert_eq!(curve.percent(0.0), 0);
        assert_eq!(curve.percent(0.75), 50);
        assert_eq!(curve.percent(1.5), 100);
        assert_eq!(curve.percent(0.5), 33);
    }
}
