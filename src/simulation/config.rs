//! Simulation configuration

use serde::{Deserialize, Serialize};

use crate::shooting::{AimScheme, PowerPreset};

/// Configuration for a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Shots fired per aim scheme / power preset pair
    pub shots: u32,
    /// RNG seed for reproducibility (None = random)
    pub seed: Option<u64>,
    /// Aim schemes to test (empty = all)
    pub schemes: Vec<AimScheme>,
    /// Power presets to test (empty = all)
    pub presets: Vec<PowerPreset>,
    /// Give up on a shot that has not reset after this many frames
    pub max_frames_per_shot: u32,
    /// Output file path (None = stdout)
    pub output_file: Option<String>,
    /// Suppress progress output
    pub quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            shots: 200,
            seed: None,
            schemes: Vec::new(),
            presets: Vec::new(),
            max_frames_per_shot: 900, // 15 seconds at 60 fps
            output_file: None,
            quiet: false,
        }
    }
}

impl SimConfig {
    /// Parse configuration from command line arguments (program name excluded)
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut config = Self::default();

        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1);
            match args[i].as_str() {
                "--shots" => {
                    config.shots = parse_value("--shots", value)?;
                    i += 1;
                }
                "--seed" => {
                    config.seed = Some(parse_value("--seed", value)?);
                    i += 1;
                }
                "--aim" => {
                    let list = value.ok_or("--aim needs a value (direction,angle)")?;
                    config.schemes = list
                        .split(',')
                        .map(|s| AimScheme::parse(s.trim()).ok_or_else(|| format!("Unknown aim scheme: {}", s)))
                        .collect::<Result<_, _>>()?;
                    i += 1;
                }
                "--preset" => {
                    let list = value.ok_or("--preset needs a value (standard,soft)")?;
                    config.presets = list
                        .split(',')
                        .map(|s| {
                            PowerPreset::parse(s.trim()).ok_or_else(|| format!("Unknown power preset: {}", s))
                        })
                        .collect::<Result<_, _>>()?;
                    i += 1;
                }
                "--max-frames" => {
                    config.max_frames_per_shot = parse_value("--max-frames", value)?;
                    i += 1;
                }
                "--output" | "-o" => {
                    config.output_file = Some(value.ok_or("--output needs a path")?.clone());
                    i += 1;
                }
                "--quiet" | "-q" => config.quiet = true,
                other => return Err(format!("Unknown argument: {}", other)),
            }
            i += 1;
        }

        Ok(config)
    }

    pub fn schemes(&self) -> Vec<AimScheme> {
        if self.schemes.is_empty() {
            vec![AimScheme::Direction, AimScheme::Angle]
        } else {
            self.schemes.clone()
        }
    }

    pub fn presets(&self) -> Vec<PowerPreset> {
        if self.presets.is_empty() {
            vec![PowerPreset::Standard, PowerPreset::Soft]
        } else {
            self.presets.clone()
        }
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_cover_every_pair() {
        let config = SimConfig::from_args(&[]).unwrap();
        assert_eq!(config.schemes().len(), 2);
        assert_eq!(config.presets().len(), 2);
    }

    #[test]
    fn test_parse_flags() {
        let config =
            SimConfig::from_args(&args(&["--shots", "50", "--seed", "9", "--aim", "angle", "--preset", "soft,standard", "-q"]))
                .unwrap();
        assert_eq!(config.shots, 50);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.schemes(), vec![AimScheme::Angle]);
        assert_eq!(config.presets(), vec![PowerPreset::Soft, PowerPreset::Standard]);
        assert!(config.quiet);
    }

    #[test]
    fn test_bad_flags_are_errors() {
        assert!(SimConfig::from_args(&args(&["--shots"])).is_err());
        assert!(SimConfig::from_args(&args(&["--shots", "many"])).is_err());
        assert!(SimConfig::from_args(&args(&["--aim", "sideways"])).is_err());
        assert!(SimConfig::from_args(&args(&["--level", "3"])).is_err());
    }
}
