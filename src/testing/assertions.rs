//! Assertion checking for test expectations

use super::parser::{ExpectedCount, ExpectedEvent, StateAssertion};
use crate::events::BusEvent;
use crate::game::Game;
use crate::session::ShotPhase;

/// Error when an assertion fails
#[derive(Debug)]
pub struct AssertionError {
    pub message: String,
    pub expected: String,
    pub actual: String,
}

impl std::fmt::Display for AssertionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n    Expected: {}\n    Actual: {}", self.message, self.expected, self.actual)
    }
}

/// Captured event with timing info
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub frame: u64,
    pub event_type: String,
}

impl CapturedEvent {
    pub fn from_bus_event(frame: u64, event: &BusEvent) -> Self {
        Self {
            frame,
            event_type: event.event.name().to_string(),
        }
    }
}

/// Check if captured events match expected sequence
pub fn check_sequence(expected: &[ExpectedEvent], captured: &[CapturedEvent]) -> Result<(), AssertionError> {
    let mut captured_idx = 0;

    for (i, exp) in expected.iter().enumerate() {
        // Find matching event starting from current position
        let found = captured[captured_idx..]
            .iter()
            .enumerate()
            .find(|(_, cap)| cap.event_type == exp.event);

        match found {
            Some((offset, cap)) => {
                if let Some(min) = exp.frame_min {
                    if cap.frame < min {
                        return Err(AssertionError {
                            message: format!("Event #{} '{}' occurred too early", i + 1, exp.event),
                            expected: format!("frame >= {}", min),
                            actual: format!("frame {}", cap.frame),
                        });
                    }
                }
                if let Some(max) = exp.frame_max {
                    if cap.frame > max {
                        return Err(AssertionError {
                            message: format!("Event #{} '{}' occurred too late", i + 1, exp.event),
                            expected: format!("frame <= {}", max),
                            actual: format!("frame {}", cap.frame),
                        });
                    }
                }
                captured_idx += offset + 1;
            }
            None => {
                return Err(AssertionError {
                    message: format!("Event #{} '{}' not found", i + 1, exp.event),
                    expected: format!("'{}' event in sequence", exp.event),
                    actual: format!(
                        "events after position {}: {:?}",
                        captured_idx,
                        captured[captured_idx..].iter().map(|e| &e.event_type).collect::<Vec<_>>()
                    ),
                });
            }
        }
    }

    Ok(())
}

/// Check how many times each named event fired
pub fn check_counts(expected: &[ExpectedCount], captured: &[CapturedEvent]) -> Result<(), AssertionError> {
    for exp in expected {
        let actual = captured.iter().filter(|c| c.event_type == exp.event).count();
        if actual != exp.count {
            return Err(AssertionError {
                message: format!("Event '{}' count mismatch", exp.event),
                expected: exp.count.to_string(),
                actual: actual.to_string(),
            });
        }
    }
    Ok(())
}

/// Game state for assertions
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub score: u32,
    pub shots: u32,
    pub charge: f32,
    pub power_percent: u32,
    pub phase: &'static str, // "idle", "charging", "in_flight"
    pub scored: bool,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_z: f32,
    pub ball_speed: f32,
    /// Final plan of the last shot
    pub shot: Option<ShotState>,
    pub trail_len: usize,
    pub preview_len: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct ShotState {
    pub power: f32,
    pub charge: f32,
    pub yaw: f32,       // Degrees
    pub elevation: f32, // Degrees
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        let pose = game.ball_pose();
        Self {
            score: game.session.score,
            shots: game.session.shots_taken,
            charge: game.session.charge_power(),
            power_percent: game.power_percent(),
            phase: match game.session.phase() {
                ShotPhase::Idle => "idle",
                ShotPhase::Charging { .. } => "charging",
                ShotPhase::InFlight => "in_flight",
            },
            scored: game.session.scored_this_attempt(),
            ball_x: pose.position.x,
            ball_y: pose.position.y,
            ball_z: pose.position.z,
            ball_speed: game.ball_velocity().length(),
            shot: game.last_shot().map(|plan| ShotState {
                power: plan.power,
                charge: plan.charge,
                yaw: plan.aim.yaw().to_degrees(),
                elevation: plan.aim.elevation().to_degrees(),
            }),
            trail_len: game.trail.len(),
            preview_len: game.preview().len(),
        }
    }
}

/// Parse a check string into (path, operator, value)
fn parse_check(check: &str) -> Option<(&str, &str, &str)> {
    // Try operators in order of specificity (>= before >, etc.)
    for op in &[">=", "<=", "!=", "=", ">", "<"] {
        if let Some(idx) = check.find(op) {
            let path = check[..idx].trim();
            let value = check[idx + op.len()..].trim();
            return Some((path, op, value));
        }
    }
    None
}

/// Check state assertions against a snapshot
pub fn check_state(assertion: &StateAssertion, state: &GameSnapshot) -> Result<(), AssertionError> {
    for check in &assertion.checks {
        let (path, operator, expected_value) = parse_check(check).ok_or_else(|| AssertionError {
            message: format!("Invalid check syntax: {}", check),
            expected: "format: 'path = value' or 'path > value'".to_string(),
            actual: check.clone(),
        })?;

        match path {
            "score" => check_float_comparison(path, state.score as f32, operator, expected_value)?,
            "shots" => check_float_comparison(path, state.shots as f32, operator, expected_value)?,
            "charge" => check_float_comparison(path, state.charge, operator, expected_value)?,
            "power_percent" => {
                check_float_comparison(path, state.power_percent as f32, operator, expected_value)?
            }
            "ball.x" => check_float_comparison(path, state.ball_x, operator, expected_value)?,
            "ball.y" => check_float_comparison(path, state.ball_y, operator, expected_value)?,
            "ball.z" => check_float_comparison(path, state.ball_z, operator, expected_value)?,
            "ball.speed" => check_float_comparison(path, state.ball_speed, operator, expected_value)?,
            "trail.len" => check_float_comparison(path, state.trail_len as f32, operator, expected_value)?,
            "preview.len" => {
                check_float_comparison(path, state.preview_len as f32, operator, expected_value)?
            }
            "phase" => check_text(check, state.phase, operator, expected_value)?,
            "scored" => check_text(check, &state.scored.to_string(), operator, expected_value)?,
            "in_play" => check_text(
                check,
                &(state.phase == "in_flight").to_string(),
                operator,
                expected_value,
            )?,
            _ if path.starts_with("shot.") => {
                let shot = state.shot.ok_or_else(|| AssertionError {
                    message: format!("Shot check failed: {}", check),
                    expected: "a shot was taken".to_string(),
                    actual: "no shot".to_string(),
                })?;
                let actual = match path {
                    "shot.power" => shot.power,
                    "shot.charge" => shot.charge,
                    "shot.yaw" => shot.yaw,
                    "shot.elevation" => shot.elevation,
                    _ => return Err(unknown_path(path)),
                };
                check_float_comparison(path, actual, operator, expected_value)?;
            }
            _ => return Err(unknown_path(path)),
        }
    }

    Ok(())
}

fn unknown_path(path: &str) -> AssertionError {
    AssertionError {
        message: format!("Unknown check path: {}", path),
        expected: "score, shots, charge, power_percent, phase, scored, in_play, ball.*, shot.*, trail.len, preview.len"
            .to_string(),
        actual: path.to_string(),
    }
}

/// Equality (or inequality) on a word value
fn check_text(check: &str, actual: &str, operator: &str, expected_str: &str) -> Result<(), AssertionError> {
    let expected = expected_str.trim_matches('"');
    let pass = match operator {
        "=" => actual == expected,
        "!=" => actual != expected,
        _ => false,
    };
    if !pass {
        return Err(AssertionError {
            message: format!("Check failed: {}", check),
            expected: format!("{} {}", operator, expected),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

/// Check float comparison with operator
fn check_float_comparison(path: &str, actual: f32, operator: &str, expected_str: &str) -> Result<(), AssertionError> {
    let value: f32 = expected_str.trim().parse().map_err(|_| AssertionError {
        message: format!("Invalid value for {}", path),
        expected: "number".to_string(),
        actual: expected_str.to_string(),
    })?;

    let pass = match operator {
        ">=" => actual >= value,
        "<=" => actual <= value,
        ">" => actual > value,
        "<" => actual < value,
        "=" => (actual - value).abs() < 0.1,
        "!=" => (actual - value).abs() >= 0.1,
        _ => false,
    };

    if !pass {
        return Err(AssertionError {
            message: format!("Check failed: {} {} {} (actual: {:.2})", path, operator, expected_str, actual),
            expected: format!("{} {} {}", path, operator, value),
            actual: format!("{:.2}", actual),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(names: &[(&str, u64)]) -> Vec<CapturedEvent> {
        names
            .iter()
            .map(|&(name, frame)| CapturedEvent {
                frame,
                event_type: name.to_string(),
            })
            .collect()
    }

    fn expected(name: &str, frame_max: Option<u64>) -> ExpectedEvent {
        ExpectedEvent {
            event: name.to_string(),
            frame_min: None,
            frame_max,
        }
    }

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            score: 1,
            shots: 2,
            charge: 0.5,
            power_percent: 33,
            phase: "idle",
            scored: false,
            ball_x: 0.0,
            ball_y: 1.5,
            ball_z: 2.0,
            ball_speed: 0.0,
            shot: None,
            trail_len: 0,
            preview_len: 12,
        }
    }

    #[test]
    fn test_parse_check_prefers_two_char_ops() {
        assert_eq!(parse_check("score >= 1"), Some(("score", ">=", "1")));
        assert_eq!(parse_check("phase != idle"), Some(("phase", "!=", "idle")));
        assert_eq!(parse_check("ball.y < 0"), Some(("ball.y", "<", "0")));
        assert_eq!(parse_check("nothing here"), None);
    }

    #[test]
    fn test_sequence_is_a_subsequence() {
        let events = captured(&[("SessionStart", 0), ("ChargeStart", 0), ("ShotRelease", 30), ("Scored", 90)]);
        assert!(check_sequence(&[expected("ChargeStart", None), expected("Scored", None)], &events).is_ok());
        // Order matters
        assert!(check_sequence(&[expected("Scored", None), expected("ShotRelease", None)], &events).is_err());
        // Frame bound
        assert!(check_sequence(&[expected("ShotRelease", Some(20))], &events).is_err());
    }

    #[test]
    fn test_counts() {
        let events = captured(&[("Scored", 10), ("AttemptReset", 40), ("Scored", 90)]);
        let ok = [ExpectedCount {
            event: "Scored".to_string(),
            count: 2,
        }];
        assert!(check_counts(&ok, &events).is_ok());
        let bad = [ExpectedCount {
            event: "AttemptReset".to_string(),
            count: 2,
        }];
        assert!(check_counts(&bad, &events).is_err());
    }

    #[test]
    fn test_state_checks() {
        let state = snapshot();
        let pass = StateAssertion {
            after_frame: 0,
            checks: vec![
                "score = 1".to_string(),
                "shots >= 2".to_string(),
                "power_percent = 33".to_string(),
                "phase = idle".to_string(),
                "in_play = false".to_string(),
                "ball.y > 1".to_string(),
            ],
        };
        assert!(check_state(&pass, &state).is_ok());

        let fail = StateAssertion {
            after_frame: 0,
            checks: vec!["shot.power = 25".to_string()],
        };
        assert!(check_state(&fail, &state).is_err());

        let unknown = StateAssertion {
            after_frame: 0,
            checks: vec!["player.x = 1".to_string()],
        };
        assert!(check_state(&unknown, &state).is_err());
    }
}
