//! Compact text format for game event log lines
//!
//! Format: `T:NNNNN|CODE|data...`
//! - T:NNNNN = timestamp in milliseconds (5 digits, wraps at 99999)
//! - CODE = event type code
//! - data = pipe-separated values specific to event type
//!
//! Examples:
//! ```text
//! T:00000|SE|0b6c...|2026-01-01T12:00:00+00:00
//! T:01320|CS|640.0,360.0
//! T:02150|SR|1|0.83|31.6|4.2|12.5
//! T:02900|G|1|1
//! T:05010|AR|settled|1
//! ```

use super::types::GameEvent;

/// Format a float with fixed precision (1 decimal)
fn fmt_f1(v: f32) -> String {
    format!("{:.1}", v)
}

/// Serialize a GameEvent to compact text format
pub fn serialize_event(time_ms: u32, event: &GameEvent) -> String {
    let ts = format!("T:{:05}", time_ms % 100000);
    let code = event.type_code();

    let data = match event {
        GameEvent::SessionStart {
            session_id,
            timestamp,
        } => format!("{}|{}", session_id, timestamp),
        GameEvent::Config(config) => {
            // Config as compact JSON for easy parsing
            serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string())
        }
        GameEvent::ChargeStart { pos } => format!("{},{}", fmt_f1(pos.0), fmt_f1(pos.1)),
        GameEvent::ShotRelease {
            shot,
            charge,
            power,
            yaw,
            elevation,
        } => format!(
            "{}|{:.2}|{}|{}|{}",
            shot,
            charge,
            fmt_f1(*power),
            fmt_f1(*yaw),
            fmt_f1(*elevation)
        ),
        GameEvent::TestShot { shot } => shot.to_string(),
        GameEvent::Scored { score, shots } => format!("{}|{}", score, shots),
        GameEvent::AttemptReset { reason, scored } => {
            format!("{}|{}", reason, if *scored { 1 } else { 0 })
        }
    };

    format!("{}|{}|{}", ts, code, data)
}
