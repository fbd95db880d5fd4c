//! Scoring module - one basket per attempt from score-trigger contacts

use crate::physics::{BodyHandle, TriggerContact};
use crate::session::SessionState;

/// Watches trigger contacts for the ball entering the net
#[derive(Debug, Clone, Copy)]
pub struct ScoringMonitor {
    pub trigger: BodyHandle,
    pub ball: BodyHandle,
}

impl ScoringMonitor {
    pub fn new(trigger: BodyHandle, ball: BodyHandle) -> Self {
        Self { trigger, ball }
    }

    /// Handle one contact. Returns true only for the contact that scores.
    pub fn on_collide(&self, contact: &TriggerContact, session: &mut SessionState) -> bool {
        if contact.trigger != self.trigger || contact.other != self.ball {
            return false;
        }
        session.record_score()
    }
}
