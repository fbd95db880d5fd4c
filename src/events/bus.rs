//! Event bus - queue between the game core and whatever reacts to it
//!
//! The core stamps each event with the game clock as it is emitted; the
//! Bevy side, the scenario runner, and the tests drain the queue.

use super::types::GameEvent;

/// An event plus the game-clock time it was emitted at
#[derive(Debug, Clone, PartialEq)]
pub struct BusEvent {
    pub time_ms: u32,
    pub event: GameEvent,
}

#[derive(Debug)]
pub struct EventBus {
    pending: Vec<BusEvent>,
    clock_ms: u32,
    /// Batch simulation runs with the bus off
    enabled: bool,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            clock_ms: 0,
            enabled: true,
        }
    }

    /// Game-clock seconds used to stamp later events
    pub fn update_time(&mut self, now: f64) {
        self.clock_ms = (now.max(0.0) * 1000.0) as u32;
    }

    pub fn emit(&mut self, event: GameEvent) {
        if self.enabled {
            self.pending.push(BusEvent {
                time_ms: self.clock_ms,
                event,
            });
        }
    }

    /// Everything emitted since the last drain, oldest first
    pub fn drain(&mut self) -> Vec<BusEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Turning the bus off also drops anything still queued
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_stamped_with_clock() {
        let mut bus = EventBus::new();
        bus.update_time(1.5);
        bus.emit(GameEvent::Scored { score: 1, shots: 2 });
        bus.update_time(2.25);
        bus.emit(GameEvent::TestShot { shot: 3 });

        let events = bus.drain();
        let times: Vec<_> = events.iter().map(|e| e.time_ms).collect();
        assert_eq!(times, vec![1500, 2250]);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_disabled_bus_drops_events() {
        let mut bus = EventBus::new();
        bus.emit(GameEvent::TestShot { shot: 1 });
        bus.set_enabled(false);
        bus.emit(GameEvent::TestShot { shot: 2 });
        assert!(bus.drain().is_empty());

        bus.set_enabled(true);
        bus.emit(GameEvent::TestShot { shot: 3 });
        assert_eq!(bus.drain().len(), 1);
    }

    #[test]
    fn test_drain_keeps_emit_order() {
        let mut bus = EventBus::new();
        bus.emit(GameEvent::ChargeStart { pos: (1.0, 2.0) });
        bus.emit(GameEvent::TestShot { shot: 1 });
        let codes: Vec<_> = bus.drain().iter().map(|e| e.event.type_code()).collect();
        assert_eq!(codes, vec!["CS", "TS"]);
    }
}
