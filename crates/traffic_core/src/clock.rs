use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::Resource;

/// One simulated millisecond per clock unit.
pub const ONE_SEC_MS: u64 = 1000;

/// Interval between animation ticks (roughly 60 frames per second).
pub const FRAME_MS: u64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKind {
    SceneStarted,
    Tick,
    CameraSample,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub timestamp: u64,
    pub kind: EventKind,
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by timestamp.
        other
            .timestamp
            .cmp(&self.timestamp)
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The event currently being processed; inserted by the runner before each
/// schedule run so systems can filter on it.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentEvent(pub Event);

/// Scene clock: current simulated time plus the pending-event queue.
///
/// Both the animation loop and the camera-mode sampler are expressed as
/// events on this clock, so tests can drive either path without wall time.
#[derive(Debug, Default, Resource)]
pub struct SimulationClock {
    now: u64,
    events: BinaryHeap<Event>,
}

impl SimulationClock {
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn schedule_at(&mut self, timestamp: u64, kind: EventKind) {
        debug_assert!(
            timestamp >= self.now,
            "event timestamp must be >= current time"
        );
        self.events.push(Event { timestamp, kind });
    }

    pub fn schedule_in(&mut self, delay_ms: u64, kind: EventKind) {
        self.schedule_at(self.now.saturating_add(delay_ms), kind);
    }

    /// Timestamp of the next pending event, if any, without consuming it.
    pub fn next_event_time(&self) -> Option<u64> {
        self.events.peek().map(|event| event.timestamp)
    }

    pub fn pop_next(&mut self) -> Option<Event> {
        let event = self.events.pop()?;
        self.now = event.timestamp;
        Some(event)
    }

    /// Drops every pending event. Called on stop so a queued tick or camera
    /// sample can never fire after its scene is gone.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pops_events_in_time_order() {
        let mut clock = SimulationClock::default();
        clock.schedule_at(32, EventKind::Tick);
        clock.schedule_at(16, EventKind::Tick);
        clock.schedule_at(1000, EventKind::CameraSample);

        let first = clock.pop_next().expect("first event");
        assert_eq!(first.timestamp, 16);
        assert_eq!(clock.now(), 16);

        let second = clock.pop_next().expect("second event");
        assert_eq!(second.timestamp, 32);
        assert_eq!(clock.now(), 32);

        let third = clock.pop_next().expect("third event");
        assert_eq!(third.timestamp, 1000);
        assert_eq!(third.kind, EventKind::CameraSample);

        assert!(clock.pop_next().is_none());
        assert!(clock.is_empty());
    }

    #[test]
    fn schedule_in_is_relative_to_now() {
        let mut clock = SimulationClock::default();
        clock.schedule_at(100, EventKind::Tick);
        clock.pop_next().expect("tick");
        clock.schedule_in(FRAME_MS, EventKind::Tick);
        assert_eq!(clock.next_event_time(), Some(100 + FRAME_MS));
    }

    #[test]
    fn clear_cancels_pending_events_but_keeps_time() {
        let mut clock = SimulationClock::default();
        clock.schedule_at(50, EventKind::Tick);
        clock.pop_next().expect("tick");
        clock.schedule_in(FRAME_MS, EventKind::Tick);
        clock.schedule_in(ONE_SEC_MS, EventKind::CameraSample);

        clock.clear();
        assert!(clock.is_empty());
        assert_eq!(clock.now(), 50);
        assert!(clock.pop_next().is_none());
    }
}
