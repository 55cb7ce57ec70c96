//! Bounded queue of engine events

use crate::event::BlobEvent;
use std::collections::VecDeque;

/// Events kept when the host never drains
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Queue the engine pushes to and hosts drain.
///
/// Holds at most `capacity` events. Once full, each push evicts the oldest
/// event and bumps `dropped`, so an undrained engine stays bounded.
pub struct EventBus {
    events: VecDeque<BlobEvent>,
    capacity: usize,
    dropped: u64,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus keeping at most `capacity` events (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity.min(DEFAULT_EVENT_CAPACITY)),
            capacity,
            dropped: 0,
        }
    }

    pub fn push(&mut self, event: BlobEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
            self.dropped += 1;
        }
        self.events.push_back(event);
    }

    /// Take every pending event, oldest first
    pub fn drain(&mut self) -> Vec<BlobEvent> {
        self.events.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events evicted since the bus was created
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_oldest_first() {
        let mut bus = EventBus::new();
        bus.push(BlobEvent::PaletteAdvanced { index: 1 });
        bus.push(BlobEvent::PaletteAdvanced { index: 2 });

        assert_eq!(
            bus.drain(),
            vec![
                BlobEvent::PaletteAdvanced { index: 1 },
                BlobEvent::PaletteAdvanced { index: 2 },
            ]
        );
        assert!(bus.is_empty());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn full_bus_evicts_oldest() {
        let mut bus = EventBus::with_capacity(3);
        for index in 0..10 {
            bus.push(BlobEvent::PaletteAdvanced { index });
        }

        assert_eq!(bus.len(), 3);
        assert_eq!(bus.dropped(), 7);
        let kept: Vec<usize> = bus
            .drain()
            .into_iter()
            .filter_map(|e| match e {
                BlobEvent::PaletteAdvanced { index } => Some(index),
                _ => None,
            })
            .collect();
        assert_eq!(kept, vec![7, 8, 9]);
    }

    #[test]
    fn zero_capacity_keeps_latest() {
        let mut bus = EventBus::with_capacity(0);
        assert_eq!(bus.capacity(), 1);
        bus.push(BlobEvent::Resized { width: 1, height: 1 });
        bus.push(BlobEvent::Resized { width: 2, height: 2 });
        assert_eq!(bus.drain(), vec![BlobEvent::Resized { width: 2, height: 2 }]);
    }
}
