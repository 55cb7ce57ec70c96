//! Host frame scheduling

use crate::clock::FrameClock;
use std::time::Duration;

/// Opaque token for one requested frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A host's "call me back next frame" primitive.
///
/// Only one frame is outstanding at a time; the driver requests the next one
/// after finishing the current.
pub trait FrameScheduler {
    /// Request a callback for the next frame
    fn schedule(&mut self) -> FrameHandle;

    /// Withdraw a previously requested frame. Unknown handles are ignored.
    fn cancel(&mut self, handle: FrameHandle);
}

/// Scheduler fired explicitly by the caller, for headless and test hosts
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the outstanding frame, if any
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// How many outstanding frames have been withdrawn
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

/// Fixed-rate scheduler paced by a `FrameClock`
pub struct IntervalScheduler {
    clock: FrameClock,
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl IntervalScheduler {
    pub fn new(hz: f64) -> Self {
        Self {
            clock: FrameClock::with_rate(hz),
            next_id: 0,
            pending: None,
        }
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Sample the wall clock and return the outstanding frame once it is due
    pub fn poll(&mut self) -> Option<FrameHandle> {
        self.clock.tick();
        self.take_due()
    }

    /// Advance by an explicit duration instead of the wall clock
    pub fn advance_by(&mut self, elapsed: f64) -> Option<FrameHandle> {
        self.clock.advance_by(elapsed);
        self.take_due()
    }

    fn take_due(&mut self) -> Option<FrameHandle> {
        if self.pending.is_some() && self.clock.should_fixed_update() {
            self.clock.consume_fixed_step();
            return self.pending.take();
        }
        None
    }

    /// How long the host may sleep before the next poll
    pub fn time_until_due(&self) -> Duration {
        self.clock.time_until_next_step()
    }
}

impl FrameScheduler for IntervalScheduler {
    fn schedule(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}
