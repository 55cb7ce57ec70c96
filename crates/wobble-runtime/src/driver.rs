//! Per-frame orchestration of one blob

use crate::engine::BlobEngine;
use crate::pointer_channel::{pointer_channel, PointerReceiver, PointerSender};
use crate::scheduler::{FrameHandle, FrameScheduler};
use log::{debug, info};
use wobble_render::DrawingSurface;

/// Drives a `BlobEngine` from a host scheduler.
///
/// `start` requests the first frame and hands out a pointer sender; every
/// `on_frame` applies queued pointer samples, ticks the engine and requests
/// the next frame. `stop` (also run on drop) cancels the outstanding frame
/// and closes the pointer queue.
pub struct AnimationDriver<S: FrameScheduler> {
    engine: BlobEngine,
    scheduler: S,
    handle: Option<FrameHandle>,
    pointer: Option<PointerReceiver>,
    frames: u64,
}

impl<S: FrameScheduler> AnimationDriver<S> {
    pub fn new(engine: BlobEngine, scheduler: S) -> Self {
        Self {
            engine,
            scheduler,
            handle: None,
            pointer: None,
            frames: 0,
        }
    }

    /// Initialize the engine and begin the frame loop. Calling it on a
    /// running driver restarts the loop and invalidates earlier senders.
    pub fn start(&mut self) -> PointerSender {
        self.stop();
        self.engine.init();

        let (sender, receiver) = pointer_channel();
        self.pointer = Some(receiver);
        self.handle = Some(self.scheduler.schedule());
        info!("animation started");
        sender
    }

    /// Handle a frame callback. Stale or foreign handles are ignored and
    /// return false; otherwise returns whether the frame was drawn.
    pub fn on_frame<D: DrawingSurface + ?Sized>(
        &mut self,
        handle: FrameHandle,
        surface: Option<&mut D>,
    ) -> bool {
        if self.handle != Some(handle) {
            debug!("ignoring stale frame {}", handle.id());
            return false;
        }

        if let Some(pointer) = &self.pointer {
            for sample in pointer.drain() {
                self.engine.on_pointer_sample(sample.x, sample.y);
            }
        }

        let drawn = self.engine.tick(surface);
        self.frames += 1;
        self.handle = Some(self.scheduler.schedule());
        drawn
    }

    /// Cancel the outstanding frame and deregister the pointer listener.
    pub fn stop(&mut self) {
        let was_running = self.is_running();
        if let Some(handle) = self.handle.take() {
            self.scheduler.cancel(handle);
        }
        self.pointer = None;
        if was_running {
            info!("animation stopped after {} frames", self.frames);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Handle of the frame the driver is waiting for
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.handle
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn engine(&self) -> &BlobEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut BlobEngine {
        &mut self.engine
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<S: FrameScheduler> Drop for AnimationDriver<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::BlobEvent;
    use crate::event_bus::DEFAULT_EVENT_CAPACITY;
    use crate::scheduler::ManualScheduler;
    use wobble_core::{BlobConfig, WobbleError};
    use wobble_render::PathRecorder;

    fn driver() -> AnimationDriver<ManualScheduler> {
        let config = BlobConfig {
            width: 400,
            height: 400,
            radius: 100.0,
            ..Default::default()
        };
        AnimationDriver::new(BlobEngine::new(config).unwrap(), ManualScheduler::new())
    }

    #[test]
    fn frame_loop_reschedules() {
        let mut driver = driver();
        let _pointer = driver.start();
        let mut surface = PathRecorder::new(400, 400);

        for _ in 0..5 {
            let handle = driver.scheduler_mut().fire().expect("frame pending");
            assert!(driver.on_frame(handle, Some(&mut surface)));
        }
        assert_eq!(driver.frames(), 5);
        assert_eq!(driver.engine().ticks(), 5);
        assert!(driver.scheduler().pending().is_some());
    }

    #[test]
    fn stale_handles_are_ignored() {
        let mut driver = driver();
        driver.start();
        let handle = driver.scheduler_mut().fire().unwrap();
        assert!(!driver.on_frame::<PathRecorder>(handle, None));
        assert_eq!(driver.frames(), 1);

        // Same handle again: already consumed
        assert!(!driver.on_frame::<PathRecorder>(handle, None));
        assert_eq!(driver.frames(), 1);
    }

    #[test]
    fn queued_pointer_samples_apply_before_tick() {
        let mut driver = driver();
        let pointer = driver.start();
        pointer.send(350.0, 200.0).unwrap();
        pointer.send(250.0, 200.0).unwrap();
        assert_eq!(driver.engine().simulation().energy(), 0.0);

        let handle = driver.scheduler_mut().fire().unwrap();
        driver.on_frame::<PathRecorder>(handle, None);
        assert!(driver.engine().pointer().is_hovering());
        assert!(driver.engine().simulation().energy() > 0.0);
    }

    #[test]
    fn undrawn_frames_keep_event_queue_bounded() {
        let mut driver = driver();
        driver.start();
        for _ in 0..100_000 {
            let handle = driver.scheduler_mut().fire().unwrap();
            assert!(!driver.on_frame::<PathRecorder>(handle, None));
        }
        assert_eq!(driver.engine().skipped_frames(), 100_000);
        assert!(driver.engine().pending_events() <= DEFAULT_EVENT_CAPACITY);

        let events = driver.engine_mut().drain_events();
        let paused = events
            .iter()
            .filter(|e| matches!(e, BlobEvent::RenderingPaused { .. }))
            .count();
        assert_eq!(paused, 1);
    }

    #[test]
    fn stop_cancels_and_closes_listener() {
        let mut driver = driver();
        let pointer = driver.start();
        assert!(driver.is_running());

        driver.stop();
        assert!(!driver.is_running());
        assert!(driver.scheduler().pending().is_none());
        assert_eq!(driver.scheduler().cancelled(), 1);
        assert!(matches!(pointer.send(1.0, 1.0), Err(WobbleError::ListenerClosed)));

        // Stopping twice is harmless
        driver.stop();
        assert_eq!(driver.scheduler().cancelled(), 1);
    }

    #[test]
    fn drop_releases_listener() {
        let pointer = {
            let mut driver = driver();
            driver.start()
        };
        assert!(matches!(pointer.send(1.0, 1.0), Err(WobbleError::ListenerClosed)));
    }

    #[test]
    fn restart_invalidates_old_sender() {
        let mut driver = driver();
        let old = driver.start();
        let new = driver.start();
        assert!(old.send(1.0, 1.0).is_err());
        assert!(new.send(1.0, 1.0).is_ok());
        assert!(driver.is_running());
    }
}
