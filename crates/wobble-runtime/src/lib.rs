//! Wobble Runtime - frame loop infrastructure
//!
//! Provides the pieces a host view needs to animate a blob:
//! - `BlobEngine` - one blob instance: simulate, color, render per tick
//! - `AnimationDriver` - owns the engine and its scheduling handle
//! - `FrameScheduler` - host-side periodic callback abstraction
//! - `FrameClock` - fixed-timestep accumulator for real-time pacing
//! - `PointerSender` - thread-safe queue of pointer samples
//! - `BlobEvent` / `EventBus` - what happened during the last frames

mod clock;
mod driver;
mod engine;
mod event;
mod event_bus;
mod pointer_channel;
mod scheduler;

pub use clock::FrameClock;
pub use driver::AnimationDriver;
pub use engine::BlobEngine;
pub use event::BlobEvent;
pub use event_bus::{EventBus, DEFAULT_EVENT_CAPACITY};
pub use pointer_channel::{pointer_channel, PointerReceiver, PointerSender};
pub use scheduler::{FrameHandle, FrameScheduler, IntervalScheduler, ManualScheduler};
