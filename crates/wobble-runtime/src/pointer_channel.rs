//! Pointer sample queue between the host's input source and the frame loop
//!
//! Samples can be sent from any thread. Only the frame loop applies them,
//! so pointer handling never interleaves with a simulation step.

use std::sync::mpsc::{self, Receiver, Sender};
use wobble_core::{Result, Vec2, WobbleError};

/// Create a connected sender/receiver pair
pub fn pointer_channel() -> (PointerSender, PointerReceiver) {
    let (tx, rx) = mpsc::channel();
    (PointerSender { tx }, PointerReceiver { rx })
}

/// Host-side handle for reporting pointer samples
#[derive(Clone, Debug)]
pub struct PointerSender {
    tx: Sender<Vec2>,
}

impl PointerSender {
    /// Queue a sample. Fails once the listening driver has stopped.
    pub fn send(&self, x: f64, y: f64) -> Result<()> {
        self.tx
            .send(Vec2::new(x, y))
            .map_err(|_| WobbleError::ListenerClosed)
    }
}

/// Frame-loop side of the queue. Dropping it deregisters the listener.
#[derive(Debug)]
pub struct PointerReceiver {
    rx: Receiver<Vec2>,
}

impl PointerReceiver {
    /// Everything queued since the last drain, oldest first
    pub fn drain(&self) -> Vec<Vec2> {
        self.rx.try_iter().collect()
    }
}
