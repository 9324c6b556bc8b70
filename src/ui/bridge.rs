// EventLoop - Serializes page notifications into the controller
//
// Notifications (ready, clicks, key presses) may be raised from anywhere that
// holds an `EventSender`. They are queued and handed to the controller one at a
// time; each handler runs to completion before the next event is taken, so the
// selection state is only ever touched by one handler.

use crate::metrics::RenderMetrics;
use crate::state::StateChange;
use crate::ui::controller::{DirectoryController, UiEvent};
use crate::ui::view::View;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Bounded to keep a flood of clicks from growing memory without limit
pub const EVENT_QUEUE_CAPACITY: usize = 100;

/// Queue of pending UI events, drained into a [`DirectoryController`]
///
/// # Example
/// ```ignore
/// let (mut event_loop, sender) = EventLoop::new(metrics.clone());
/// sender.send(UiEvent::DocumentReady);
/// drop(sender);
/// event_loop.run(&mut controller).await?;
/// ```
pub struct EventLoop {
    event_rx: mpsc::Receiver<UiEvent>,
}

impl EventLoop {
    /// Create the loop and the first sender handle.
    pub fn new(metrics: Arc<RenderMetrics>) -> (Self, EventSender) {
        let (event_tx, event_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
        (Self { event_rx }, EventSender { event_tx, metrics })
    }

    /// Process events until every sender has been dropped.
    ///
    /// Stops at the first handler error; a failing view is not recoverable.
    pub async fn run<V: View>(&mut self, controller: &mut DirectoryController<V>) -> Result<usize> {
        tracing::debug!("Event loop started");

        let mut handled = 0;
        while let Some(event) = self.event_rx.recv().await {
            log_changes(&controller.handle_event(event)?);
            handled += 1;
        }

        tracing::debug!("Event loop finished after {} events", handled);
        Ok(handled)
    }

    /// Process every event queued right now without waiting for more.
    pub fn drain<V: View>(&mut self, controller: &mut DirectoryController<V>) -> Result<usize> {
        let mut handled = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            log_changes(&controller.handle_event(event)?);
            handled += 1;
        }
        Ok(handled)
    }
}

fn log_changes(changes: &[StateChange]) {
    for change in changes {
        tracing::debug!("Selection changed: {:?}", change);
    }
}

/// Cloneable handle for raising UI events
#[derive(Clone)]
pub struct EventSender {
    event_tx: mpsc::Sender<UiEvent>,
    metrics: Arc<RenderMetrics>,
}

impl EventSender {
    /// Queue an event. Returns false if it was dropped.
    pub fn send(&self, event: UiEvent) -> bool {
        match self.event_tx.try_send(event) {
            Ok(_) => true,
            Err(mpsc::error::TrySendError::Full(event)) => {
                tracing::warn!("UI event queue full - dropping {:?}", event);
                self.metrics.record_dropped_event();
                false
            }
            Err(mpsc::error::TrySendError::Closed(event)) => {
                tracing::warn!("Failed to queue {:?} - event loop has stopped", event);
                self.metrics.record_dropped_event();
                false
            }
        }
    }
}
