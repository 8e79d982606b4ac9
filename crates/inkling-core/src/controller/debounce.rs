//! Single-shot debounce timer.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::trace;

use super::ControllerEvent;

/// Debounce timer that posts [`ControllerEvent::DebounceFired`] once the quiet
/// period elapses.
///
/// Every re-arm aborts the previous sleep and bumps the generation, so a
/// firing already queued from an older arm is rejected by [`Debounce::accept`].
pub(crate) struct Debounce {
    delay: Duration,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl Debounce {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            handle: None,
        }
    }

    /// Cancel any pending firing and start a new quiet period.
    pub(crate) fn arm(&mut self, events: &UnboundedSender<ControllerEvent>) {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let delay = self.delay;
        let events = events.clone();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(ControllerEvent::DebounceFired { generation });
        }));
        trace!("Debounce armed: generation={}", generation);
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Consume a firing. True only for the latest, still-armed generation.
    pub(crate) fn accept(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.handle.is_some() {
            self.handle = None;
            true
        } else {
            false
        }
    }
}

impl Drop for Debounce {
    fn drop(&mut self) {
        self.cancel();
    }
}
