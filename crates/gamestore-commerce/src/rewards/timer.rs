//! Delayed spin resolution.

use std::time::Duration;
use tokio::task::JoinHandle;

/// How long the wheel spins before it settles.
pub const DEFAULT_SPIN_DELAY: Duration = Duration::from_millis(3000);

/// A scheduled callback that can be cancelled before it fires.
#[derive(Debug)]
pub struct ScheduledResolution {
    handle: JoinHandle<()>,
}

impl ScheduledResolution {
    /// Run `on_elapsed` once `delay` has passed.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn schedule<F>(delay: Duration, on_elapsed: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_elapsed();
        });
        Self { handle }
    }

    /// Stop the callback from firing if it has not fired yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the callback. Returns false if it was cancelled.
    pub async fn finished(self) -> bool {
        self.handle.await.is_ok()
    }
}
