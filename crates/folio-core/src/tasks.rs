//! Background work owned by a widget.
//!
//! A [`ScopedTask`] aborts its tokio task when dropped, so periodic
//! decorative work lives exactly as long as the component holding it.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// A tokio task that is aborted when this handle is dropped.
#[derive(Debug)]
pub struct ScopedTask {
    name: &'static str,
    handle: Option<JoinHandle<()>>,
}

impl ScopedTask {
    /// Spawns `future` on the current runtime.
    pub fn spawn<F>(name: &'static str, future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        debug!(task = name, "Starting scoped task");
        Self {
            name,
            handle: Some(tokio::spawn(future)),
        }
    }

    /// Calls `tick` every `period`, starting one period from now.
    pub fn interval<F>(name: &'static str, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self::spawn(name, async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                tick();
            }
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the task has stopped, by completion or cancellation.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }

    /// Aborts the task now.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!(task = self.name, "Cancelled scoped task");
        }
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn test_interval_stops_on_drop() {
        let count = Arc::new(AtomicUsize::new(0));
        let task = {
            let count = count.clone();
            ScopedTask::interval("counter", Duration::from_millis(10), move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };

        tokio::time::sleep(Duration::from_millis(80)).await;
        drop(task);
        let after_drop = count.load(Ordering::SeqCst);
        assert!(after_drop >= 1);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }

    #[tokio::test]
    async fn test_cancel_marks_finished() {
        let mut task = ScopedTask::spawn("sleeper", async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });
        assert!(!task.is_finished());
        assert_eq!(task.name(), "sleeper");

        task.cancel();
        assert!(task.is_finished());
        // Cancelling twice is harmless
        task.cancel();
    }
}
