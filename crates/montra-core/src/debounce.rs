//! Cancellable delayed dispatch for search-as-you-type.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Schedules a single pending task after a quiet period.
///
/// Each call replaces (aborts) the previously scheduled task, so a burst
/// of calls runs the task once, after the last call's delay.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run after `delay`, cancelling any pending one.
    pub fn schedule<F>(&mut self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new();

        for _ in 0..3 {
            let runs = Arc::clone(&runs);
            debouncer.schedule(Duration::from_millis(200), async move {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_run() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new();

        {
            let runs = Arc::clone(&runs);
            debouncer.schedule(Duration::from_millis(200), async move {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_schedule_resets_quiet_period() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new();

        {
            let runs = Arc::clone(&runs);
            debouncer.schedule(Duration::from_millis(200), async move {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
        {
            let runs = Arc::clone(&runs);
            debouncer.schedule(Duration::from_millis(200), async move {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }

        // 150ms after the second call: the first was cancelled, the
        // second has not fired yet.
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
