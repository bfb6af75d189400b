//! Periodic metrics refresh
//!
//! A [`RefreshTimer`] spawns a task that sends a freshly generated snapshot
//! every period. The task lives exactly as long as the handle: dropping the
//! handle cancels it. [`RefreshTimer::reset`] restarts the period, for when a
//! snapshot was taken out of schedule.

use crate::consts::cli_consts::SNAPSHOT_QUEUE_SIZE;
use crate::data::{MetricSnapshot, generate_snapshot};
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

/// Scoped handle to the running refresh task.
#[derive(Debug)]
pub struct RefreshTimer {
    receiver: mpsc::Receiver<Vec<MetricSnapshot>>,
    cancel: CancellationToken,
    reset: Arc<Notify>,
    handle: JoinHandle<()>,
}

impl RefreshTimer {
    /// Starts the timer with the default snapshot generator.
    ///
    /// Must be called from within a tokio runtime. The first snapshot arrives
    /// one full `period` after start.
    pub fn start(period: Duration) -> Self {
        Self::start_with(period, generate_snapshot)
    }

    /// Starts the timer with a custom snapshot source.
    pub fn start_with<F>(period: Duration, mut generate: F) -> Self
    where
        F: FnMut() -> Vec<MetricSnapshot> + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel(SNAPSHOT_QUEUE_SIZE);
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let reset = Arc::new(Notify::new());
        let task_reset = reset.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = task_cancel.cancelled() => break,
                    _ = task_reset.notified() => ticker.reset(),
                    _ = ticker.tick() => {
                        // A full queue means the UI is behind; skip this tick.
                        if let Err(mpsc::error::TrySendError::Closed(_)) =
                            sender.try_send(generate())
                        {
                            break;
                        }
                    }
                }
            }
            debug!("Metrics refresh timer stopped");
        });

        debug!("Metrics refresh timer started ({}s period)", period.as_secs());
        Self {
            receiver,
            cancel,
            reset,
            handle,
        }
    }

    /// Returns the most recent pending snapshot without blocking, if any.
    pub fn try_latest(&mut self) -> Option<Vec<MetricSnapshot>> {
        let mut latest = None;
        while let Ok(snapshot) = self.receiver.try_recv() {
            latest = Some(snapshot);
        }
        latest
    }

    /// Restarts the period from now and drops snapshots still queued, so the
    /// next one arrives a full period later.
    pub fn reset(&mut self) {
        while self.receiver.try_recv().is_ok() {}
        self.reset.notify_one();
    }

    /// Waits for the next snapshot. Returns `None` once the timer has stopped.
    pub async fn next(&mut self) -> Option<Vec<MetricSnapshot>> {
        self.receiver.recv().await
    }

    /// Stops the timer and waits for its task to finish.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        let _ = (&mut self.handle).await;
    }

    /// Returns a token that is cancelled when this timer is torn down.
    #[cfg(test)]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MetricTitle, baseline_metrics};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_source(counter: Arc<AtomicUsize>) -> impl FnMut() -> Vec<MetricSnapshot> + Send {
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            baseline_metrics()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_snapshot_arrives_after_one_period() {
        let mut timer = RefreshTimer::start(Duration::from_secs(10));
        tokio::time::sleep(Duration::from_secs(9)).await;
        assert!(timer.try_latest().is_none());

        let snapshot = timer.next().await.expect("snapshot after one period");
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot[0].title, MetricTitle::TotalRevenue);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut timer =
            RefreshTimer::start_with(Duration::from_secs(10), counting_source(counter.clone()));

        for _ in 0..3 {
            assert!(timer.next().await.is_some());
        }
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_latest_drains_to_newest() {
        let mut timer = RefreshTimer::start(Duration::from_secs(1));
        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert!(timer.try_latest().is_some());
        assert!(timer.try_latest().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restarts_period() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut timer =
            RefreshTimer::start_with(Duration::from_secs(10), counting_source(counter.clone()));

        tokio::time::sleep(Duration::from_secs(8)).await;
        timer.reset();

        // the original schedule would have fired at t=10s
        tokio::time::sleep(Duration::from_secs(9)).await;
        assert!(timer.try_latest().is_none());
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(timer.try_latest().is_some());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_discards_queued_snapshots() {
        let mut timer = RefreshTimer::start(Duration::from_secs(1));
        tokio::time::sleep(Duration::from_millis(2_500)).await;
        timer.reset();
        assert!(timer.try_latest().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_task() {
        let counter = Arc::new(AtomicUsize::new(0));
        let timer =
            RefreshTimer::start_with(Duration::from_secs(10), counting_source(counter.clone()));
        let token = timer.cancellation_token();
        drop(timer);
        assert!(token.is_cancelled());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_waits_for_task() {
        let timer = RefreshTimer::start(Duration::from_secs(10));
        let token = timer.cancellation_token();
        timer.stop().await;
        assert!(token.is_cancelled());
    }
}
