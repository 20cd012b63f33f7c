use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Recurring idle-timer tick running on a tokio runtime.
///
/// Ticks are queued on a std channel and drained by the UI thread from its
/// poll loop, so all tracker mutation stays on that thread. The task is
/// aborted by [`stop`](Self::stop) or on drop.
pub struct IdleTicker {
    task: Option<JoinHandle<()>>,
    rx: Receiver<Instant>,
}

impl IdleTicker {
    pub fn spawn(runtime: &tokio::runtime::Handle, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let task = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(Instant::now()).is_err() {
                    break;
                }
            }
        });
        debug!(period_ms = period.as_millis() as u64, "idle ticker started");
        Self {
            task: Some(task),
            rx,
        }
    }

    /// Drain queued ticks, returning the latest one.
    pub fn poll(&self) -> Option<Instant> {
        self.rx.try_iter().last()
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("idle ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for IdleTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ticks_arrive_on_the_channel() {
        let ticker = IdleTicker::spawn(&tokio::runtime::Handle::current(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(ticker.poll().is_some());
        assert!(ticker.is_running());
    }

    #[tokio::test]
    async fn poll_drains_the_queue() {
        let ticker = IdleTicker::spawn(&tokio::runtime::Handle::current(), Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(ticker.poll().is_some());
        assert!(ticker.poll().is_none());
    }

    #[tokio::test]
    async fn stop_cancels_the_task() {
        let mut ticker =
            IdleTicker::spawn(&tokio::runtime::Handle::current(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(30)).await;

        ticker.stop();
        assert!(!ticker.is_running());
        tokio::time::sleep(Duration::from_millis(10)).await;
        ticker.poll();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(ticker.poll().is_none());
    }

    #[tokio::test]
    async fn stop_is_idempotent() {
        let mut ticker =
            IdleTicker::spawn(&tokio::runtime::Handle::current(), Duration::from_millis(10));
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
    }
}
