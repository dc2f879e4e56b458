//! Cancellable tickers for the view layer's refresh loops.
//!
//! Screens re-run the pure view-model functions on a fixed cadence; this
//! module owns the tick-and-cancel plumbing so no interval management leaks
//! into screen code.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

/// Refresh cadence for the live-scores screen.
pub const LIVE_REFRESH: Duration = Duration::from_secs(60);
/// Faster cadence while a live match is in the current view.
pub const LIVE_VIEW_REFRESH: Duration = Duration::from_secs(30);
/// How often to look for fresh news about the favorite team.
pub const TEAM_NEWS_REFRESH: Duration = Duration::from_secs(3 * 60 * 60);

/// Handle that stops the associated [`Ticker`]. Dropping the handle also
/// cancels the loop, which maps to cancel-on-unmount in the view layer.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// A fixed-period tick loop that runs an async callback until cancelled.
pub struct Ticker {
    period: Duration,
    rx: watch::Receiver<bool>,
}

impl Ticker {
    /// Create a ticker and the handle that cancels it.
    pub fn new(period: Duration) -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        (Self { period, rx }, CancelHandle { tx })
    }

    /// Run `tick` once per period until cancelled. The first tick fires
    /// after one full period, not immediately; ticks missed while the
    /// callback runs long are skipped, not replayed.
    pub async fn run<F, Fut>(mut self, mut tick: F)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // the first interval tick completes immediately; swallow it
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => tick().await,
                changed = self.rx.changed() => {
                    if changed.is_err() || *self.rx.borrow() {
                        debug!("ticker cancelled");
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn ticks_until_cancelled() {
        let (ticker, handle) = Ticker::new(Duration::from_millis(10));
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();

        let task = tokio::spawn(ticker.run(move || {
            let seen = seen.clone();
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        }));

        time::sleep(Duration::from_millis(65)).await;
        handle.cancel();
        task.await.unwrap();

        let ticks = count.load(Ordering::SeqCst);
        assert!(ticks >= 2, "expected at least 2 ticks, got {ticks}");

        // no further ticks after cancellation
        time::sleep(Duration::from_millis(30)).await;
        assert_eq!(count.load(Ordering::SeqCst), ticks);
    }

    #[tokio::test]
    async fn dropping_the_handle_cancels() {
        let (ticker, handle) = Ticker::new(Duration::from_millis(10));
        let task = tokio::spawn(ticker.run(|| async {}));
        drop(handle);
        // completes rather than hanging
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .unwrap()
            .unwrap();
    }
}
