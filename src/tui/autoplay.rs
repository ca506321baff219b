//! # Autoplay Scheduler
//!
//! Owns the one repeating timer that advances the carousel. The timer is a
//! spawned tokio task holding a `tokio::time::interval`; each tick sends
//! `Action::AutoplayTick` to the event loop over the same channel background
//! work uses everywhere else.
//!
//! The scheduler is the sole owner of the task's `AbortHandle`. Nothing else
//! in the app can see or cancel the timer, which is what makes the invariant
//! "at most one live timer" enforceable: `reset()` is cancel-then-spawn
//! inside one synchronous call on the event loop thread, so a second timer
//! can never overlap the first. A leaked previous timer would double the
//! effective advance rate.
//!
//! Tick delivery is best-effort. If the receiver is gone the task logs and
//! exits; nothing panics past the timer boundary.

use std::sync::mpsc::Sender;
use std::time::Duration;

use log::{debug, warn};
use tokio::task::AbortHandle;

use crate::core::action::Action;

pub struct Autoplay {
    period: Duration,
    tx: Sender<Action>,
    handle: Option<AbortHandle>,
}

impl Autoplay {
    /// Create a stopped scheduler. Call `start()` to begin ticking.
    pub fn new(period: Duration, tx: Sender<Action>) -> Self {
        Self {
            period,
            tx,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start ticking. The first tick lands one full period from now.
    /// No-op if already running — starting twice must not create a second
    /// timer.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let tx = self.tx.clone();
        let period = self.period;
        let task = tokio::spawn(async move {
            // interval_at so the first tick waits a full period instead of
            // firing immediately.
            let first = tokio::time::Instant::now() + period;
            let mut ticker = tokio::time::interval_at(first, period);
            loop {
                ticker.tick().await;
                if tx.send(Action::AutoplayTick).is_err() {
                    warn!("Autoplay tick dropped: event loop receiver gone");
                    return;
                }
            }
        });
        self.handle = Some(task.abort_handle());
        debug!("Autoplay started (period {:?})", period);
    }

    /// Cancel the pending timer. Idempotent when already stopped.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Autoplay stopped");
        }
    }

    /// Cancel and restart so the next tick is a full period away, measured
    /// from now rather than from whenever the previous period began.
    pub fn reset(&mut self) {
        self.stop();
        self.start();
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    const PERIOD: Duration = Duration::from_millis(4000);

    fn drain(rx: &mpsc::Receiver<Action>) -> usize {
        rx.try_iter().count()
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_is_a_full_period_out() {
        let (tx, rx) = mpsc::channel();
        let mut autoplay = Autoplay::new(PERIOD, tx);
        autoplay.start();

        tokio::time::sleep(Duration::from_millis(3900)).await;
        assert_eq!(drain(&rx), 0, "no tick before the period elapses");

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(drain(&rx), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_repeat_every_period() {
        let (tx, rx) = mpsc::channel();
        let mut autoplay = Autoplay::new(PERIOD, tx);
        autoplay.start();

        tokio::time::sleep(Duration::from_millis(12100)).await;
        assert_eq!(drain(&rx), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_is_idempotent() {
        let (tx, rx) = mpsc::channel();
        let mut autoplay = Autoplay::new(PERIOD, tx);
        autoplay.start();
        autoplay.start();
        autoplay.start();

        tokio::time::sleep(Duration::from_millis(4100)).await;
        assert_eq!(drain(&rx), 1, "triple start must not triple the rate");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_suspends_indefinitely() {
        let (tx, rx) = mpsc::channel();
        let mut autoplay = Autoplay::new(PERIOD, tx);
        autoplay.start();
        autoplay.stop();
        assert!(!autoplay.is_running());

        // Several nominal periods elapse while suspended; none may fire.
        tokio::time::sleep(Duration::from_millis(20000)).await;
        assert_eq!(drain(&rx), 0);

        autoplay.start();
        tokio::time::sleep(Duration::from_millis(4100)).await;
        assert_eq!(drain(&rx), 1, "resume restarts the nominal period");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let (tx, _rx) = mpsc::channel();
        let mut autoplay = Autoplay::new(PERIOD, tx);
        autoplay.stop();
        autoplay.start();
        autoplay.stop();
        autoplay.stop();
        assert!(!autoplay.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restarts_the_full_interval() {
        let (tx, rx) = mpsc::channel();
        let mut autoplay = Autoplay::new(PERIOD, tx);
        autoplay.start();

        // Nearly a full period elapses, then a manual navigation resets.
        tokio::time::sleep(Duration::from_millis(3900)).await;
        autoplay.reset();

        // The old timer would have fired 100ms from here; it must not.
        tokio::time::sleep(Duration::from_millis(3900)).await;
        assert_eq!(drain(&rx), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(drain(&rx), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_the_timer() {
        let (tx, rx) = mpsc::channel();
        {
            let mut autoplay = Autoplay::new(PERIOD, tx);
            autoplay.start();
        }
        tokio::time::sleep(Duration::from_millis(20000)).await;
        assert_eq!(drain(&rx), 0, "dropped scheduler must not keep ticking");
    }
}
