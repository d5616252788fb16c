//! # Tick Timer
//!
//! The one periodic timer in the app. A tokio task drives an interval and
//! sends `Action::Tick` into the event loop's channel; the loop applies it
//! through `update()` like any other action, so state is only ever touched
//! on the UI thread.
//!
//! The timer is a scoped resource: dropping `TickTimer` aborts the task.

use std::sync::mpsc;
use std::time::Duration;

use log::{debug, info};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::core::action::Action;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct TickTimer {
    handle: JoinHandle<()>,
}

impl TickTimer {
    /// Arm the timer. Must be called from within a tokio runtime.
    pub fn start(interval: Duration, tx: mpsc::Sender<Action>) -> Self {
        info!("Arming tick timer ({:?})", interval);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(Action::Tick).is_err() {
                    debug!("Tick receiver dropped, stopping timer");
                    return;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        debug!("Cancelling tick timer");
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_timer_sends_ticks() {
        let (tx, rx) = mpsc::channel();
        let _timer = TickTimer::start(Duration::from_millis(5), tx);
        tokio::time::sleep(Duration::from_millis(60)).await;

        let ticks: Vec<Action> = rx.try_iter().collect();
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|a| *a == Action::Tick));
    }

    #[tokio::test]
    async fn test_no_immediate_tick() {
        let (tx, rx) = mpsc::channel();
        let _timer = TickTimer::start(Duration::from_secs(60), tx);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_drop_cancels_timer() {
        let (tx, rx) = mpsc::channel();
        let timer = TickTimer::start(Duration::from_millis(5), tx);
        tokio::time::sleep(Duration::from_millis(20)).await;
        drop(timer);

        // Let the abort land, then discard anything sent before it
        tokio::time::sleep(Duration::from_millis(20)).await;
        rx.try_iter().for_each(drop);

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(rx.try_recv().is_err());
    }
}
