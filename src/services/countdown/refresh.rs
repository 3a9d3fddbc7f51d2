//! The periodic refresh loop: a cancellable recurring tick that recomputes
//! the breakdown and hands it to a sink.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::models::breakdown::TimeBreakdown;
use crate::services::clock::Clock;

/// Cadence of the countdown refresh.
pub const TICK_PERIOD: Duration = Duration::from_millis(1_000);

/// Handle to a running refresh loop.
///
/// Calling `stop` (or dropping the handle) halts future ticks with no grace
/// period; no publication happens after either returns.
pub struct RefreshHandle {
    stop_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Stop the loop and wait for the ticker thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            // A failed send means the thread already exited
            let _ = stop_tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::warn!("Refresh thread panicked during shutdown");
            }
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Spawn the periodic refresh loop.
///
/// Publishes one breakdown immediately, then one per `period`. Every tick
/// reads the clock fresh, so a delayed tick is not compensated; the next one
/// simply uses the then-current instant. Past-due targets keep publishing
/// all-zero breakdowns.
pub fn spawn_refresh<C, F>(target_ms: i64, clock: C, period: Duration, mut sink: F) -> RefreshHandle
where
    C: Clock + 'static,
    F: FnMut(TimeBreakdown) + Send + 'static,
{
    let (stop_tx, stop_rx) = mpsc::channel();

    let thread = thread::Builder::new()
        .name("countdown-refresh".to_string())
        .spawn(move || loop {
            sink(TimeBreakdown::compute(target_ms, clock.now_ms()));

            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => continue,
                // Stop request, or the handle went away without one
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        })
        .expect("failed to spawn refresh thread");

    RefreshHandle {
        stop_tx: Some(stop_tx),
        thread: Some(thread),
    }
}
