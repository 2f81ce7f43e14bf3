use crate::persistence::Settings;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Get the UI poll interval
pub fn tick_duration(settings: &Settings) -> Duration {
    Duration::from_millis(settings.tick_ms.max(1))
}

/// Seconds spent in the app, split for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Elapsed {
    pub seconds: u64,
}

impl Elapsed {
    pub fn minutes(&self) -> u64 {
        self.seconds / 60
    }

    pub fn secs(&self) -> u64 {
        self.seconds % 60
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min {} sec", self.minutes(), self.secs())
    }
}

/// Counts whole seconds since it was started on a background thread.
/// Dropping the timer stops and joins that thread.
pub struct SessionTimer {
    seconds: Arc<AtomicU64>,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl SessionTimer {
    /// Start ticking once per second
    pub fn start() -> Self {
        Self::start_with_period(Duration::from_secs(1))
    }

    /// Start ticking once per `period`. Each tick adds exactly one to the counter.
    pub fn start_with_period(period: Duration) -> Self {
        let seconds = Arc::new(AtomicU64::new(0));
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let counter = Arc::clone(&seconds);

        let handle = thread::spawn(move || {
            let started = Instant::now();
            let mut ticks: u32 = 0;
            loop {
                // Deadlines are absolute so a slow wakeup doesn't shift later ticks
                let deadline = started + period * ticks.saturating_add(1);
                let wait = deadline.saturating_duration_since(Instant::now());
                match stop_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {
                        counter.fetch_add(1, Ordering::SeqCst);
                        ticks = ticks.saturating_add(1);
                    }
                    // Stop requested or owner gone
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        debug!(?period, "Session timer started");

        Self {
            seconds,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub fn elapsed(&self) -> Elapsed {
        Elapsed {
            seconds: self.seconds.load(Ordering::SeqCst),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel the repeating tick and wait for the thread to exit
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Session timer thread panicked");
            }
            debug!(seconds = self.elapsed().seconds, "Session timer stopped");
        }
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
