use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::{Instant, Sleep, sleep_until};

/// Single owned timer that is pushed back on every [`Debouncer::arm`].
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    timer: Option<Pin<Box<Sleep>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, timer: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts the quiet period, or restarts it if it is already running.
    pub fn arm(&mut self) {
        let deadline = Instant::now() + self.delay;
        match self.timer.as_mut() {
            Some(timer) => timer.as_mut().reset(deadline),
            None => self.timer = Some(Box::pin(sleep_until(deadline))),
        }
    }

    pub fn cancel(&mut self) {
        self.timer = None;
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Resolves once the quiet period elapses; never resolves while disarmed.
    ///
    /// Cancel safe: dropping the future keeps the timer running.
    pub async fn fired(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.as_mut().await;
                self.timer = None;
            }
            None => future::pending().await,
        }
    }
}
