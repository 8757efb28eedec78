use crate::ssl::structs::debounce_timer::DebounceTimer;
use std::time::Duration;
use tokio::time::Instant;

impl DebounceTimer {
    pub fn new(delay: Duration) -> DebounceTimer {
        DebounceTimer {
            delay,
            sleep: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.sleep.is_some()
    }

    /// Starts the timer, or pushes the deadline of the pending one back by
    /// the full delay.
    pub fn arm(&mut self) {
        let deadline = Instant::now() + self.delay;
        match self.sleep.as_mut() {
            Some(sleep) => sleep.as_mut().reset(deadline),
            None => self.sleep = Some(Box::pin(tokio::time::sleep_until(deadline))),
        }
    }

    pub fn cancel(&mut self) {
        self.sleep = None;
    }

    /// Resolves once the pending deadline passes and disarms the timer.
    /// Pends forever while disarmed. Cancel safe: dropping the future keeps
    /// the deadline.
    pub async fn fired(&mut self) {
        match self.sleep.as_mut() {
            Some(sleep) => {
                sleep.as_mut().await;
                self.sleep = None;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
