use std::pin::Pin;
use std::time::Duration;
use tokio::time::Sleep;

/// A single re-armable deadline. Re-arming moves the pending deadline
/// instead of scheduling a second one.
pub struct DebounceTimer {
    pub(crate) delay: Duration,
    pub(crate) sleep: Option<Pin<Box<Sleep>>>,
}
