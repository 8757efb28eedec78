use crate::ssl::structs::mod_time_tracker::ModTimeTracker;
use notify::{Event, RecommendedWatcher};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

pub type WatcherReceivers = (UnboundedReceiver<Event>, UnboundedReceiver<notify::Error>);

pub struct ChangeWatcher {
    pub(crate) watcher: Mutex<Option<RecommendedWatcher>>,
    pub(crate) receivers: Mutex<Option<WatcherReceivers>>,
    pub(crate) trackers: Mutex<Vec<ModTimeTracker>>,
    pub(crate) directories: Vec<PathBuf>,
    pub(crate) debounce_delay: Duration,
}
