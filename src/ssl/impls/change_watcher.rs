use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::change_watcher::ChangeWatcher;
use crate::ssl::structs::debounce_timer::DebounceTimer;
use crate::ssl::structs::mod_time_tracker::ModTimeTracker;
use chrono::{DateTime, Utc};
use log::{debug, error, info, trace, warn};
use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

impl std::fmt::Debug for ChangeWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeWatcher")
            .field("directories", &self.directories)
            .field("trackers", &*self.trackers.lock())
            .field("debounce_delay", &self.debounce_delay)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl ChangeWatcher {
    /// Subscribes to the directories holding `paths` (each directory once)
    /// and records the current modification time of every path, in order.
    pub fn new<P: AsRef<Path>>(
        paths: &[P],
        debounce_delay: Duration,
    ) -> Result<ChangeWatcher, CertificateError> {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
        let (error_tx, error_rx) = mpsc::unbounded_channel::<notify::Error>();
        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            // Send failures only mean the watch loop has already stopped.
            match result {
                Ok(event) => {
                    let _ = event_tx.send(event);
                }
                Err(error) => {
                    let _ = error_tx.send(error);
                }
            }
        })
        .map_err(|e| CertificateError::WatchSetupError(format!("failed to create watcher: {}", e)))?;

        let mut directories: Vec<PathBuf> = Vec::new();
        for path in paths {
            let directory = Self::parent_directory(path.as_ref());
            if directories.contains(&directory) {
                continue;
            }
            watcher
                .watch(&directory, RecursiveMode::NonRecursive)
                .map_err(|e| {
                    CertificateError::WatchSetupError(format!("error adding dir '{}' to watcher: {}", directory.display(), e))
                })?;
            debug!("[WATCHER] Directory '{}' added to watcher", directory.display());
            directories.push(directory);
        }

        let mut trackers = Vec::with_capacity(paths.len());
        for path in paths {
            let tracker = ModTimeTracker::new(path)?;
            debug!("[WATCHER] Added path '{}' to watcher", tracker.path().display());
            trackers.push(tracker);
        }

        Ok(ChangeWatcher {
            watcher: Mutex::new(Some(watcher)),
            receivers: Mutex::new(Some((event_rx, error_rx))),
            trackers: Mutex::new(trackers),
            directories,
            debounce_delay,
        })
    }

    pub fn watched_directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn watched_paths(&self) -> Vec<PathBuf> {
        self.trackers
            .lock()
            .iter()
            .map(|tracker| tracker.path().to_path_buf())
            .collect()
    }

    pub fn debounce_delay(&self) -> Duration {
        self.debounce_delay
    }

    pub fn is_closed(&self) -> bool {
        self.watcher.lock().is_none()
    }

    /// Runs the event loop until the notification source closes.
    ///
    /// Every qualifying event that reveals a changed file re-arms the debounce
    /// timer. When the timer fires `reload_callback` runs once; the trackers
    /// only advance when it succeeds, so a failed reload is retried on the
    /// next filesystem event.
    pub async fn watch<F>(&self, mut reload_callback: F)
    where
        F: FnMut() -> Result<(), CertificateError> + Send,
    {
        let Some((mut events, mut errors)) = self.receivers.lock().take() else {
            warn!("[WATCHER] Watch loop already started, ignoring");
            return;
        };
        let mut timer = DebounceTimer::new(self.debounce_delay);
        info!(
            "[WATCHER] Watching {} file(s) across {} directories with {:?} debounce",
            self.trackers.lock().len(),
            self.directories.len(),
            self.debounce_delay
        );
        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else {
                        break;
                    };
                    if self.handle_event(&event) {
                        debug!("[WATCHER] Change detected ({:?}), reload scheduled in {:?}", event.kind, timer.delay());
                        timer.arm();
                    }
                }
                watch_error = errors.recv() => {
                    let Some(watch_error) = watch_error else {
                        break;
                    };
                    error!("[WATCHER] Certificate watcher error: {}", watch_error);
                }
                _ = timer.fired(), if timer.is_pending() => {
                    if let Err(error) = self.reload_with(&mut reload_callback) {
                        error!("[WATCHER] Error reloading certificate: {}", error);
                    }
                }
            }
        }
        timer.cancel();
        info!("[WATCHER] Watch loop terminated");
    }

    /// Drops the notification subscription, which closes both channels and
    /// ends the watch loop. Safe to call more than once.
    pub fn close(&self) {
        if let Some(watcher) = self.watcher.lock().take() {
            drop(watcher);
            debug!("[WATCHER] Notification subscription released");
        }
    }

    pub fn is_write_or_create(kind: &EventKind) -> bool {
        matches!(
            kind,
            EventKind::Create(_)
                | EventKind::Modify(ModifyKind::Any)
                | EventKind::Modify(ModifyKind::Data(_))
                | EventKind::Modify(ModifyKind::Name(RenameMode::To | RenameMode::Both | RenameMode::Any))
        )
    }

    /// Evaluates every tracker (no short-circuit) and reports whether any
    /// watched file differs from its stored modification time.
    pub(crate) fn handle_event(&self, event: &Event) -> bool {
        if !Self::is_write_or_create(&event.kind) {
            trace!("[WATCHER] Ignoring event {:?} on {:?}", event.kind, event.paths);
            return false;
        }
        let trackers = self.trackers.lock();
        let mut updated = false;
        for tracker in trackers.iter() {
            if tracker.is_updated() {
                updated = true;
            }
        }
        updated
    }

    /// Runs `reload_callback` and, on success, stores the modification times
    /// read just before it ran. A write landing while the callback runs stays
    /// visible to the next event.
    pub fn reload_with<F>(&self, reload_callback: F) -> Result<(), CertificateError>
    where
        F: FnOnce() -> Result<(), CertificateError>,
    {
        let snapshot: Vec<Option<DateTime<Utc>>> = self
            .trackers
            .lock()
            .iter()
            .map(|tracker| tracker.latest_mod_time().ok())
            .collect();
        reload_callback()?;
        for (tracker, mod_time) in self.trackers.lock().iter_mut().zip(snapshot) {
            match mod_time {
                Some(mod_time) => tracker.set_mod_time(mod_time),
                None => {
                    if let Err(error) = tracker.store_mod_time() {
                        error!("[WATCHER] Unable to store modification time: {}", error);
                    }
                }
            }
        }
        Ok(())
    }

    pub(crate) fn parent_directory(path: &Path) -> PathBuf {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}
