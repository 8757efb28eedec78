use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::mod_time_tracker::ModTimeTracker;
use chrono::{DateTime, Utc};
use log::warn;
use std::path::Path;

impl std::fmt::Debug for ModTimeTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModTimeTracker")
            .field("path", &self.path)
            .field("mod_time", &self.mod_time)
            .finish()
    }
}

impl ModTimeTracker {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<ModTimeTracker, CertificateError> {
        let mut tracker = ModTimeTracker {
            path: path.as_ref().to_path_buf(),
            mod_time: None,
        };
        tracker.store_mod_time()?;
        Ok(tracker)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mod_time(&self) -> Option<DateTime<Utc>> {
        self.mod_time
    }

    /// Resolves symlinks and stats the target. Never cached: a rotated
    /// symlink target shows up on the next call.
    pub fn latest_mod_time(&self) -> Result<DateTime<Utc>, CertificateError> {
        let resolved = std::fs::canonicalize(&self.path).map_err(|e| {
            CertificateError::FilesystemError(format!("failed to eval file path '{}': {}", self.path.display(), e))
        })?;
        let modified = std::fs::metadata(&resolved)
            .and_then(|metadata| metadata.modified())
            .map_err(|e| {
                CertificateError::FilesystemError(format!("failed to get file info '{}': {}", resolved.display(), e))
            })?;
        Ok(DateTime::<Utc>::from(modified))
    }

    /// True when the file changed since the last stored time, or when no
    /// time was ever stored. Stat failures count as "not updated".
    pub fn is_updated(&self) -> bool {
        match self.latest_mod_time() {
            Ok(latest) => self.mod_time.is_none_or(|stored| stored != latest),
            Err(error) => {
                warn!("[WATCHER] Unable to check '{}' for changes: {}", self.path.display(), error);
                false
            }
        }
    }

    pub fn store_mod_time(&mut self) -> Result<(), CertificateError> {
        self.mod_time = Some(self.latest_mod_time()?);
        Ok(())
    }

    /// Records a modification time read earlier, typically before the files
    /// were parsed.
    pub fn set_mod_time(&mut self, mod_time: DateTime<Utc>) {
        self.mod_time = Some(mod_time);
    }
}
