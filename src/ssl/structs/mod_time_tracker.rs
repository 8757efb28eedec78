use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Last observed modification time of a single watched file.
///
/// `mod_time` is only advanced by its owner after a successful certificate
/// load, so a failed reload keeps reporting the file as updated.
pub struct ModTimeTracker {
    pub(crate) path: PathBuf,
    pub(crate) mod_time: Option<DateTime<Utc>>,
}
