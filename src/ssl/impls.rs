//! Implementation blocks for the certificate structures.

pub mod certificate_bundle;
pub mod certificate_error;
pub mod certificate_supplier;
pub mod change_watcher;
pub mod debounce_timer;
pub mod mod_time_tracker;
