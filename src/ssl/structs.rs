//! Certificate data structures.

/// A loaded, immutable certificate chain and signing key.
pub mod certificate_bundle;

/// The certificate and key file locations.
pub mod certificate_paths;

/// The handshake-time certificate supplier with optional hot reload.
pub mod certificate_supplier;

/// Directory watcher driving certificate reloads.
pub mod change_watcher;

/// Single re-armable timer used to coalesce filesystem events.
pub mod debounce_timer;

/// Per-file modification time tracking.
pub mod mod_time_tracker;
