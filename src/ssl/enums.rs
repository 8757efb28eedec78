//! Error enumerations for certificate loading and watching.

/// Top-level error returned by the certificate supplier and its watcher.
pub mod certificate_error;

/// Detailed reasons for a failed certificate/key load.
pub mod load_failure;
