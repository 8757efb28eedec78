use crate::ssl::enums::load_failure::LoadFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Filesystem error: {0}")]
    FilesystemError(String),
    #[error("Failed to set up certificate watcher: {0}")]
    WatchSetupError(String),
    #[error("Failed to load certificate '{cert_path}': {reason}")]
    CertificateLoadError {
        cert_path: String,
        reason: LoadFailure,
    },
}
