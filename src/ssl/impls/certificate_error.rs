use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::load_failure::LoadFailure;

impl CertificateError {
    pub fn load(cert_path: &str, reason: LoadFailure) -> Self {
        CertificateError::CertificateLoadError {
            cert_path: cert_path.to_string(),
            reason,
        }
    }

    pub fn is_load_error(&self) -> bool {
        matches!(self, CertificateError::CertificateLoadError { .. })
    }

    pub fn load_failure(&self) -> Option<&LoadFailure> {
        match self {
            CertificateError::CertificateLoadError { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
