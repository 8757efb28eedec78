use crate::http::structs::certificate_reload_result::CertificateReloadResult;
use crate::ssl::enums::certificate_error::CertificateError;
use chrono::{DateTime, Utc};

impl CertificateReloadResult {
    pub fn ok(loaded_at: DateTime<Utc>) -> Self {
        CertificateReloadResult {
            status: String::from("ok"),
            loaded_at: Some(loaded_at.to_rfc3339()),
            error: None,
        }
    }

    pub fn failed(error: &CertificateError) -> Self {
        CertificateReloadResult {
            status: String::from("failed"),
            loaded_at: None,
            error: Some(error.to_string()),
        }
    }
}
