/// Published certificate details returned by `GET /certificate`.
pub mod certificate_status;

/// Outcome of `POST /certificate/reload`.
pub mod certificate_reload_result;
