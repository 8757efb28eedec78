//! HTTPS endpoint serving the supplied certificate.
//!
//! The listener is bound with a rustls configuration whose certificate
//! resolver is the [`CertificateSupplier`](crate::ssl::structs::certificate_supplier::CertificateSupplier),
//! so every new connection picks up the most recently published certificate.
//!
//! # Supported Endpoints
//!
//! - `GET /` - Liveness check
//! - `GET /certificate` - Status of the published certificate
//! - `POST /certificate/reload` - Reload the certificate from disk immediately
//!
//! # Response Format
//!
//! Certificate endpoints answer with JSON.

/// Response bodies.
pub mod structs;

/// Implementation blocks for the response bodies.
pub mod impls;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
