//! TLS certificate supply with hot reload.
//!
//! A [`CertificateSupplier`](structs::certificate_supplier::CertificateSupplier)
//! hands the current certificate to every TLS handshake and, when enabled,
//! replaces it in place whenever the certificate or key file changes on disk.
//!
//! # Components
//!
//! - `ModTimeTracker` remembers the last seen modification time of one file,
//!   following symlinks on every check.
//! - `ChangeWatcher` subscribes to the directories holding the files,
//!   debounces bursts of events and runs a reload callback once the files
//!   settle.
//! - `CertificateSupplier` owns the published certificate and the watcher,
//!   and implements rustls' `ResolvesServerCert`.
//!
//! # Reload Semantics
//!
//! A reload parses both files into a new certificate and publishes it with a
//! single atomic swap. Handshakes see either the old or the new certificate,
//! never a mix. A failed reload keeps the previous certificate; the watcher
//! retries on the next change to either file.
//!
//! # Example
//!
//! ```rust,ignore
//! use cert_reloader::ssl::structs::certificate_supplier::CertificateSupplier;
//! use cert_reloader::ssl::ssl::create_server_config_with_supplier;
//!
//! let supplier = CertificateSupplier::new("cert.pem", "key.pem", true)?;
//! let server_config = create_server_config_with_supplier(supplier.clone())?;
//! // ... serve ...
//! supplier.close();
//! ```

/// Error enumerations.
pub mod enums;

/// Certificate data structures.
pub mod structs;

/// Implementation blocks for the certificate structures.
pub mod impls;

/// Server configuration and self-signed certificate helpers.
#[allow(clippy::module_inception)]
pub mod ssl;
