//! # cert-reloader
//!
//! A live TLS certificate supplier for rustls servers, with an HTTPS service
//! built on Actix-web that serves whatever certificate is currently on disk.
//!
//! ## Overview
//!
//! Certificates are loaded once at startup. When hot reload is enabled the
//! directories holding the certificate and key are watched; after the files
//! stop changing for the configured debounce delay both are parsed again and
//! the new certificate is published atomically. New TLS handshakes use it
//! immediately while connections already established keep theirs.
//!
//! ## Features
//!
//! - **Lock-free handshakes**: the current certificate sits behind an `ArcSwap`
//! - **Debounced reloads**: a certificate and key written one after the other reload once
//! - **Symlink rotation**: modification times are taken from the resolved target
//! - **Safe failures**: a broken pair on disk never replaces a working certificate
//! - **Manual reload**: `POST /certificate/reload` on the HTTPS service
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cert_reloader::ssl::structs::certificate_supplier::CertificateSupplier;
//! use cert_reloader::ssl::ssl::create_server_config_with_supplier;
//!
//! let supplier = CertificateSupplier::new("cert.pem", "key.pem", true)?;
//! let server_config = create_server_config_with_supplier(supplier.clone())?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and the generic error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTPS service exposing certificate status and manual reload
//! - [`ssl`] - Certificate loading, change watching and the rustls resolver
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains the fern logging setup and `CustomError`.
pub mod common;

/// Configuration management module.
///
/// Handles loading and validating `config.toml`, including the TLS and
/// HTTP server sections.
pub mod config;

/// HTTPS service module.
///
/// Serves the supplied certificate and exposes its status over JSON.
pub mod http;

/// Certificate supply and hot reload.
///
/// Contains `ModTimeTracker`, `ChangeWatcher` and `CertificateSupplier`.
pub mod ssl;

/// CLI argument structures.
pub mod structs;
