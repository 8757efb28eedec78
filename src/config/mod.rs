//! Configuration management module.
//!
//! This module handles loading, parsing and validating the service
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **tls**: certificate and key paths, reload flag, debounce delay
//! - **http_server**: the HTTPS listener serving the supplied certificate
//!
//! # Example
//!
//! ```rust,ignore
//! use cert_reloader::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let supplier = CertificateSupplier::from_config(&config.tls)?;
//! ```

/// Configuration errors.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
