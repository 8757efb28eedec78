//! Common utilities and shared functionality.
//!
//! This module contains the logging setup and the generic error type used
//! by the configuration and bootstrap code.
//!
//! # Example
//!
//! ```rust,ignore
//! use cert_reloader::common::common::setup_logging;
//!
//! setup_logging(&config)?;
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for the common helpers.
pub mod tests;
