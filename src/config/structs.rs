//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Certificate source and hot reload settings.
pub mod tls_config;

/// HTTPS listener settings.
pub mod http_server_config;
