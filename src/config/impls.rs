pub mod configuration;
pub mod configuration_error;
pub mod http_server_config;
pub mod tls_config;
