use serde::{Deserialize, Serialize};
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::tls_config::TlsConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub tls: TlsConfig,
    pub http_server: HttpServerConfig,
}
