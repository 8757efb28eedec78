use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HttpServerConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub threads: Option<u64>,
    pub keep_alive: Option<u64>,
}
