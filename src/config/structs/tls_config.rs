use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TlsConfig {
    pub cert_path: String,
    pub key_path: String,
    #[serde(default)]
    pub reload_on_update: bool,
    /// Seconds of quiet after the last change before reloading.
    pub debounce_delay: Option<u64>,
}
