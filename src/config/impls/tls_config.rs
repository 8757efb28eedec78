use std::time::Duration;
use crate::config::structs::tls_config::TlsConfig;
use crate::ssl::ssl::DEFAULT_DEBOUNCE_DELAY;

impl TlsConfig {
    pub fn debounce_duration(&self) -> Duration {
        self.debounce_delay.map_or(DEFAULT_DEBOUNCE_DELAY, Duration::from_secs)
    }
}
