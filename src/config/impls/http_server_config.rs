use std::thread::available_parallelism;
use crate::config::structs::http_server_config::HttpServerConfig;

impl HttpServerConfig {
    /// Configured worker count, or the machine's available parallelism when
    /// `threads` is absent. Never zero.
    pub fn worker_threads(&self) -> usize {
        match self.threads {
            Some(threads) => threads as usize,
            None => available_parallelism().map_or(1, |n| n.get()),
        }
        .max(1)
    }
}
