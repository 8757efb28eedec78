use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::tls_config::TlsConfig;
use crate::ssl::ssl::DEFAULT_DEBOUNCE_DELAY;

const LOG_LEVEL_PATTERN: &str = r"^(off|trace|debug|info|warn|error)$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            tls: TlsConfig {
                cert_path: String::from("cert.pem"),
                key_path: String::from("key.pem"),
                reload_on_update: true,
                debounce_delay: Some(DEFAULT_DEBOUNCE_DELAY.as_secs()),
            },
            http_server: HttpServerConfig {
                enabled: true,
                bind_address: String::from("0.0.0.0:8443"),
                threads: Some(available_parallelism().map_or(1, |n| n.get()) as u64),
                keep_alive: Some(60),
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`. A missing or corrupt file is an error;
    /// with `create` set the defaults are written first so the operator can
    /// edit them before the next start.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("created {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    /// Collects every problem instead of stopping at the first one.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut problems = Vec::new();

        if let Err(problem) = Self::validate_value("log_level", &self.log_level, LOG_LEVEL_PATTERN) {
            problems.push(problem);
        }
        if self.tls.cert_path.trim().is_empty() {
            problems.push(String::from("[tls] cert_path must not be empty"));
        }
        if self.tls.key_path.trim().is_empty() {
            problems.push(String::from("[tls] key_path must not be empty"));
        }
        if self.tls.reload_on_update && self.tls.debounce_delay == Some(0) {
            problems.push(String::from("[tls] debounce_delay must be at least 1 second when reload_on_update is enabled"));
        }
        if let Err(e) = self.http_server.bind_address.parse::<SocketAddr>() {
            problems.push(format!("[http_server] bind_address \"{}\" is invalid: {}", self.http_server.bind_address, e));
        }
        if self.http_server.threads == Some(0) {
            problems.push(String::from("[http_server] threads must be at least 1"));
        }

        match problems.is_empty() {
            true => Ok(()),
            false => Err(ConfigurationError::ValidationError(problems))
        }
    }

    pub fn validate_value(name: &str, value: &str, pattern: &str) -> Result<(), String> {
        let regex_check = Regex::new(pattern).map_err(|e| format!("{}: bad pattern: {}", name, e))?;
        match regex_check.is_match(value) {
            true => Ok(()),
            false => Err(format!("{} \"{}\" does not match \"{}\"", name, value, regex_check))
        }
    }
}
