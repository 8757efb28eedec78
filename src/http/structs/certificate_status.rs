use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, Serialize, Deserialize)]
pub struct CertificateStatus {
    pub cert_path: String,
    pub key_path: String,
    pub loaded_at: String,
    pub chain_length: usize,
    pub reload_on_update: bool,
    pub watching: bool,
}
