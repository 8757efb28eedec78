use crate::common::structs::custom_error::CustomError;
use crate::ssl::structs::certificate_supplier::CertificateSupplier;
use log::info;
use rcgen::{CertificateParams, KeyPair};
use std::sync::Arc;
use std::time::Duration;

/// Long enough to fold a certificate and key written as two separate
/// operations into a single reload.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_secs(5);

pub fn create_server_config_with_supplier(
    supplier: Arc<CertificateSupplier>,
) -> Result<rustls::ServerConfig, rustls::Error> {
    let config = rustls::ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()?
        .with_no_client_auth()
        .with_cert_resolver(supplier);
    Ok(config)
}

/// Writes a self-signed certificate and key for `domains`. Development only.
pub fn create_selfsigned_certificate(
    domains: Vec<String>,
    cert_file: &str,
    key_file: &str,
) -> Result<(), CustomError> {
    let key_pair = KeyPair::generate()
        .map_err(|e| CustomError::new(&format!("unable to generate key pair: {}", e)))?;
    let cert = CertificateParams::new(domains)
        .and_then(|params| params.self_signed(&key_pair))
        .map_err(|e| CustomError::new(&format!("unable to generate certificate: {}", e)))?;
    std::fs::write(key_file, key_pair.serialize_pem())
        .map_err(|e| CustomError::new(&format!("the key file {} could not be written: {}", key_file, e)))?;
    info!("[CERTGEN] The key file {} has been generated", key_file);
    std::fs::write(cert_file, cert.pem())
        .map_err(|e| CustomError::new(&format!("the cert file {} could not be written: {}", cert_file, e)))?;
    info!("[CERTGEN] The cert file {} has been generated", cert_file);
    Ok(())
}
