use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::load_failure::LoadFailure;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer
};
use rustls::sign::CertifiedKey;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("certs_count", &self.certified_key.cert.len())
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CertificateBundle {
    /// Parses a PEM certificate chain and private key into a bundle ready for
    /// rustls. Fails if either file is unreadable, the chain is empty, or the
    /// key does not belong to the leaf certificate.
    pub fn load_from_files(
        cert_path: &str,
        key_path: &str,
    ) -> Result<CertificateBundle, CertificateError> {
        let certs_file = File::open(cert_path)
            .map_err(|e| CertificateError::load(cert_path, LoadFailure::CertFileNotFound(format!("{}: {}", cert_path, e))))?;
        let mut certs_reader = BufReader::new(certs_file);
        let tls_certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut certs_reader)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::load(cert_path, LoadFailure::CertParseError(e.to_string())))?;
        if tls_certs.is_empty() {
            return Err(CertificateError::load(
                cert_path,
                LoadFailure::CertParseError("No certificates found in file".to_string()),
            ));
        }
        let tls_key = Self::parse_private_key(cert_path, key_path)?;
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&tls_key)
            .map_err(|e| CertificateError::load(cert_path, LoadFailure::CertifiedKeyError(e.to_string())))?;
        let certified_key = CertifiedKey::new(tls_certs, signing_key);
        match certified_key.keys_match() {
            // Unknown: the signing key cannot expose its public half, nothing to compare.
            Ok(()) | Err(rustls::Error::InconsistentKeys(rustls::InconsistentKeys::Unknown)) => {}
            Err(e) => {
                return Err(CertificateError::load(cert_path, LoadFailure::KeyMismatch(e.to_string())));
            }
        }
        Ok(CertificateBundle {
            certified_key: Arc::new(certified_key),
            loaded_at: chrono::Utc::now(),
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        })
    }

    pub fn chain_length(&self) -> usize {
        self.certified_key.cert.len()
    }

    pub fn end_entity(&self) -> Option<&CertificateDer<'static>> {
        self.certified_key.cert.first()
    }

    fn parse_private_key(
        cert_path: &str,
        key_path: &str,
    ) -> Result<PrivateKeyDer<'static>, CertificateError> {
        let key_file = File::open(key_path)
            .map_err(|e| CertificateError::load(cert_path, LoadFailure::KeyFileNotFound(format!("{}: {}", key_path, e))))?;
        let mut key_reader = BufReader::new(key_file);
        rustls_pemfile::private_key(&mut key_reader)
            .map_err(|e| CertificateError::load(cert_path, LoadFailure::KeyParseError(e.to_string())))?
            .ok_or_else(|| CertificateError::load(cert_path, LoadFailure::NoKeyFound))
    }
}
