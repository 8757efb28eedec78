#![allow(dead_code)]
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, ClientConnection, Connection, DigitallySignedStruct, ServerConfig, ServerConnection, SignatureScheme};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// A freshly generated self-signed certificate and its key, in PEM and DER.
pub struct TestPair {
    pub cert_pem: String,
    pub key_pem: String,
    pub cert_der: CertificateDer<'static>,
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

pub fn generate_pair() -> TestPair {
    let key_pair = rcgen::KeyPair::generate().expect("Failed to generate key pair");
    let cert = rcgen::CertificateParams::new(vec!["localhost".to_string()])
        .expect("Invalid certificate params")
        .self_signed(&key_pair)
        .expect("Failed to sign certificate");
    TestPair {
        cert_pem: cert.pem(),
        key_pem: key_pair.serialize_pem(),
        cert_der: cert.der().clone(),
    }
}

pub fn cert_path(dir: &Path) -> PathBuf {
    dir.join("cert.pem")
}

pub fn key_path(dir: &Path) -> PathBuf {
    dir.join("key.pem")
}

/// Writes `pair` as `cert.pem` and `key.pem` in `dir` and returns both paths.
pub fn write_pair(dir: &Path, pair: &TestPair) -> (String, String) {
    write_cert(dir, pair);
    write_key(dir, pair);
    paths(dir)
}

pub fn write_cert(dir: &Path, pair: &TestPair) {
    std::fs::write(cert_path(dir), &pair.cert_pem).expect("Failed to write certificate");
}

pub fn write_key(dir: &Path, pair: &TestPair) {
    std::fs::write(key_path(dir), &pair.key_pem).expect("Failed to write key");
}

pub fn paths(dir: &Path) -> (String, String) {
    (
        cert_path(dir).to_str().expect("non UTF-8 temp path").to_string(),
        key_path(dir).to_str().expect("non UTF-8 temp path").to_string(),
    )
}

/// Polls `condition` until it holds or `timeout` passes.
pub async fn wait_for<F>(timeout: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    condition()
}

pub async fn wait_for_async<F, Fut>(timeout: Duration, mut condition: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    condition().await
}

#[derive(Debug)]
pub struct AcceptAnyServerCert(Arc<CryptoProvider>);

impl ServerCertVerifier for AcceptAnyServerCert {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls12_signature(message, cert, dss, &self.0.signature_verification_algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls13_signature(message, cert, dss, &self.0.signature_verification_algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.0.signature_verification_algorithms.supported_schemes()
    }
}

/// Client that completes a handshake with any server certificate, so tests
/// can inspect which certificate was presented.
pub fn create_test_client_config() -> TestResult<Arc<ClientConfig>> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = ClientConfig::builder_with_provider(provider.clone())
        .with_safe_default_protocol_versions()?
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyServerCert(provider)))
        .with_no_client_auth();
    Ok(Arc::new(config))
}

fn transfer(from: &mut Connection, to: &mut Connection) -> TestResult<()> {
    let mut buffer = Vec::new();
    while from.wants_write() {
        from.write_tls(&mut buffer)?;
    }
    let mut pending = buffer.as_slice();
    while !pending.is_empty() {
        to.read_tls(&mut pending)?;
        to.process_new_packets()?;
    }
    Ok(())
}

/// Runs a full TLS handshake in memory and returns the end-entity
/// certificate the client received.
pub fn handshake(server_config: Arc<ServerConfig>) -> TestResult<CertificateDer<'static>> {
    let server_name = ServerName::try_from("localhost")?;
    let mut client = Connection::from(ClientConnection::new(create_test_client_config()?, server_name)?);
    let mut server = Connection::from(ServerConnection::new(server_config)?);
    for _ in 0..10 {
        if !client.is_handshaking() && !server.is_handshaking() {
            break;
        }
        transfer(&mut client, &mut server)?;
        transfer(&mut server, &mut client)?;
    }
    if client.is_handshaking() || server.is_handshaking() {
        return Err("handshake did not complete".into());
    }
    client
        .peer_certificates()
        .and_then(|certs| certs.first())
        .cloned()
        .ok_or_else(|| "no server certificate presented".into())
}
