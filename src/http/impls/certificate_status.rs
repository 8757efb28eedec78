use crate::http::structs::certificate_status::CertificateStatus;
use crate::ssl::structs::certificate_supplier::CertificateSupplier;

impl From<&CertificateSupplier> for CertificateStatus {
    fn from(supplier: &CertificateSupplier) -> Self {
        let bundle = supplier.current();
        CertificateStatus {
            cert_path: bundle.cert_path.clone(),
            key_path: bundle.key_path.clone(),
            loaded_at: bundle.loaded_at.to_rfc3339(),
            chain_length: bundle.chain_length(),
            reload_on_update: supplier.reload_on_update(),
            watching: supplier.is_watching(),
        }
    }
}
