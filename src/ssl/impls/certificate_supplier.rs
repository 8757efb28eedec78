use crate::config::structs::tls_config::TlsConfig;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::DEFAULT_DEBOUNCE_DELAY;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_supplier::CertificateSupplier;
use crate::ssl::structs::change_watcher::ChangeWatcher;
use arc_swap::ArcSwap;
use log::{debug, info};
use parking_lot::Mutex;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

impl std::fmt::Debug for CertificateSupplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateSupplier")
            .field("paths", &self.paths)
            .field("reload_on_update", &self.reload_on_update)
            .field("loaded_at", &self.current.load().loaded_at)
            .field("watching", &self.is_watching())
            .finish()
    }
}

impl CertificateSupplier {
    pub fn new(
        cert_path: &str,
        key_path: &str,
        reload_on_update: bool,
    ) -> Result<Arc<CertificateSupplier>, CertificateError> {
        Self::with_debounce_delay(cert_path, key_path, reload_on_update, DEFAULT_DEBOUNCE_DELAY)
    }

    pub fn from_config(config: &TlsConfig) -> Result<Arc<CertificateSupplier>, CertificateError> {
        Self::with_debounce_delay(
            &config.cert_path,
            &config.key_path,
            config.reload_on_update,
            config.debounce_duration(),
        )
    }

    /// Loads the pair synchronously and, when `reload_on_update` is set,
    /// starts a watcher loop on the current tokio runtime. Any failure is
    /// fatal: no supplier is returned without a certificate, and none is
    /// returned without its watcher when reloading was requested.
    pub fn with_debounce_delay(
        cert_path: &str,
        key_path: &str,
        reload_on_update: bool,
        debounce_delay: Duration,
    ) -> Result<Arc<CertificateSupplier>, CertificateError> {
        // Trackers read their times before the first load, so a rotation
        // racing the load is still picked up by the watch loop.
        let watcher = if reload_on_update {
            Some(Self::create_watcher(cert_path, key_path, debounce_delay)?)
        } else {
            None
        };
        let bundle = Self::load_bundle(cert_path, key_path)?;
        info!(
            "[CERTIFICATE] Loaded certificate '{}' ({} certificate(s) in chain)",
            cert_path,
            bundle.chain_length()
        );
        let supplier = Arc::new(CertificateSupplier {
            current: ArcSwap::from_pointee(bundle),
            paths: CertificatePaths {
                cert_path: cert_path.to_string(),
                key_path: key_path.to_string(),
            },
            reload_on_update,
            watcher: Mutex::new(None),
            watch_task: Mutex::new(None),
        });
        if let Some((runtime, watcher)) = watcher {
            supplier.start_watcher(runtime, watcher);
        }
        Ok(supplier)
    }

    /// The certificate for the next handshake. Lock-free; never fails.
    pub fn get_certificate(&self) -> Arc<CertifiedKey> {
        Arc::clone(&self.current.load().certified_key)
    }

    pub fn current(&self) -> Arc<CertificateBundle> {
        self.current.load_full()
    }

    pub fn paths(&self) -> &CertificatePaths {
        &self.paths
    }

    pub fn reload_on_update(&self) -> bool {
        self.reload_on_update
    }

    /// Re-reads both files and publishes the result in one store. On error
    /// the previously published certificate stays in place. While watching,
    /// a successful reload also advances the watcher's modification times, so
    /// the files it just read do not schedule a second reload.
    pub fn reload(&self) -> Result<(), CertificateError> {
        let watcher = self.watcher.lock().clone();
        match watcher {
            Some(watcher) => watcher.reload_with(|| self.publish()),
            None => self.publish(),
        }
    }

    pub fn is_watching(&self) -> bool {
        self.watch_task
            .lock()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    pub fn close(&self) {
        if let Some(watcher) = self.watcher.lock().take() {
            watcher.close();
            info!("[CERTIFICATE] Stopped watching '{}'", self.paths.cert_path);
        }
    }

    fn load_bundle(cert_path: &str, key_path: &str) -> Result<CertificateBundle, CertificateError> {
        debug!("[CERTIFICATE] Storing cert: '{}', key: '{}'", cert_path, key_path);
        CertificateBundle::load_from_files(cert_path, key_path)
    }

    fn publish(&self) -> Result<(), CertificateError> {
        let bundle = Self::load_bundle(&self.paths.cert_path, &self.paths.key_path)?;
        let loaded_at = bundle.loaded_at;
        self.current.store(Arc::new(bundle));
        info!(
            "[CERTIFICATE] Reloaded certificate '{}' at {}",
            self.paths.cert_path,
            loaded_at.to_rfc3339()
        );
        Ok(())
    }

    fn create_watcher(
        cert_path: &str,
        key_path: &str,
        debounce_delay: Duration,
    ) -> Result<(Handle, Arc<ChangeWatcher>), CertificateError> {
        let runtime = Handle::try_current().map_err(|e| {
            CertificateError::WatchSetupError(format!("no tokio runtime for the watch loop: {}", e))
        })?;
        let watcher = ChangeWatcher::new(&[cert_path, key_path], debounce_delay)?;
        Ok((runtime, Arc::new(watcher)))
    }

    fn start_watcher(self: &Arc<Self>, runtime: Handle, watcher: Arc<ChangeWatcher>) {
        // Weak, so the loop never keeps a dropped supplier (and its watcher) alive.
        let supplier = Arc::downgrade(self);
        let loop_watcher = Arc::clone(&watcher);
        let task = runtime.spawn(async move {
            loop_watcher
                .watch(move || match supplier.upgrade() {
                    Some(supplier) => supplier.publish(),
                    None => Ok(()),
                })
                .await;
        });
        *self.watcher.lock() = Some(watcher);
        *self.watch_task.lock() = Some(task);
    }
}

impl ResolvesServerCert for CertificateSupplier {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        Some(self.get_certificate())
    }
}

impl Drop for CertificateSupplier {
    fn drop(&mut self) {
        self.close();
    }
}
