use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::change_watcher::ChangeWatcher;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct CertificateSupplier {
    pub(crate) current: ArcSwap<CertificateBundle>,
    pub(crate) paths: CertificatePaths,
    pub(crate) reload_on_update: bool,
    pub(crate) watcher: Mutex<Option<Arc<ChangeWatcher>>>,
    pub(crate) watch_task: Mutex<Option<JoinHandle<()>>>,
}
