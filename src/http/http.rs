use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{error, info};
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::http::structs::certificate_reload_result::CertificateReloadResult;
use crate::http::structs::certificate_status::CertificateStatus;
use crate::ssl::ssl::create_server_config_with_supplier;
use crate::ssl::structs::certificate_supplier::CertificateSupplier;

pub fn http_service_routes(data: Arc<CertificateSupplier>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/").route(web::get().to(http_service_root)));
        cfg.service(web::resource("/certificate").route(web::get().to(http_service_certificate_status)));
        cfg.service(web::resource("/certificate/reload").route(web::post().to(http_service_certificate_reload)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Builds the HTTPS listener. Certificates are resolved per handshake by
/// `supplier`, so a reload needs no listener restart. The returned future
/// borrows nothing from `config` and can be spawned.
pub fn http_service(
    addr: SocketAddr,
    supplier: Arc<CertificateSupplier>,
    config: &HttpServerConfig,
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>> + use<>), CustomError>
{
    info!("[HTTP] Starting server listener with SSL on {}", addr);
    let tls_config = create_server_config_with_supplier(supplier.clone())
        .map_err(|e| CustomError::new(&format!("unable to build TLS configuration: {}", e)))?;

    let threads = config.worker_threads();
    let data = supplier;
    let mut server = HttpServer::new(move || {
        App::new()
            .configure(http_service_routes(data.clone()))
    })
        .workers(threads);
    if let Some(keep_alive) = config.keep_alive {
        server = server.keep_alive(Duration::from_secs(keep_alive));
    }
    let server = server
        .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
        .map_err(|e| CustomError::new(&format!("unable to bind {}: {}", addr, e)))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_root() -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(format!("{} {}\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_certificate_status(data: Data<Arc<CertificateSupplier>>) -> HttpResponse
{
    let status = CertificateStatus::from(data.get_ref().as_ref());
    HttpResponse::Ok().content_type(ContentType::json()).json(status)
}

/// A failed reload leaves the published certificate untouched.
#[tracing::instrument(level = "debug")]
pub async fn http_service_certificate_reload(data: Data<Arc<CertificateSupplier>>) -> HttpResponse
{
    match data.reload() {
        Ok(()) => {
            HttpResponse::Ok().content_type(ContentType::json()).json(CertificateReloadResult::ok(data.current().loaded_at))
        }
        Err(e) => {
            error!("[HTTP] Manual certificate reload failed: {}", e);
            HttpResponse::Ok().content_type(ContentType::json()).json(CertificateReloadResult::failed(&e))
        }
    }
}

pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(format!("unknown route {}\n", request.path()))
}
