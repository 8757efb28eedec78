use std::net::SocketAddr;
use std::process::exit;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use cert_reloader::common::common::setup_logging;
use cert_reloader::config::structs::configuration::Configuration;
use cert_reloader::http::http::http_service;
use cert_reloader::ssl::ssl::create_selfsigned_certificate;
use cert_reloader::ssl::structs::certificate_supplier::CertificateSupplier;
use cert_reloader::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.create_selfsigned {
        let mut domains = vec![String::from("localhost")];
        if args.selfsigned_domain != "localhost" {
            domains.push(args.selfsigned_domain.clone());
        }
        if let Err(e) = create_selfsigned_certificate(domains, &args.selfsigned_certfile, &args.selfsigned_keyfile) {
            eprintln!("[CERTGEN] {}", e);
            exit(1);
        }
        println!("[CERTGEN] The files {} and {} have been generated, use them only for development reasons", args.selfsigned_keyfile, args.selfsigned_certfile);
        exit(0);
    }

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{}", e);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let supplier = match CertificateSupplier::from_config(&config.tls) {
                Ok(supplier) => supplier,
                Err(e) => {
                    error!("[BOOT] {}", e);
                    exit(1);
                }
            };

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(e) => {
                    error!("[BOOT] Unable to install the shutdown handler: {}", e);
                    exit(1);
                }
            };

            let mut server_handle = None;
            if config.http_server.enabled {
                let address: SocketAddr = match config.http_server.bind_address.parse() {
                    Ok(address) => address,
                    Err(e) => {
                        error!("[BOOT] Invalid bind address {}: {}", config.http_server.bind_address, e);
                        exit(1);
                    }
                };
                let (handle, future) = match http_service(address, supplier.clone(), &config.http_server) {
                    Ok(server) => server,
                    Err(e) => {
                        error!("[HTTP] {}", e);
                        exit(1);
                    }
                };
                tokio::spawn(async move {
                    if let Err(e) = future.await {
                        error!("[HTTP] Server stopped with an error: {}", e);
                    }
                });
                server_handle = Some(handle);
            }

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            if let Some(handle) = server_handle {
                handle.stop(true).await;
            }
            supplier.close();
            info!("Server shutting down completed");
            Ok(())
        })
}
