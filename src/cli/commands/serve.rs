use crate::cli::parser::Commands;
use crate::config::{Config, StorageKind};
use crate::errors::{AppError, AppResult};
use crate::server::{LogServer, telemetry};
use std::net::SocketAddr;

/// Run the HTTP API until Ctrl-C.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind, port, memory } = cmd {
        let mut cfg = cfg.clone();
        if *memory {
            cfg.storage = StorageKind::Memory;
        }

        let addr = listen_addr(bind.as_deref().unwrap_or(&cfg.bind), *port)?;

        telemetry::init(&cfg.log_level);

        // a corrupt or unreadable data file aborts startup here
        let store = cfg.open_store()?;
        let server = LogServer::new(store);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async move {
            server
                .serve_with_shutdown(&addr.to_string(), shutdown_signal())
                .await
        })?;

        tracing::info!("time log API stopped");
    }

    Ok(())
}

fn listen_addr(bind: &str, port: Option<u16>) -> AppResult<SocketAddr> {
    let mut addr: SocketAddr = bind
        .parse()
        .map_err(|_| AppError::InvalidArgument(format!("invalid bind address '{bind}'")))?;

    if let Some(p) = port {
        addr.set_port(p);
    }

    Ok(addr)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        // no signal handling: keep serving
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
