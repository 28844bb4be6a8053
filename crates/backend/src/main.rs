pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::domain::a001_locker_master::repository::LockerStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;

    let seed_path = shared::config::get_seed_path(&config);
    let store = LockerStore::load(&seed_path)
        .map_err(|e| anyhow::anyhow!("seed load failed: {e}"))?;
    shared::logger::log(
        "startup",
        &format!(
            "Loaded {} locker centers and {} customers",
            store.center_count(),
            store.customer_count()
        ),
    );

    let app = routes::configure_routes(Arc::new(store));

    let addr = config.server.socket_addr()?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
