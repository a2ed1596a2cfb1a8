use std::net::SocketAddr;
use std::sync::Arc;

use crate::data::database::GameDatabase;

pub mod api;
pub mod routes;

pub use routes::create_router;

pub async fn run_server(bind: SocketAddr, db: Arc<GameDatabase>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        weapons = db.weapon_count(),
        "mhrb server listening"
    );
    axum::serve(listener, create_router(db)).await
}
