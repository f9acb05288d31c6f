use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, error, types::PkceToken};

/// Runs the local HTTP server that receives the Spotify OAuth callback.
///
/// The shared slot is filled by the callback handler once Spotify
/// redirects back with an authorization code; the auth flow polls it.
pub async fn start_api_server(token_slot: Arc<Mutex<Option<PkceToken>>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(token_slot)));

    let addr_str = config::server_addr();
    let addr = match SocketAddr::from_str(&addr_str) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address {}: {}", addr_str, e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
