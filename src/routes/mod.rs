use crate::config::Config;
use crate::lobby::actor_client::LobbyClient;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod error;
mod health;
mod metrics;
mod round;

pub fn create_router(config: &Config) -> Router<Arc<LobbyClient>> {
    Router::new()
        .route("/health", get(health::get))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/round", post(round::start))
        .route(
            "/round/:nickname",
            get(round::status).delete(round::abandon),
        )
        .route("/question", post(round::ask))
        .route("/guess", post(round::guess))
        .layer(if config.allow_cors {
            log::info!("CorsLayer Permissive");
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
        })
}
