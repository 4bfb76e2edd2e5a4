use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod handlers;
pub mod state;
mod views;

pub use config::Config;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::index_form))
        .route("/", post(handlers::index_submit))
        .route("/health", get(handlers::health))
        .route("/debug-env", get(handlers::debug_env))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{create_app, AppState, Config};
    pub use azp_core::{Error, Result, RewriteResult, SourceArticle};
}
