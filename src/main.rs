use std::{str::FromStr, sync::Arc};

use axum::{Router, middleware::from_fn};
use dotenv::dotenv;
use tracing::{info, level_filters::LevelFilter, warn};
use tower_http::cors::CorsLayer;
use tracing_subscriber::FmtSubscriber;

use crate::{
    category::handlers::category_routes,
    common::{app_state::AppState, server_error::ServerError},
    config::config::CONFIG,
    health::handlers::health_routes,
    mw::request_mw::request_mw,
    question::handlers::question_routes,
    quiz::handlers::quiz_routes,
};

mod category;
mod common;
mod config;
mod health;
mod mw;
mod question;
mod quiz;


#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    let level = LevelFilter::from_str(&CONFIG.log_level).unwrap_or_else(|_| {
        eprintln!("Unknown log level {}, using debug", CONFIG.log_level);
        LevelFilter::DEBUG
    });
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global tracing");

    // Initialize state
    let state = AppState::from_connection_string(&CONFIG.database_url)
        .await
        .unwrap_or_else(|e| panic!("{}", e));

    let app = build_router(state);

    // Initialize webserver
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", CONFIG.server.address, CONFIG.server.port))
            .await
            .unwrap_or_else(|e| panic!("Failed to bind listener: {}", e));

    match listener.local_addr() {
        Ok(addr) => info!("Server listening on address: {}", addr),
        Err(e) => warn!("Server listening, but local address is unknown: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        panic!("Server stopped unexpectedly: {}", e);
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(category_routes(state.clone()))
        .merge(question_routes(state.clone()))
        .merge(quiz_routes(state.clone()))
        .merge(health_routes(state))
        .fallback(route_not_found)
        .layer(CorsLayer::permissive())
        .layer(from_fn(request_mw))
}

async fn route_not_found() -> ServerError {
    ServerError::NotFound("Resource not found".into())
}
