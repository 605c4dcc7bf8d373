use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod api_conversion;
mod api_types;
mod error;
mod handlers;
mod routes;
mod validation;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = Router::new()
        .route("/", get(|| async { "Planvest API Server" }))
        .merge(routes::projection_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3001")
        .await
        .expect("failed to bind 0.0.0.0:3001");
    tracing::info!("listening on {}", listener.local_addr().expect("no local addr"));
    axum::serve(listener, app).await.expect("server error");
}
