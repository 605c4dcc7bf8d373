use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;

pub fn projection_routes() -> Router {
    Router::new()
        // Projection entry points
        .route(
            "/api/projections/plan",
            post(handlers::run_plan_projection),
        )
        .route(
            "/api/projections/portfolio",
            post(handlers::run_portfolio_projection),
        )
        // Assumptions for client display
        .route("/api/reference", get(handlers::get_reference_data))
}
