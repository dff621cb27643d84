use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/filters", get(handlers::get_filters))
        .route("/api/charts/line", post(handlers::line_chart))
        .route("/api/charts/bar", post(handlers::bar_chart))
        .with_state(state)
}
