use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/widget", get(handlers::get_widget))
        .route("/api/chart", get(handlers::get_chart))
        .route("/api/activity/solo", post(handlers::fetch_solo))
        .route("/api/activity/group", post(handlers::fetch_group))
        .route("/api/joke", post(handlers::tell_joke))
        .with_state(state)
}
