pub mod health;
pub mod status;

use axum::{Router, routing::get};
use contact_status::probe::{ReqwestTransport, StatusChecker};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub checker: StatusChecker,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status::status_page))
        .route("/health", get(health::health))
        .with_state(state)
}

pub fn default_state() -> AppState {
    AppState {
        checker: StatusChecker::new(Arc::new(ReqwestTransport::new())),
    }
}
