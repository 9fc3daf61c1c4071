use axum::{Router, routing::get};
use crate::health_controller::HealthController;
use super::API_PREFIX;

pub const ROUTER_PATH: &str = "/health";

pub fn get_router() -> Router {
    Router::new()
        .route(format!("{}{}", API_PREFIX, ROUTER_PATH).as_str(), get(HealthController::get))
}
