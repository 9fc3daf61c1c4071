pub mod health_routes;
pub mod user_routes;
pub mod task_routes;
pub mod reminder_routes;
pub mod assistant_routes;

use axum::Router;

use crate::app_state::SharedState;

pub const API_PREFIX: &str = "/api";

pub fn map_routes(app_state: SharedState) -> Router {
    Router::new()
        .merge(health_routes::get_router())
        .merge(user_routes::get_router(app_state.clone()))
        .merge(task_routes::get_router(app_state.clone()))
        .merge(reminder_routes::get_router(app_state.clone()))
        .merge(assistant_routes::get_router(app_state))
}
