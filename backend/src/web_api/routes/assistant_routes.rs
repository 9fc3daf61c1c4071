use axum::{Router, middleware, routing::post};
use crate::{app_state::SharedState, authentication::auth::auth_middleware, assistant_controller::AssistantController};
use super::API_PREFIX;

pub const ROUTER_PATH: &str = "/assistant";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(format!("{}{}/messages", API_PREFIX, ROUTER_PATH).as_str(), post(AssistantController::message))
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
