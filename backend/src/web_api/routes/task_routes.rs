use axum::{Router, middleware, routing::{get, post}};
use crate::{app_state::SharedState, authentication::auth::auth_middleware, task_controller::TaskController};
use super::API_PREFIX;

pub const ROUTER_PATH: &str = "/tasks";

pub fn get_router(app_state: SharedState) -> Router {
    let base = format!("{}{}", API_PREFIX, ROUTER_PATH);

    Router::new()
        .route(base.as_str(), get(TaskController::get_all).post(TaskController::add))
        .route(format!("{}/analytics", base).as_str(), get(TaskController::analytics))
        .route(
            format!("{}/:id", base).as_str(),
            get(TaskController::get).put(TaskController::edit).delete(TaskController::delete),
        )
        .route(format!("{}/:id/reschedule-suggestion", base).as_str(), get(TaskController::suggest_reschedule))
        .route(format!("{}/:id/reschedule", base).as_str(), post(TaskController::reschedule))
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
