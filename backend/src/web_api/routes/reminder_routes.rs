use axum::{Router, middleware, routing::get};
use crate::{app_state::SharedState, authentication::auth::auth_middleware, reminder_controller::ReminderController};
use super::API_PREFIX;

pub const ROUTER_PATH: &str = "/reminders";

pub fn get_router(app_state: SharedState) -> Router {
    let base = format!("{}{}", API_PREFIX, ROUTER_PATH);

    Router::new()
        .route(base.as_str(), get(ReminderController::get_all).post(ReminderController::add))
        .route(format!("{}/analytics", base).as_str(), get(ReminderController::analytics))
        .route(
            format!("{}/:id", base).as_str(),
            get(ReminderController::get).put(ReminderController::edit).delete(ReminderController::delete),
        )
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
