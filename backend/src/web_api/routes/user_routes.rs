use axum::{Router, middleware, routing::{get, post}};
use crate::{app_state::SharedState, authentication::auth::auth_middleware, authentication_controller::AuthenticationController, user_controller::UserController};
use super::API_PREFIX;

pub const ROUTER_PATH: &str = "/users";

pub fn get_router(app_state: SharedState) -> Router {
    let base = format!("{}{}", API_PREFIX, ROUTER_PATH);

    let public = Router::new()
        .route(base.as_str(), post(AuthenticationController::register))
        .route(format!("{}/login", base).as_str(), post(AuthenticationController::login))
        .with_state(app_state.clone());

    let protected = Router::new()
        .route(format!("{}/me", base).as_str(), get(UserController::get_me).put(UserController::edit_me))
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state);

    public.merge(protected)
}
