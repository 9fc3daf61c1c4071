use axum::{Json, extract::State, http::StatusCode};
use tracing::info;

use crate::{app_state::SharedState, authentication::auth, web_api::api_error::ApiError, login_request::LoginRequest, login_response::LoginResponse, user::User, user_add_request::UserAddRequest};

pub struct AuthenticationController {}

impl AuthenticationController {
    pub async fn register(
        State(state): State<SharedState>,
        Json(body): Json<UserAddRequest>,
    ) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
        if [&body.name, &body.email, &body.password].iter().any(|f| f.trim().is_empty()) {
            return Err(ApiError::BadRequest("Please include all fields".to_string()));
        }

        let user = User::new(body)?;
        state.data_context.create_user(&user)?;
        info!(email = %user.email, "registered user");

        Ok((StatusCode::CREATED, Json(auth::session_for(&user, &state.settings)?)))
    }

    pub async fn login(
        State(state): State<SharedState>,
        Json(payload): Json<LoginRequest>,
    ) -> Result<Json<LoginResponse>, ApiError> {
        auth::login(&state, payload).map(Json)
    }
}
