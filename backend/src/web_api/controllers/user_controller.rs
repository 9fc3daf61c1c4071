use axum::{Extension, Json, extract::State};

use crate::{app_state::SharedState, web_api::api_error::ApiError, user::User, user_edit_request::UserEditRequest, user_get_response::UserGetResponse};

pub struct UserController {}

impl UserController {
    pub async fn get_me(Extension(user): Extension<User>) -> Json<UserGetResponse> {
        Json(user.to_get_dto())
    }

    pub async fn edit_me(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Json(body): Json<UserEditRequest>,
    ) -> Result<Json<UserGetResponse>, ApiError> {
        if let Some(preferences) = &body.preferences {
            preferences.validate().map_err(ApiError::BadRequest)?;
        }

        let edited = user.edit(body)?;
        if !state.data_context.edit_user(&edited)? {
            return Err(ApiError::NotFound("User not found".to_string()));
        }
        Ok(Json(edited.to_get_dto()))
    }
}
