use axum::{Extension, Json, extract::{Path, State}, http::StatusCode};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    analytics::reminder_analytics::{self, ReminderAnalytics},
    app_state::SharedState,
    delete_response::DeleteResponse,
    reminder::Reminder,
    reminder_create_request::ReminderCreateRequest,
    reminder_update_request::ReminderUpdateRequest,
    user::User,
    web_api::api_error::ApiError,
};

pub struct ReminderController {}

impl ReminderController {
    pub async fn get_all(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
    ) -> Result<Json<Vec<Reminder>>, ApiError> {
        Ok(Json(state.data_context.list_reminders_for_user(user.id)?))
    }

    pub async fn add(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Json(mut body): Json<ReminderCreateRequest>,
    ) -> Result<(StatusCode, Json<Reminder>), ApiError> {
        let title = body.title.take().map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        let time = body.time.take().filter(|t| !t.trim().is_empty());

        let (Some(title), Some(date), Some(time)) = (title, body.date, time) else {
            return Err(ApiError::BadRequest("Please add title, date, and time".to_string()));
        };

        let reminder = Reminder::new(user.id, title, date, time, body);
        state.data_context.create_reminder(&reminder)?;
        Ok((StatusCode::CREATED, Json(reminder)))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<Reminder>, ApiError> {
        owned_reminder(&state, &user, id).map(Json)
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
        Json(body): Json<ReminderUpdateRequest>,
    ) -> Result<Json<Reminder>, ApiError> {
        let reminder = owned_reminder(&state, &user, id)?.edit(body);
        state.data_context.update_reminder(&reminder)?;
        Ok(Json(reminder))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<DeleteResponse>, ApiError> {
        owned_reminder(&state, &user, id)?;
        if !state.data_context.delete_reminder(id)? {
            return Err(ApiError::NotFound("Reminder not found".to_string()));
        }
        Ok(Json(DeleteResponse { id }))
    }

    pub async fn analytics(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
    ) -> Result<Json<ReminderAnalytics>, ApiError> {
        let reminders = state.data_context.list_reminders_for_user(user.id)?;
        Ok(Json(reminder_analytics::summarize(&reminders, Utc::now())))
    }
}

fn owned_reminder(state: &SharedState, user: &User, id: Uuid) -> Result<Reminder, ApiError> {
    let reminder = state
        .data_context
        .get_reminder(id)?
        .ok_or_else(|| ApiError::NotFound("Reminder not found".to_string()))?;
    if reminder.user_id != user.id {
        return Err(ApiError::Unauthorized("Not authorized".to_string()));
    }
    Ok(reminder)
}
