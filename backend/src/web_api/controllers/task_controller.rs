use axum::{Extension, Json, body::Bytes, extract::{Path, Query, State}, http::StatusCode};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::{
    analytics::task_analytics::{self, TaskAnalytics},
    app_state::SharedState,
    delete_response::DeleteResponse,
    scheduling::{clock, reschedule_advisor},
    task::Task,
    task_create_request::TaskCreateRequest,
    task_reschedule_request::{RescheduleQuery, TaskRescheduleRequest},
    task_reschedule_response::{RescheduleSuggestionResponse, TaskRescheduleResponse},
    task_update_request::TaskUpdateRequest,
    user::User,
    web_api::api_error::ApiError,
};

const MANUAL_RESCHEDULE_REASON: &str = "Rescheduled manually";

pub struct TaskController {}

impl TaskController {
    pub async fn get_all(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
    ) -> Result<Json<Vec<Task>>, ApiError> {
        Ok(Json(state.data_context.list_tasks_for_user(user.id)?))
    }

    pub async fn add(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Json(body): Json<TaskCreateRequest>,
    ) -> Result<(StatusCode, Json<Task>), ApiError> {
        if body.title.trim().is_empty() {
            return Err(ApiError::BadRequest("Please add a title".to_string()));
        }
        let task = Task::new(user.id, body);
        state.data_context.create_task(&task)?;
        Ok((StatusCode::CREATED, Json(task)))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<Task>, ApiError> {
        owned_task(&state, &user, id).map(Json)
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
        Json(body): Json<TaskUpdateRequest>,
    ) -> Result<Json<Task>, ApiError> {
        if body.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ApiError::BadRequest("Please add a title".to_string()));
        }
        let task = owned_task(&state, &user, id)?.edit(body);
        state.data_context.update_task(&task)?;
        Ok(Json(task))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<DeleteResponse>, ApiError> {
        owned_task(&state, &user, id)?;
        if !state.data_context.delete_task(id)? {
            return Err(ApiError::NotFound("Task not found".to_string()));
        }
        Ok(Json(DeleteResponse { id }))
    }

    pub async fn analytics(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
    ) -> Result<Json<TaskAnalytics>, ApiError> {
        let tasks = state.data_context.list_tasks_for_user(user.id)?;
        Ok(Json(task_analytics::summarize(&tasks)))
    }

    /// Advisor's pick for the task, computed over the caller's current tasks. Nothing is saved.
    pub async fn suggest_reschedule(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
        Query(query): Query<RescheduleQuery>,
    ) -> Result<Json<RescheduleSuggestionResponse>, ApiError> {
        owned_task(&state, &user, id)?;
        let tasks = state.data_context.list_tasks_for_user(user.id)?;
        let suggestion = reschedule_advisor::suggest(id, &tasks, &clock::caller_now(query.utc_offset_minutes)).to_utc();

        Ok(Json(RescheduleSuggestionResponse {
            task_id: id,
            suggested_due_date: suggestion.suggested_due_date,
            reason: suggestion.reason,
        }))
    }

    /// Moves the task to the advisor's pick, or to an explicit date when the body has one.
    pub async fn reschedule(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Path(id): Path<Uuid>,
        Query(query): Query<RescheduleQuery>,
        body: Bytes,
    ) -> Result<Json<TaskRescheduleResponse>, ApiError> {
        let body = parse_reschedule_body(&body)?;
        let mut task = owned_task(&state, &user, id)?;

        let (due_date, reason) = match body.due_date {
            Some(due_date) => (
                due_date,
                body.reason.unwrap_or_else(|| MANUAL_RESCHEDULE_REASON.to_string()),
            ),
            None => {
                let tasks = state.data_context.list_tasks_for_user(user.id)?;
                let suggestion = reschedule_advisor::suggest(id, &tasks, &clock::caller_now(query.utc_offset_minutes)).to_utc();
                (suggestion.suggested_due_date, suggestion.reason)
            }
        };

        task.reschedule(due_date, reason.clone(), Utc::now());
        state.data_context.update_task(&task)?;
        info!(task_id = %id, due = %due_date, "task rescheduled");

        Ok(Json(TaskRescheduleResponse {
            task,
            suggested_due_date: due_date,
            reason,
        }))
    }
}

/// An empty body asks for the advisor's pick; anything else must be a valid request.
fn parse_reschedule_body(body: &[u8]) -> Result<TaskRescheduleRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(TaskRescheduleRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("Invalid reschedule request: {e}")))
}

/// Loads a task, refusing tasks that belong to someone else.
fn owned_task(state: &SharedState, user: &User, id: Uuid) -> Result<Task, ApiError> {
    let task = state
        .data_context
        .get_task(id)?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;
    if task.user_id != user.id {
        return Err(ApiError::Unauthorized("Not authorized".to_string()));
    }
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_means_advisor() {
        for body in [&b""[..], b"  \n"] {
            let request = parse_reschedule_body(body).unwrap();
            assert!(request.due_date.is_none());
            assert!(request.reason.is_none());
        }
        assert!(parse_reschedule_body(b"{}").unwrap().due_date.is_none());
    }

    #[test]
    fn malformed_body_is_bad_request() {
        for body in [&br#"{"dueDate":"next tuesday"}"#[..], b"{", b"[1]"] {
            let error = parse_reschedule_body(body).unwrap_err();
            assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        }
    }
}
