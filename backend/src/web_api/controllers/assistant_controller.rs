use axum::{Extension, Json, extract::State};
use chrono::Utc;
use tracing::info;

use crate::{
    app_state::SharedState,
    assistant::task_assistant,
    assistant_message_request::AssistantMessageRequest,
    assistant_message_response::AssistantMessageResponse,
    scheduling::clock,
    user::User,
    web_api::api_error::ApiError,
};

pub struct AssistantController {}

impl AssistantController {
    /// Answers a chat message. A reply that names a task to move is applied before returning.
    pub async fn message(
        State(state): State<SharedState>,
        Extension(user): Extension<User>,
        Json(body): Json<AssistantMessageRequest>,
    ) -> Result<Json<AssistantMessageResponse>, ApiError> {
        if body.message.trim().is_empty() {
            return Err(ApiError::BadRequest("Please add a message".to_string()));
        }

        let tasks = state.data_context.list_tasks_for_user(user.id)?;
        let reply = task_assistant::respond(&body.message, &tasks, &clock::caller_now(body.utc_offset_minutes));

        let rescheduled = match reply.reschedule {
            Some(planned) => {
                let suggestion = planned.suggestion.to_utc();
                match tasks.into_iter().find(|t| t.id == planned.task_id) {
                    Some(mut task) => {
                        task.reschedule(suggestion.suggested_due_date, suggestion.reason, Utc::now());
                        state.data_context.update_task(&task)?;
                        info!(task_id = %task.id, "assistant rescheduled task");
                        Some(task)
                    }
                    None => None,
                }
            }
            None => None,
        };

        Ok(Json(AssistantMessageResponse { reply: reply.message, rescheduled }))
    }
}
