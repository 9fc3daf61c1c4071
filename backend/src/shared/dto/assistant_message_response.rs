use serde::Serialize;

use crate::task::Task;

#[derive(Debug, Serialize)]
pub struct AssistantMessageResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rescheduled: Option<Task>,
}
