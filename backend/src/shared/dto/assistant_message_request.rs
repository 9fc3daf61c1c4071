use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantMessageRequest {
    pub message: String,
    pub utc_offset_minutes: Option<i32>,
}
