use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: Uuid,
}
