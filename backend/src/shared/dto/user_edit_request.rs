use serde::{Deserialize, Serialize};

use crate::user_preferences::UserPreferences;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEditRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub preferences: Option<UserPreferences>,
}
