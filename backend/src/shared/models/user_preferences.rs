use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskView {
    #[default]
    List,
    Calendar,
    Kanban,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskSort {
    #[serde(rename = "dueDate")]
    DueDate,
    #[serde(rename = "priority")]
    Priority,
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub silent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent_hours_start: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent_hours_end: Option<u8>,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            silent: false,
            silent_hours_start: None,
            silent_hours_end: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub theme: Theme,
    pub notification_settings: NotificationSettings,
    pub default_task_view: TaskView,
    pub default_task_sort: TaskSort,
}

impl UserPreferences {
    /// Silent hours are hours of the day, 0..=23.
    pub fn validate(&self) -> Result<(), String> {
        let settings = &self.notification_settings;
        for (name, hour) in [
            ("silentHoursStart", settings.silent_hours_start),
            ("silentHoursEnd", settings.silent_hours_end),
        ] {
            if let Some(h) = hour {
                if h > 23 {
                    return Err(format!("{name} must be between 0 and 23"));
                }
            }
        }
        Ok(())
    }
}
