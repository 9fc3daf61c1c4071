use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderType {
    #[default]
    OneTime,
    Recurring,
}

impl ReminderType {
    pub fn as_str(self) -> &'static str {
        match self {
            ReminderType::OneTime => "one-time",
            ReminderType::Recurring => "recurring",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderFrequency {
    Daily,
    Weekly,
    Monthly,
}
