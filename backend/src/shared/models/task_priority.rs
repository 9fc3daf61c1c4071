use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    /// How much a task of this priority adds to the load of the day it is due on.
    pub fn density_weight(self) -> u32 {
        match self {
            TaskPriority::High => 3,
            TaskPriority::Medium => 2,
            TaskPriority::Low => 1,
        }
    }

    /// Hour of day a rescheduled task of this priority is moved to.
    pub fn reschedule_hour(self) -> u32 {
        match self {
            TaskPriority::High => 9,
            TaskPriority::Medium => 12,
            TaskPriority::Low => 15,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}
