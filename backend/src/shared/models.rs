pub mod app_state;
pub mod settings;

pub mod task;
pub mod task_priority;
pub mod task_status;
pub mod reschedule_record;

pub mod reminder;
pub mod reminder_type;

pub mod user;
pub mod user_preferences;
