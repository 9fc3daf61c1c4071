pub mod health_controller;
pub mod authentication_controller;
pub mod user_controller;
pub mod task_controller;
pub mod reminder_controller;
pub mod assistant_controller;
