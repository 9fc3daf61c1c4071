// Requests
pub mod task_create_request;
pub mod task_update_request;
pub mod task_reschedule_request;
pub mod reminder_create_request;
pub mod reminder_update_request;
pub mod login_request;
pub mod user_add_request;
pub mod user_edit_request;
pub mod assistant_message_request;


// Responses
pub mod task_reschedule_response;
pub mod login_response;
pub mod user_get_response;
pub mod delete_response;
pub mod assistant_message_response;
