pub mod create_tasks_request;
pub mod task_list_response;
pub mod tasks;
