pub mod auth;
pub mod login_request;
pub mod register_request;
pub mod user_dto;
pub mod user_response;
