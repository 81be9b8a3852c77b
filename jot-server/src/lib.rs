pub mod api;
pub mod error;
pub mod gate;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{login, logout, me, register},
        login_request::LoginRequest,
        register_request::RegisterRequest,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    cookies::{GUEST_COOKIE, SESSION_COOKIE},
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::{CurrentUser, MaybeUser},
    organize::{
        organize::organize,
        organize_request::OrganizeRequest,
        persister::{SaveReport, save_result},
        save::save_organized,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
