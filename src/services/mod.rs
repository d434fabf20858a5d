//! Business logic services

use crate::error::{AppError, AppResult};
use crate::models::User;

pub mod admin_service;
pub mod auth_service;
pub mod message_service;
pub mod news_service;
pub mod report_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use auth_service::{AuthService, LoginOutcome, RestoreOutcome};
pub use message_service::MessageService;
pub use news_service::NewsService;
pub use report_service::ReportService;
pub use user_service::UserService;

/// Gate a moderation operation on the acting user's admin flag
pub(crate) fn require_admin(actor: &User) -> AppResult<()> {
    if actor.is_admin {
        Ok(())
    } else {
        Err(AppError::Forbidden("Admin privileges required".to_string()))
    }
}
