//! Entity repositories
//!
//! One accessor per entity type. Every mutation reads the whole collection,
//! modifies it in memory and writes it back.

pub mod message_repo;
pub mod news_repo;
pub mod report_repo;
pub mod settings_repo;
pub mod stats_repo;
pub mod user_repo;

pub use message_repo::MessageRepository;
pub use news_repo::NewsRepository;
pub use report_repo::ReportRepository;
pub use settings_repo::{SettingsPatch, SettingsRepository};
pub use stats_repo::{StatisticsPatch, StatisticsRepository};
pub use user_repo::{UserPatch, UserRepository};
