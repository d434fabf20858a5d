//! CRMP Portal - Community Portal Core
//!
//! This library provides the headless core of the CRMP Mobile community
//! portal: user accounts, admin moderation, a news feed, player reports and
//! direct messaging, all persisted in a local namespaced JSON record store.
//!
//! # Features
//!
//! - Session/ban reconciliation with a one-time admin bootstrap flow
//! - Whole-document JSON persistence with legacy key migration
//! - Admin moderation (bans, admin/VIP grants, report handling)
//! - News feed with pinning, direct messages, per-user settings
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Services**: Business logic and the authentication lifecycle
//! - **Repositories**: Whole-collection record access
//! - **Store**: Namespaced JSON document persistence
//! - **Models**: Domain records
//!
//! The presentation layer (UI, forms, error display) is the sole caller of
//! the services and lives outside this crate.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
