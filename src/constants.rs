//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// STORAGE
// =============================================================================

/// Namespace prefix applied to every persisted document
pub const STORAGE_NAMESPACE: &str = "crmp_";

/// Default data directory for the record store
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Collection document names
pub mod collections {
    pub const USERS: &str = "users.json";
    pub const REPORTS: &str = "reports.json";
    pub const NEWS: &str = "news.json";
    pub const MESSAGES: &str = "messages.json";
    pub const USER_SETTINGS: &str = "user_settings.json";
    pub const STATISTICS: &str = "statistics.json";
    pub const CURRENT_USER: &str = "current_user.json";
}

// =============================================================================
// AUTHENTICATION
// =============================================================================

/// Fixed bootstrap credential pair
///
/// Entering this pair at login while no admin account exists unlocks the
/// one-time admin provisioning flow. A fixed constant external interface,
/// not a secret store.
pub mod bootstrap {
    pub const EMAIL: &str = "admin@gmail.com";
    pub const PASSWORD: &str = "createadmin";
}

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: usize = 32;

// =============================================================================
// ACCOUNT DEFAULTS
// =============================================================================

/// Starting level for a freshly registered account
pub const STARTING_LEVEL: u32 = 1;

/// Level assigned to a bootstrap-provisioned admin account
pub const ADMIN_LEVEL: u32 = 99;

// =============================================================================
// REPORTS
// =============================================================================

/// Report categories
pub mod report_kinds {
    pub const BUG: &str = "bug";
    pub const PLAYER: &str = "player";
    pub const SUGGESTION: &str = "suggestion";

    /// All report categories
    pub const ALL: &[&str] = &[BUG, PLAYER, SUGGESTION];
}

/// Report lifecycle statuses
pub mod report_statuses {
    pub const OPEN: &str = "open";
    pub const IN_PROGRESS: &str = "in-progress";
    pub const RESOLVED: &str = "resolved";
}

/// Report priorities
pub mod report_priorities {
    pub const LOW: &str = "low";
    pub const MEDIUM: &str = "medium";
    pub const HIGH: &str = "high";
    pub const CRITICAL: &str = "critical";

    /// All report priorities
    pub const ALL: &[&str] = &[LOW, MEDIUM, HIGH, CRITICAL];
}

// =============================================================================
// USER SETTINGS
// =============================================================================

/// Portal themes
pub mod themes {
    pub const DARK: &str = "dark";
    pub const LIGHT: &str = "light";
}

/// Default interface language
pub const DEFAULT_LANGUAGE: &str = "en";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum news/report title length
pub const MAX_TITLE_LENGTH: usize = 256;

/// Maximum report description length
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;

/// Maximum direct message length
pub const MAX_MESSAGE_LENGTH: usize = 2048;
