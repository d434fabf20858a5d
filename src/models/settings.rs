//! Per-user portal settings

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LANGUAGE, themes};

/// Per-user interface and privacy preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// One of `constants::themes`
    pub theme: String,
    pub notifications: bool,
    pub language: String,
    pub privacy: PrivacySettings,
}

/// Profile visibility preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub show_online: bool,
    pub show_profile: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: themes::DARK.to_string(),
            notifications: true,
            language: DEFAULT_LANGUAGE.to_string(),
            privacy: PrivacySettings {
                show_online: true,
                show_profile: true,
            },
        }
    }
}
