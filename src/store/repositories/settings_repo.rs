//! User settings repository

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    constants::collections,
    error::AppResult,
    models::{PrivacySettings, UserSettings},
    store::RecordStore,
};

/// Partial update applied to a user's settings
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub theme: Option<String>,
    pub notifications: Option<bool>,
    pub language: Option<String>,
    pub show_online: Option<bool>,
    pub show_profile: Option<bool>,
}

/// Repository for per-user settings, stored as one map keyed by user id
pub struct SettingsRepository;

impl SettingsRepository {
    /// Settings for a user, falling back to the defaults
    pub fn for_user(store: &RecordStore, user_id: &Uuid) -> UserSettings {
        let settings: HashMap<Uuid, UserSettings> = store.read(collections::USER_SETTINGS);
        settings.get(user_id).cloned().unwrap_or_default()
    }

    /// Merge a patch into a user's settings and persist the map
    pub fn update(
        store: &RecordStore,
        user_id: &Uuid,
        patch: SettingsPatch,
    ) -> AppResult<UserSettings> {
        let mut settings: HashMap<Uuid, UserSettings> = store.read(collections::USER_SETTINGS);
        let mut current = settings.get(user_id).cloned().unwrap_or_default();

        if let Some(theme) = patch.theme {
            current.theme = theme;
        }
        if let Some(notifications) = patch.notifications {
            current.notifications = notifications;
        }
        if let Some(language) = patch.language {
            current.language = language;
        }
        current.privacy = PrivacySettings {
            show_online: patch.show_online.unwrap_or(current.privacy.show_online),
            show_profile: patch.show_profile.unwrap_or(current.privacy.show_profile),
        };

        settings.insert(*user_id, current.clone());
        store.write(collections::USER_SETTINGS, &settings)?;

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::constants::themes;

    fn open_store() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            data_dir: dir.path().to_path_buf(),
            pretty: false,
        };
        let store = RecordStore::open(&config).unwrap();
        (dir, store)
    }

    #[test]
    fn test_unknown_user_gets_defaults() {
        let (_dir, store) = open_store();
        let settings = SettingsRepository::for_user(&store, &Uuid::new_v4());

        assert_eq!(settings, UserSettings::default());
        assert_eq!(settings.theme, themes::DARK);
        assert!(settings.privacy.show_online);
    }

    #[test]
    fn test_patch_merges_into_existing_settings() {
        let (_dir, store) = open_store();
        let user_id = Uuid::new_v4();

        SettingsRepository::update(
            &store,
            &user_id,
            SettingsPatch {
                theme: Some(themes::LIGHT.to_string()),
                show_online: Some(false),
                ..Default::default()
            },
        )
        .unwrap();

        let settings = SettingsRepository::for_user(&store, &user_id);
        assert_eq!(settings.theme, themes::LIGHT);
        assert!(!settings.privacy.show_online);
        // Untouched fields keep their previous values
        assert!(settings.notifications);
        assert!(settings.privacy.show_profile);
    }

    #[test]
    fn test_settings_are_stored_per_user() {
        let (_dir, store) = open_store();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        SettingsRepository::update(
            &store,
            &alice,
            SettingsPatch {
                notifications: Some(false),
                ..Default::default()
            },
        )
        .unwrap();

        assert!(!SettingsRepository::for_user(&store, &alice).notifications);
        assert!(SettingsRepository::for_user(&store, &bob).notifications);
    }
}
