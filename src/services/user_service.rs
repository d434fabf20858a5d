//! User service

use uuid::Uuid;

use crate::{
    constants::themes,
    error::{AppError, AppResult},
    models::{User, UserSettings},
    store::{
        RecordStore,
        repositories::{
            SettingsPatch, SettingsRepository, StatisticsRepository, UserPatch, UserRepository,
        },
    },
    utils::{crypto, validation},
};

/// User service for profile and settings operations
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub fn get_user(store: &RecordStore, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(store, id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// All users
    pub fn list_users(store: &RecordStore) -> Vec<User> {
        UserRepository::all(store)
    }

    /// Update a profile's username and/or email
    ///
    /// Users edit their own profile; admins can edit anyone's. Formats are
    /// validated here, but uniqueness is only checked at registration.
    pub fn update_profile(
        store: &RecordStore,
        requester: &User,
        target_id: &Uuid,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<User> {
        Self::require_self_or_admin(requester, target_id)?;

        if let Some(username) = username {
            validation::validate_username(username)
                .map_err(|msg| AppError::Validation(msg.to_string()))?;
        }
        if let Some(email) = email {
            validation::validate_email(email)
                .map_err(|msg| AppError::Validation(msg.to_string()))?;
        }

        UserRepository::update(
            store,
            target_id,
            UserPatch {
                username: username.map(str::to_string),
                email: email.map(str::to_string),
                ..Default::default()
            },
        )
    }

    /// Change an account password
    ///
    /// A self-change must present the current password; an admin resetting
    /// somebody else's password does not have it.
    pub fn change_password(
        store: &RecordStore,
        requester: &User,
        target_id: &Uuid,
        current_password: Option<&str>,
        new_password: &str,
    ) -> AppResult<()> {
        Self::require_self_or_admin(requester, target_id)?;

        let target = Self::get_user(store, target_id)?;

        if requester.id == *target_id {
            let current = current_password
                .ok_or_else(|| AppError::Validation("Current password required".to_string()))?;
            if !crypto::verify_password(current, &target.password_hash)? {
                return Err(AppError::InvalidCredentials);
            }
        }

        validation::validate_password(new_password)
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        let password_hash = crypto::hash_password(new_password)?;
        UserRepository::update(
            store,
            target_id,
            UserPatch {
                password_hash: Some(password_hash),
                ..Default::default()
            },
        )?;

        tracing::info!(user_id = %target_id, "Password changed");

        Ok(())
    }

    /// Accrue played hours on a profile and in the portal statistics
    pub fn record_play_time(store: &RecordStore, user_id: &Uuid, hours: u32) -> AppResult<User> {
        let user = Self::get_user(store, user_id)?;

        let updated = UserRepository::update(
            store,
            user_id,
            UserPatch {
                hours_played: Some(user.hours_played + hours),
                ..Default::default()
            },
        )?;
        StatisticsRepository::add_play_time(store, u64::from(hours) * 60)?;

        Ok(updated)
    }

    /// Settings for a user, falling back to the defaults
    pub fn settings_for(store: &RecordStore, user_id: &Uuid) -> UserSettings {
        SettingsRepository::for_user(store, user_id)
    }

    /// Merge a settings patch for a user
    pub fn update_settings(
        store: &RecordStore,
        requester: &User,
        target_id: &Uuid,
        patch: SettingsPatch,
    ) -> AppResult<UserSettings> {
        Self::require_self_or_admin(requester, target_id)?;

        if let Some(theme) = patch.theme.as_deref() {
            if theme != themes::DARK && theme != themes::LIGHT {
                return Err(AppError::Validation("Unknown theme".to_string()));
            }
        }
        if let Some(language) = patch.language.as_deref() {
            if language.is_empty() {
                return Err(AppError::Validation("Language cannot be empty".to_string()));
            }
        }

        SettingsRepository::update(store, target_id, patch)
    }

    fn require_self_or_admin(requester: &User, target_id: &Uuid) -> AppResult<()> {
        if requester.id == *target_id || requester.is_admin {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Cannot update other users' profiles".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::services::AuthService;

    fn open_store() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            data_dir: dir.path().to_path_buf(),
            pretty: false,
        };
        let store = RecordStore::open(&config).unwrap();
        (dir, store)
    }

    fn register(store: &RecordStore, username: &str, email: &str) -> User {
        AuthService::new()
            .register(store, username, email, "password1")
            .unwrap()
    }

    #[test]
    fn test_get_user_not_found() {
        let (_dir, store) = open_store();
        let err = UserService::get_user(&store, &Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_update_own_profile() {
        let (_dir, store) = open_store();
        let alice = register(&store, "alice", "alice@example.com");

        let updated = UserService::update_profile(
            &store,
            &alice,
            &alice.id,
            None,
            Some("alice@new.example.com"),
        )
        .unwrap();
        assert_eq!(updated.email, "alice@new.example.com");
    }

    #[test]
    fn test_cannot_update_someone_elses_profile() {
        let (_dir, store) = open_store();
        let alice = register(&store, "alice", "alice@example.com");
        let bob = register(&store, "bob", "bob@example.com");

        let err = UserService::update_profile(&store, &alice, &bob.id, Some("hacked"), None)
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_update_profile_rejects_bad_email() {
        let (_dir, store) = open_store();
        let alice = register(&store, "alice", "alice@example.com");

        let err = UserService::update_profile(&store, &alice, &alice.id, None, Some("not-an-email"))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_change_password_requires_current_for_self() {
        let (_dir, store) = open_store();
        let alice = register(&store, "alice", "alice@example.com");

        let err =
            UserService::change_password(&store, &alice, &alice.id, None, "newpassword1")
                .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = UserService::change_password(
            &store,
            &alice,
            &alice.id,
            Some("wrong"),
            "newpassword1",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));

        UserService::change_password(
            &store,
            &alice,
            &alice.id,
            Some("password1"),
            "newpassword1",
        )
        .unwrap();

        let mut auth = AuthService::new();
        assert!(auth.login(&store, "alice@example.com", "newpassword1").is_ok());
    }

    #[test]
    fn test_record_play_time_accrues_profile_and_statistics() {
        let (_dir, store) = open_store();
        let alice = register(&store, "alice", "alice@example.com");

        UserService::record_play_time(&store, &alice.id, 2).unwrap();
        let updated = UserService::record_play_time(&store, &alice.id, 3).unwrap();

        assert_eq!(updated.hours_played, 5);
        assert_eq!(StatisticsRepository::get(&store).total_play_time, 300);
    }

    #[test]
    fn test_update_settings_validates_theme() {
        let (_dir, store) = open_store();
        let alice = register(&store, "alice", "alice@example.com");

        let err = UserService::update_settings(
            &store,
            &alice,
            &alice.id,
            SettingsPatch {
                theme: Some("neon".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let settings = UserService::update_settings(
            &store,
            &alice,
            &alice.id,
            SettingsPatch {
                theme: Some(themes::LIGHT.to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(settings.theme, themes::LIGHT);
    }
}
