//! User repository

use uuid::Uuid;

use crate::{
    constants::collections,
    error::{AppError, AppResult},
    models::{BanRecord, User},
    store::RecordStore,
    utils::time,
};

/// Partial update applied to a stored user record
///
/// The id is immutable. Uniqueness of email and username is only enforced
/// at creation; the update path applies the patch as given.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub level: Option<u32>,
    pub hours_played: Option<u32>,
    pub achievement_points: Option<u32>,
    pub is_vip: Option<bool>,
    pub is_admin: Option<bool>,
}

/// Repository for user record operations
pub struct UserRepository;

impl UserRepository {
    /// All users
    pub fn all(store: &RecordStore) -> Vec<User> {
        store.read(collections::USERS)
    }

    /// Find user by ID
    pub fn find_by_id(store: &RecordStore, id: &Uuid) -> Option<User> {
        Self::all(store).into_iter().find(|user| user.id == *id)
    }

    /// Find user by email (exact match, case-sensitive)
    pub fn find_by_email(store: &RecordStore, email: &str) -> Option<User> {
        Self::all(store).into_iter().find(|user| user.email == email)
    }

    /// Find user by username
    pub fn find_by_username(store: &RecordStore, username: &str) -> Option<User> {
        Self::all(store)
            .into_iter()
            .find(|user| user.username == username)
    }

    /// Count total users
    pub fn count(store: &RecordStore) -> usize {
        Self::all(store).len()
    }

    /// Check whether any account carries the admin flag
    pub fn has_admin(store: &RecordStore) -> bool {
        Self::all(store).iter().any(|user| user.is_admin)
    }

    /// Create a new user
    ///
    /// Both uniqueness checks run before anything is written.
    pub fn create(
        store: &RecordStore,
        username: &str,
        email: &str,
        password_hash: &str,
        level: u32,
        is_vip: bool,
        is_admin: bool,
    ) -> AppResult<User> {
        let mut users = Self::all(store);

        if users.iter().any(|user| user.email == email) {
            return Err(AppError::DuplicateEmail);
        }
        if users.iter().any(|user| user.username == username) {
            return Err(AppError::DuplicateUsername);
        }

        let now = time::now_utc();
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            level,
            hours_played: 0,
            achievement_points: 0,
            is_vip,
            is_admin,
            created_at: now,
            last_login_at: now,
            ban: None,
        };

        users.push(user.clone());
        store.write(collections::USERS, &users)?;

        Ok(user)
    }

    /// Apply a partial update to a user record
    pub fn update(store: &RecordStore, id: &Uuid, patch: UserPatch) -> AppResult<User> {
        let mut users = Self::all(store);
        let user = users
            .iter_mut()
            .find(|user| user.id == *id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(password_hash) = patch.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(level) = patch.level {
            user.level = level;
        }
        if let Some(hours_played) = patch.hours_played {
            user.hours_played = hours_played;
        }
        if let Some(achievement_points) = patch.achievement_points {
            user.achievement_points = achievement_points;
        }
        if let Some(is_vip) = patch.is_vip {
            user.is_vip = is_vip;
        }
        if let Some(is_admin) = patch.is_admin {
            user.is_admin = is_admin;
        }

        let updated = user.clone();
        store.write(collections::USERS, &users)?;

        Ok(updated)
    }

    /// Delete a user record
    pub fn delete(store: &RecordStore, id: &Uuid) -> AppResult<()> {
        let users: Vec<User> = Self::all(store)
            .into_iter()
            .filter(|user| user.id != *id)
            .collect();
        store.write(collections::USERS, &users)
    }

    /// Update last login time
    ///
    /// A dangling id is silently ignored, matching the lenient behavior of
    /// the rest of the read path.
    pub fn update_last_login(store: &RecordStore, id: &Uuid) -> AppResult<()> {
        let mut users = Self::all(store);

        if let Some(user) = users.iter_mut().find(|user| user.id == *id) {
            user.last_login_at = time::now_utc();
            store.write(collections::USERS, &users)?;
        }

        Ok(())
    }

    /// Attach a ban record to a user
    pub fn ban(store: &RecordStore, id: &Uuid, record: BanRecord) -> AppResult<()> {
        let mut users = Self::all(store);
        let user = users
            .iter_mut()
            .find(|user| user.id == *id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        user.ban = Some(record);
        store.write(collections::USERS, &users)
    }

    /// Remove the ban record from a user
    pub fn unban(store: &RecordStore, id: &Uuid) -> AppResult<()> {
        let mut users = Self::all(store);
        let user = users
            .iter_mut()
            .find(|user| user.id == *id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        user.ban = None;
        store.write(collections::USERS, &users)
    }
}
