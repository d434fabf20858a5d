//! Admin service

use chrono::Duration;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{BanRecord, Statistics, User},
    services::require_admin,
    store::{
        RecordStore,
        repositories::{StatisticsPatch, StatisticsRepository, UserPatch, UserRepository},
    },
    utils::time,
};

/// Admin service for moderation and portal management
pub struct AdminService;

impl AdminService {
    /// Ban a user
    ///
    /// No duration means permanent. The target's persisted session dies at
    /// its next restore; nothing is revoked eagerly because session
    /// validity is re-derived from the stored record every time.
    pub fn ban_user(
        store: &RecordStore,
        actor: &User,
        target_id: &Uuid,
        reason: &str,
        duration_hours: Option<i64>,
    ) -> AppResult<()> {
        require_admin(actor)?;

        let record = BanRecord {
            banned_by: actor.username.clone(),
            reason: reason.to_string(),
            ban_date: time::now_utc(),
            expiry_date: duration_hours.map(|hours| time::now_utc() + Duration::hours(hours)),
        };

        UserRepository::ban(store, target_id, record)?;
        tracing::info!(admin = %actor.username, user_id = %target_id, "User banned");

        Ok(())
    }

    /// Lift a user's ban
    pub fn unban_user(store: &RecordStore, actor: &User, target_id: &Uuid) -> AppResult<()> {
        require_admin(actor)?;

        UserRepository::unban(store, target_id)?;
        tracing::info!(admin = %actor.username, user_id = %target_id, "User unbanned");

        Ok(())
    }

    /// Grant or revoke the admin flag
    ///
    /// A plain field update by an existing admin; creating the very first
    /// admin goes through the bootstrap provisioning flow instead.
    pub fn set_admin(
        store: &RecordStore,
        actor: &User,
        target_id: &Uuid,
        grant: bool,
    ) -> AppResult<User> {
        require_admin(actor)?;

        let updated = UserRepository::update(
            store,
            target_id,
            UserPatch {
                is_admin: Some(grant),
                ..Default::default()
            },
        )?;
        tracing::info!(admin = %actor.username, user_id = %target_id, grant, "Admin flag updated");

        Ok(updated)
    }

    /// Grant or revoke VIP status
    pub fn set_vip(
        store: &RecordStore,
        actor: &User,
        target_id: &Uuid,
        grant: bool,
    ) -> AppResult<User> {
        require_admin(actor)?;

        UserRepository::update(
            store,
            target_id,
            UserPatch {
                is_vip: Some(grant),
                ..Default::default()
            },
        )
    }

    /// Delete a user account
    pub fn delete_user(store: &RecordStore, actor: &User, target_id: &Uuid) -> AppResult<()> {
        require_admin(actor)?;

        if UserRepository::find_by_id(store, target_id).is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        UserRepository::delete(store, target_id)?;
        tracing::info!(admin = %actor.username, user_id = %target_id, "User deleted");

        Ok(())
    }

    /// Dashboard statistics snapshot with a fresh user count
    pub fn overview(store: &RecordStore, actor: &User) -> AppResult<Statistics> {
        require_admin(actor)?;

        StatisticsRepository::update(
            store,
            StatisticsPatch {
                total_users: Some(UserRepository::count(store) as u64),
                ..Default::default()
            },
        )
    }
}
