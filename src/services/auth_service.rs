//! Authentication service
//!
//! The session/ban reconciler. Session validity is never cached: every
//! restore and login re-derives it from the stored user record, clearing
//! lapsed bans and blocking active ones. The one-time bootstrap credential
//! pair unlocks admin provisioning while the store has no admin account.

use crate::{
    constants::{ADMIN_LEVEL, STARTING_LEVEL, bootstrap, collections},
    error::{AppError, AppResult},
    models::{BanRecord, User},
    store::{RecordStore, repositories::UserRepository},
    utils::crypto,
};

/// Result of a login attempt that did not fail
#[derive(Debug)]
pub enum LoginOutcome {
    /// Credentials accepted; the session is now active
    Authenticated(User),
    /// Bootstrap pair entered with no admin on record; provisioning unlocked
    ProvisioningRequired,
}

/// Result of restoring the persisted session at startup
#[derive(Debug)]
pub enum RestoreOutcome {
    /// The persisted session is still valid
    Authenticated(User),
    /// The persisted user carries an active ban; the session was cleared
    Banned(BanRecord),
    /// No usable persisted session
    Anonymous,
}

/// Authentication service
///
/// Owns the in-memory session lifecycle: `Anonymous -> Authenticated` via
/// login or registration, back via logout or a ban detected on restore,
/// with the transient admin-provisioning state in between. The embedding
/// application constructs one instance and threads it through explicitly;
/// the provisioning flag and ban notice live only in memory and reset on
/// restart, at which point the store is re-checked from scratch.
#[derive(Debug, Default)]
pub struct AuthService {
    session: Option<User>,
    ban_notice: Option<BanRecord>,
    provisioning_pending: bool,
}

impl AuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently authenticated user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Ban record surfaced by the last blocked login or restore
    pub fn ban_notice(&self) -> Option<&BanRecord> {
        self.ban_notice.as_ref()
    }

    /// Dismiss the surfaced ban notice
    pub fn clear_ban_notice(&mut self) {
        self.ban_notice = None;
    }

    /// Whether the one-time admin provisioning flow is unlocked
    pub fn provisioning_pending(&self) -> bool {
        self.provisioning_pending
    }

    /// Abandon the provisioning flow without creating an account
    pub fn abandon_provisioning(&mut self) {
        self.provisioning_pending = false;
    }

    /// Restore the persisted session, re-deriving its validity
    ///
    /// Invoked once per process start. An active ban clears the persisted
    /// session and surfaces the record; a lapsed ban is removed from the
    /// stored user before the session comes back.
    pub fn restore_session(&mut self, store: &RecordStore) -> AppResult<RestoreOutcome> {
        let Some(saved) = Self::load_session(store) else {
            return Ok(RestoreOutcome::Anonymous);
        };

        // The persisted copy may be stale; the stored record is the truth
        let Some(mut user) = UserRepository::find_by_id(store, &saved.id) else {
            store.erase(collections::CURRENT_USER)?;
            return Ok(RestoreOutcome::Anonymous);
        };

        if let Some(ban) = user.ban.take() {
            if ban.is_active() {
                tracing::warn!(user_id = %user.id, "Banned account blocked at session restore");
                store.erase(collections::CURRENT_USER)?;
                self.session = None;
                self.ban_notice = Some(ban.clone());
                return Ok(RestoreOutcome::Banned(ban));
            }

            UserRepository::unban(store, &user.id)?;
            tracing::info!(user_id = %user.id, "Lapsed ban cleared at session restore");
        }

        self.persist_session(store, &user)?;
        self.session = Some(user.clone());

        Ok(RestoreOutcome::Authenticated(user))
    }

    /// Login with email and password
    pub fn login(
        &mut self,
        store: &RecordStore,
        email: &str,
        password: &str,
    ) -> AppResult<LoginOutcome> {
        if email == bootstrap::EMAIL
            && password == bootstrap::PASSWORD
            && !UserRepository::has_admin(store)
        {
            tracing::info!("Bootstrap credentials accepted, admin provisioning unlocked");
            self.provisioning_pending = true;
            return Ok(LoginOutcome::ProvisioningRequired);
        }

        // Exact-match lookup; no normalization anywhere in the store
        let Some(mut user) = UserRepository::find_by_email(store, email) else {
            return Err(AppError::InvalidCredentials);
        };

        if !crypto::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        if let Some(ban) = user.ban.take() {
            if ban.is_active() {
                tracing::warn!(user_id = %user.id, "Banned account blocked at login");
                self.ban_notice = Some(ban.clone());
                return Err(AppError::AccountBanned(ban));
            }

            UserRepository::unban(store, &user.id)?;
            tracing::info!(user_id = %user.id, "Lapsed ban cleared at login");
        }

        UserRepository::update_last_login(store, &user.id)?;
        let user = UserRepository::find_by_id(store, &user.id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        self.persist_session(store, &user)?;
        self.session = Some(user.clone());
        self.ban_notice = None;

        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(LoginOutcome::Authenticated(user))
    }

    /// Register a new account and sign it in
    ///
    /// Uniqueness is enforced before anything is written. Password strength
    /// is left to the caller.
    pub fn register(
        &mut self,
        store: &RecordStore,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<User> {
        let password_hash = crypto::hash_password(password)?;
        let user = UserRepository::create(
            store,
            username,
            email,
            &password_hash,
            STARTING_LEVEL,
            false,
            false,
        )?;

        self.persist_session(store, &user)?;
        self.session = Some(user.clone());

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Create the initial admin account
    ///
    /// Only valid immediately after a login signalled provisioning. This is
    /// the escape hatch for a fresh store with nobody to grant the role;
    /// day-to-day admin grants are a plain user update by an existing admin.
    pub fn provision_admin(
        &mut self,
        store: &RecordStore,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<User> {
        if !self.provisioning_pending {
            return Err(AppError::Forbidden(
                "Admin provisioning is not unlocked".to_string(),
            ));
        }

        let password_hash = crypto::hash_password(password)?;
        let user = UserRepository::create(
            store,
            username,
            email,
            &password_hash,
            ADMIN_LEVEL,
            true,
            true,
        )?;

        self.provisioning_pending = false;
        self.persist_session(store, &user)?;
        self.session = Some(user.clone());

        tracing::info!(user_id = %user.id, username = %user.username, "Initial admin provisioned");

        Ok(user)
    }

    /// End the session and erase its persisted copy
    pub fn logout(&mut self, store: &RecordStore) -> AppResult<()> {
        if let Some(user) = self.session.take() {
            tracing::info!(user_id = %user.id, "User logged out");
        }
        self.ban_notice = None;

        store.erase(collections::CURRENT_USER)
    }

    fn load_session(store: &RecordStore) -> Option<User> {
        store.read(collections::CURRENT_USER)
    }

    fn persist_session(&self, store: &RecordStore, user: &User) -> AppResult<()> {
        store.write(collections::CURRENT_USER, user)
    }
}
