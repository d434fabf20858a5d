//! Report service

use uuid::Uuid;

use crate::{
    constants::{MAX_DESCRIPTION_LENGTH, report_kinds, report_priorities, report_statuses},
    error::{AppError, AppResult},
    models::{Report, ReportComment, User},
    services::require_admin,
    store::{RecordStore, repositories::ReportRepository},
    utils::validation,
};

/// Report service for filing and triaging player reports
pub struct ReportService;

impl ReportService {
    /// File a new report
    pub fn submit(
        store: &RecordStore,
        reporter: &User,
        kind: &str,
        title: &str,
        description: &str,
        priority: &str,
    ) -> AppResult<Report> {
        if !report_kinds::ALL.contains(&kind) {
            return Err(AppError::Validation("Unknown report type".to_string()));
        }
        if !report_priorities::ALL.contains(&priority) {
            return Err(AppError::Validation("Unknown report priority".to_string()));
        }

        let title = validation::validate_title(title)
            .map_err(|msg| AppError::Validation(msg.to_string()))?;
        if description.trim().is_empty() {
            return Err(AppError::Validation(
                "Description cannot be empty".to_string(),
            ));
        }
        if description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(AppError::Validation("Description is too long".to_string()));
        }

        let report =
            ReportRepository::create(store, &reporter.id, kind, &title, description, priority)?;
        tracing::info!(report_id = %report.id, user_id = %reporter.id, kind, "Report filed");

        Ok(report)
    }

    /// Get a report; reporters see their own, admins see everything
    pub fn get(store: &RecordStore, requester: &User, id: &Uuid) -> AppResult<Report> {
        let report = ReportRepository::find_by_id(store, id)
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

        if report.user_id != requester.id && !requester.is_admin {
            return Err(AppError::Forbidden(
                "Cannot view other users' reports".to_string(),
            ));
        }

        Ok(report)
    }

    /// Reports filed by the requesting user
    pub fn reports_for_user(store: &RecordStore, user: &User) -> Vec<Report> {
        ReportRepository::for_user(store, &user.id)
    }

    /// Every report, for the admin dashboard
    pub fn all_reports(store: &RecordStore, actor: &User) -> AppResult<Vec<Report>> {
        require_admin(actor)?;
        Ok(ReportRepository::all(store))
    }

    /// Move a report through its lifecycle
    pub fn set_status(
        store: &RecordStore,
        actor: &User,
        id: &Uuid,
        status: &str,
    ) -> AppResult<Report> {
        require_admin(actor)?;

        let known = status == report_statuses::OPEN
            || status == report_statuses::IN_PROGRESS
            || status == report_statuses::RESOLVED;
        if !known {
            return Err(AppError::Validation("Unknown report status".to_string()));
        }

        ReportRepository::set_status(store, id, status)
    }

    /// Comment on a report as the reporter or an admin
    pub fn add_comment(
        store: &RecordStore,
        requester: &User,
        report_id: &Uuid,
        content: &str,
    ) -> AppResult<ReportComment> {
        if content.trim().is_empty() {
            return Err(AppError::Validation("Comment cannot be empty".to_string()));
        }

        // Reuses the visibility check: only the reporter and admins may touch it
        Self::get(store, requester, report_id)?;

        ReportRepository::add_comment(store, report_id, &requester.id, content)
    }

    /// Clear the unseen flag when an admin opens a report
    pub fn mark_seen(store: &RecordStore, actor: &User, id: &Uuid) -> AppResult<()> {
        require_admin(actor)?;
        ReportRepository::mark_as_seen(store, id)
    }

    /// Clear the unseen-comments flag when the reporter opens their report
    pub fn mark_comments_seen(
        store: &RecordStore,
        requester: &User,
        id: &Uuid,
    ) -> AppResult<()> {
        Self::get(store, requester, id)?;
        ReportRepository::mark_comments_seen(store, id)
    }

    /// Unread counter feeding the navbar badge
    pub fn unread_count(store: &RecordStore, user: &User) -> usize {
        ReportRepository::unread_count(store, &user.id, user.is_admin)
    }

    /// Delete a report
    pub fn remove(store: &RecordStore, actor: &User, id: &Uuid) -> AppResult<()> {
        require_admin(actor)?;
        ReportRepository::delete(store, id)
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

    fn provision_admin(store: &RecordStore) -> User {
        let mut auth = AuthService::new();
        auth.login(
            store,
            crate::constants::bootstrap::EMAIL,
            crate::constants::bootstrap::PASSWORD,
        )
        .unwrap();
        auth.provision_admin(store, "root", "root@x.com", "secret1")
            .unwrap()
    }

    fn register(store: &RecordStore, username: &str, email: &str) -> User {
        AuthService::new()
            .register(store, username, email, "password1")
            .unwrap()
    }

    fn submit(store: &RecordStore, reporter: &User) -> Report {
        ReportService::submit(
            store,
            reporter,
            report_kinds::BUG,
            "car spawns underground",
            "spawning at the docks drops the car through the map",
            report_priorities::HIGH,
        )
        .unwrap()
    }

    #[test]
    fn test_submit_rejects_unknown_vocabulary() {
        let (_dir, store) = open_store();
        let alice = register(&store, "alice", "alice@example.com");

        let err = ReportService::submit(&store, &alice, "rant", "t", "d", "high").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = ReportService::submit(&store, &alice, "bug", "t", "d", "urgent").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_reporters_cannot_read_others_reports() {
        let (_dir, store) = open_store();
        let alice = register(&store, "alice", "alice@example.com");
        let bob = register(&store, "bob", "bob@example.com");
        let report = submit(&store, &alice);

        let err = ReportService::get(&store, &bob, &report.id).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let admin = provision_admin(&store);
        assert!(ReportService::get(&store, &admin, &report.id).is_ok());
    }

    #[test]
    fn test_status_lifecycle_is_admin_only() {
        let (_dir, store) = open_store();
        let alice = register(&store, "alice", "alice@example.com");
        let admin = provision_admin(&store);
        let report = submit(&store, &alice);

        let err = ReportService::set_status(&store, &alice, &report.id, "resolved").unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let err = ReportService::set_status(&store, &admin, &report.id, "snoozed").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let updated =
            ReportService::set_status(&store, &admin, &report.id, report_statuses::IN_PROGRESS)
                .unwrap();
        assert_eq!(updated.status, report_statuses::IN_PROGRESS);
    }

    #[test]
    fn test_comment_flow_updates_unread_badges() {
        let (_dir, store) = open_store();
        let alice = register(&store, "alice", "alice@example.com");
        let admin = provision_admin(&store);
        let report = submit(&store, &alice);

        assert_eq!(ReportService::unread_count(&store, &admin), 1);
        ReportService::mark_seen(&store, &admin, &report.id).unwrap();
        assert_eq!(ReportService::unread_count(&store, &admin), 0);

        ReportService::add_comment(&store, &admin, &report.id, "fixed in next patch").unwrap();
        assert_eq!(ReportService::unread_count(&store, &alice), 1);

        ReportService::mark_comments_seen(&store, &alice, &report.id).unwrap();
        assert_eq!(ReportService::unread_count(&store, &alice), 0);
    }

    #[test]
    fn test_empty_comment_rejected() {
        let (_dir, store) = open_store();
        let alice = register(&store, "alice", "alice@example.com");
        let report = submit(&store, &alice);

        let err = ReportService::add_comment(&store, &alice, &report.id, "  ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
