//! Report repository

use uuid::Uuid;

use crate::{
    constants::{collections, report_statuses},
    error::{AppError, AppResult},
    models::{Report, ReportComment},
    store::RecordStore,
    utils::time,
};

/// Repository for player report operations
pub struct ReportRepository;

impl ReportRepository {
    /// All reports
    pub fn all(store: &RecordStore) -> Vec<Report> {
        store.read(collections::REPORTS)
    }

    /// Find a report by ID
    pub fn find_by_id(store: &RecordStore, id: &Uuid) -> Option<Report> {
        Self::all(store).into_iter().find(|report| report.id == *id)
    }

    /// Reports filed by a given user
    pub fn for_user(store: &RecordStore, user_id: &Uuid) -> Vec<Report> {
        Self::all(store)
            .into_iter()
            .filter(|report| report.user_id == *user_id)
            .collect()
    }

    /// File a new report
    ///
    /// New reports open unseen so they surface on the admin dashboard.
    pub fn create(
        store: &RecordStore,
        user_id: &Uuid,
        kind: &str,
        title: &str,
        description: &str,
        priority: &str,
    ) -> AppResult<Report> {
        let mut reports = Self::all(store);

        let now = time::now_utc();
        let report = Report {
            id: Uuid::new_v4(),
            user_id: *user_id,
            kind: kind.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            priority: priority.to_string(),
            status: report_statuses::OPEN.to_string(),
            comments: Vec::new(),
            is_new: true,
            has_new_comments: false,
            created_at: now,
            updated_at: now,
        };

        reports.push(report.clone());
        store.write(collections::REPORTS, &reports)?;

        Ok(report)
    }

    /// Change a report's lifecycle status
    pub fn set_status(store: &RecordStore, id: &Uuid, status: &str) -> AppResult<Report> {
        Self::modify(store, id, |report| {
            report.status = status.to_string();
            report.updated_at = time::now_utc();
        })
    }

    /// Delete a report
    pub fn delete(store: &RecordStore, id: &Uuid) -> AppResult<()> {
        let reports: Vec<Report> = Self::all(store)
            .into_iter()
            .filter(|report| report.id != *id)
            .collect();
        store.write(collections::REPORTS, &reports)
    }

    /// Append a comment and flag it as unseen for the reporter
    pub fn add_comment(
        store: &RecordStore,
        report_id: &Uuid,
        user_id: &Uuid,
        content: &str,
    ) -> AppResult<ReportComment> {
        let comment = ReportComment {
            id: Uuid::new_v4(),
            user_id: *user_id,
            content: content.to_string(),
            created_at: time::now_utc(),
        };

        let appended = comment.clone();
        Self::modify(store, report_id, move |report| {
            report.comments.push(comment);
            report.updated_at = time::now_utc();
            report.has_new_comments = true;
        })?;

        Ok(appended)
    }

    /// Clear the unseen-by-admins flag
    pub fn mark_as_seen(store: &RecordStore, id: &Uuid) -> AppResult<()> {
        Self::modify(store, id, |report| report.is_new = false).map(|_| ())
    }

    /// Clear the unseen-comments flag for the reporter
    pub fn mark_comments_seen(store: &RecordStore, id: &Uuid) -> AppResult<()> {
        Self::modify(store, id, |report| report.has_new_comments = false).map(|_| ())
    }

    /// Unread counter feeding the navbar badge
    ///
    /// Admins count reports nobody has triaged yet; players count their own
    /// reports with comments they have not read.
    pub fn unread_count(store: &RecordStore, user_id: &Uuid, is_admin: bool) -> usize {
        let reports = Self::all(store);

        if is_admin {
            reports.iter().filter(|report| report.is_new).count()
        } else {
            reports
                .iter()
                .filter(|report| report.user_id == *user_id && report.has_new_comments)
                .count()
        }
    }

    fn modify(
        store: &RecordStore,
        id: &Uuid,
        apply: impl FnOnce(&mut Report),
    ) -> AppResult<Report> {
        let mut reports = Self::all(store);
        let report = reports
            .iter_mut()
            .find(|report| report.id == *id)
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

        apply(report);

        let updated = report.clone();
        store.write(collections::REPORTS, &reports)?;

        Ok(updated)
    }
}
