//! Admin UI controller state.
//!
//! # Purpose
//! Holds what the browser controller used to keep on a singleton: the last
//! fetched record list, the current search subset, the id being edited, the
//! id pending delete confirmation, and the transient notification banner.
//!
//! # Notes
//! Search filters the in-memory list and the UI re-renders from
//! [`Controller::visible`] — one source of truth, never per-row visibility
//! toggling that can drift from the data.
use crate::validate::{self, GraduateDraft};
use registry_model::{Graduate, GraduateFields};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A transient banner message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    /// How long the UI keeps a banner on screen.
    pub const DISPLAY_DURATION: Duration = Duration::from_secs(3);
}

#[derive(Debug, Default)]
pub struct Controller {
    records: Vec<Graduate>,
    filtered: Vec<Graduate>,
    search_term: String,
    editing: Option<String>,
    pending_delete: Option<String>,
    notification: Option<Notification>,
}

fn haystack(record: &Graduate) -> String {
    format!(
        "{} {} {} {} {} {}",
        record.student_id,
        record.full_name,
        record.program,
        record.cohort,
        record.status,
        record.email
    )
    .to_lowercase()
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record list after a fetch and re-apply the active search.
    pub fn set_records(&mut self, records: Vec<Graduate>) {
        self.records = records;
        let term = self.search_term.clone();
        self.apply_search(&term);
    }

    pub fn records(&self) -> &[Graduate] {
        &self.records
    }

    /// The rows the table should currently show.
    pub fn visible(&self) -> &[Graduate] {
        if self.search_term.is_empty() {
            &self.records
        } else {
            &self.filtered
        }
    }

    /// Case-insensitive substring search over the visible fields.
    pub fn search(&mut self, term: &str) -> &[Graduate] {
        self.apply_search(term);
        self.visible()
    }

    fn apply_search(&mut self, term: &str) {
        self.search_term = term.trim().to_lowercase();
        if self.search_term.is_empty() {
            self.filtered.clear();
            return;
        }
        self.filtered = self
            .records
            .iter()
            .filter(|record| haystack(record).contains(&self.search_term))
            .cloned()
            .collect();
    }

    /// The footer stats line: `Total: N`, or `Found: K of N` mid-search.
    pub fn stats_line(&self) -> String {
        if self.search_term.is_empty() {
            format!("Total: {}", self.records.len())
        } else {
            format!("Found: {} of {}", self.filtered.len(), self.records.len())
        }
    }

    /// Validate a form draft ahead of create/update submission.
    ///
    /// On failure only the first violation becomes a notification and the
    /// submission is blocked; on success the normalized payload is returned
    /// for the API call.
    pub fn prepare_submission(&mut self, draft: GraduateDraft) -> Option<GraduateFields> {
        let errors = validate::validate_now(&draft);
        if let Some(first) = errors.first() {
            self.notify(NotificationKind::Error, first.to_string());
            return None;
        }
        draft.into_fields()
    }

    /// Enter edit mode for a record, returning the draft that fills the form.
    pub fn begin_edit(&mut self, record: &Graduate) -> GraduateDraft {
        self.editing = Some(record.id.clone());
        GraduateDraft {
            student_id: record.student_id.clone(),
            full_name: record.full_name.clone(),
            program: record.program.clone(),
            cohort: record.cohort.to_string(),
            status: record.status.clone(),
            address: record.address.clone().unwrap_or_default(),
            gender: record.gender.clone().unwrap_or_default(),
            phone: record.phone.clone().unwrap_or_default(),
            email: record.email.clone(),
            employer: record.employer.clone().unwrap_or_default(),
            job_title: record.job_title.clone().unwrap_or_default(),
        }
    }

    /// The id under edit; `None` means the form is in create mode.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Leave edit mode (cancel button or after a successful save).
    pub fn clear_edit(&mut self) {
        self.editing = None;
    }

    /// Arm the delete-confirmation step for a record.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Confirm the armed delete, yielding the id to send to the API.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Dismiss the confirmation without deleting.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Show a banner; replaces whatever banner was up.
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notification = Some(Notification {
            kind,
            message: message.into(),
        });
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Called by the UI once the display duration has elapsed.
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use registry_model::Cohort;

    fn record(id: &str, student_id: &str, name: &str, program: &str) -> Graduate {
        Graduate {
            id: id.to_string(),
            student_id: student_id.to_string(),
            full_name: name.to_string(),
            program: program.to_string(),
            cohort: Cohort::Range {
                start: 2019,
                end: 2023,
            },
            status: "graduated".to_string(),
            address: None,
            gender: None,
            phone: None,
            email: format!("{student_id}@example.com"),
            employer: None,
            job_title: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    fn controller_with_three() -> Controller {
        let mut controller = Controller::new();
        controller.set_records(vec![
            record("a", "20230001", "Jane Smith", "Law"),
            record("b", "20230002", "John Doe", "Accounting"),
            record("c", "20230003", "Ana Lima", "Nursing"),
        ]);
        controller
    }

    #[test]
    fn search_matching_one_field_of_one_record_returns_it() {
        let mut controller = controller_with_three();
        let hits = controller.search("nursing");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c");
    }

    #[test]
    fn search_is_case_insensitive_and_spans_fields() {
        let mut controller = controller_with_three();
        assert_eq!(controller.search("JANE").len(), 1);
        assert_eq!(controller.search("20230002@example").len(), 1);
        assert_eq!(controller.search("2019-2023").len(), 3);
    }

    #[test]
    fn empty_search_restores_the_full_list() {
        let mut controller = controller_with_three();
        controller.search("jane");
        assert_eq!(controller.visible().len(), 1);
        controller.search("  ");
        assert_eq!(controller.visible().len(), 3);
    }

    #[test]
    fn refetch_reapplies_the_active_search() {
        let mut controller = controller_with_three();
        controller.search("law");
        controller.set_records(vec![
            record("a", "20230001", "Jane Smith", "Law"),
            record("d", "20230004", "New Lawyer", "Law"),
        ]);
        assert_eq!(controller.visible().len(), 2);
        assert_eq!(controller.stats_line(), "Found: 2 of 2");
    }

    #[test]
    fn stats_line_tracks_search_state() {
        let mut controller = controller_with_three();
        assert_eq!(controller.stats_line(), "Total: 3");
        controller.search("jane");
        assert_eq!(controller.stats_line(), "Found: 1 of 3");
    }

    #[test]
    fn edit_mode_round_trip() {
        let mut controller = controller_with_three();
        assert_eq!(controller.editing(), None);
        let target = controller.records()[0].clone();
        let draft = controller.begin_edit(&target);
        assert_eq!(controller.editing(), Some("a"));
        assert_eq!(draft.cohort, "2019-2023");
        assert_eq!(draft.full_name, "Jane Smith");
        controller.clear_edit();
        assert_eq!(controller.editing(), None);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut controller = controller_with_three();
        controller.request_delete("b");
        assert_eq!(controller.pending_delete(), Some("b"));
        controller.cancel_delete();
        assert_eq!(controller.confirm_delete(), None);

        controller.request_delete("b");
        assert_eq!(controller.confirm_delete(), Some("b".to_string()));
        assert_eq!(controller.pending_delete(), None);
    }

    #[test]
    fn invalid_submission_surfaces_only_the_first_violation() {
        let mut controller = Controller::new();
        // Empty draft: every rule fails, but the banner carries only the
        // first (student id) message.
        assert!(controller.prepare_submission(GraduateDraft::default()).is_none());
        let banner = controller.notification().unwrap();
        assert_eq!(banner.kind, NotificationKind::Error);
        assert_eq!(banner.message, "student ID is required");
    }

    #[test]
    fn valid_submission_yields_a_normalized_payload() {
        let mut controller = Controller::new();
        let draft = GraduateDraft {
            student_id: "20230001".to_string(),
            full_name: "Jane Smith".to_string(),
            program: "Law".to_string(),
            cohort: "2019-2023".to_string(),
            status: "graduated".to_string(),
            email: " Jane@Example.com ".to_string(),
            ..GraduateDraft::default()
        };
        let fields = controller.prepare_submission(draft).expect("payload");
        assert_eq!(fields.email, "jane@example.com");
        assert!(controller.notification().is_none());
    }

    #[test]
    fn notifications_replace_and_dismiss() {
        let mut controller = Controller::new();
        controller.notify(NotificationKind::Error, "save failed");
        controller.notify(NotificationKind::Success, "graduate saved");
        let banner = controller.notification().unwrap();
        assert_eq!(banner.kind, NotificationKind::Success);
        assert_eq!(banner.message, "graduate saved");
        controller.dismiss_notification();
        assert!(controller.notification().is_none());
    }
}
