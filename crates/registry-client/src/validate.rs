//! Client-side form validation.
//!
//! # Purpose
//! Checks an as-typed form draft against the canonical rule set before it is
//! submitted. Violations accumulate in form order; the controller surfaces
//! only the first one as a notification.
//!
//! # Notes
//! The server deliberately does not repeat these checks — it enforces only
//! required-field presence and the student-id uniqueness index. Keep that in
//! mind when reasoning about what the store can contain.
use registry_model::{Cohort, GraduateFields, PROGRAMS, STATUSES};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static STUDENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8}$").expect("student id regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

const MIN_FULL_NAME_LEN: usize = 5;
const MIN_COHORT_YEAR: u16 = 2000;

/// A graduate form exactly as typed: every field a raw string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GraduateDraft {
    pub student_id: String,
    pub full_name: String,
    pub program: String,
    pub cohort: String,
    pub status: String,
    pub address: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub employer: String,
    pub job_title: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("student ID is required")]
    MissingStudentId,
    #[error("student ID must be exactly 8 digits")]
    MalformedStudentId,
    #[error("full name must be at least {MIN_FULL_NAME_LEN} characters")]
    ShortFullName,
    #[error("select a program")]
    MissingProgram,
    #[error("program is not in the catalog")]
    UnknownProgram,
    #[error("cohort is required")]
    MissingCohort,
    #[error("cohort must be a year or a YYYY-YYYY range (e.g. 2019-2023)")]
    MalformedCohort,
    #[error("cohort year must be between {MIN_COHORT_YEAR} and the current year")]
    CohortYearOutOfRange,
    #[error("cohort range must start in {MIN_COHORT_YEAR} or later")]
    CohortStartTooEarly,
    #[error("cohort range ends too far in the future")]
    CohortEndTooLate,
    #[error("cohort range must end after it starts")]
    CohortEndNotAfterStart,
    #[error("select a status")]
    MissingStatus,
    #[error("status is not in the catalog")]
    UnknownStatus,
    #[error("email is required")]
    MissingEmail,
    #[error("enter a valid email address")]
    MalformedEmail,
}

fn check_cohort(raw: &str, current_year: u16, errors: &mut Vec<ValidationError>) {
    if raw.is_empty() {
        errors.push(ValidationError::MissingCohort);
        return;
    }
    let Ok(cohort) = Cohort::from_str(raw) else {
        errors.push(ValidationError::MalformedCohort);
        return;
    };
    match cohort {
        Cohort::Year(year) => {
            if !(MIN_COHORT_YEAR..=current_year).contains(&year) {
                errors.push(ValidationError::CohortYearOutOfRange);
            }
        }
        Cohort::Range { start, end } => {
            if start < MIN_COHORT_YEAR {
                errors.push(ValidationError::CohortStartTooEarly);
            }
            if end > current_year + 5 {
                errors.push(ValidationError::CohortEndTooLate);
            }
            if end <= start {
                errors.push(ValidationError::CohortEndNotAfterStart);
            }
        }
    }
}

/// Run every rule over the draft and collect violations in form order.
///
/// `current_year` is a parameter so the cohort window rules are testable;
/// callers use [`validate_now`].
pub fn validate(draft: &GraduateDraft, current_year: u16) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let student_id = draft.student_id.trim();
    if student_id.is_empty() {
        errors.push(ValidationError::MissingStudentId);
    } else if !STUDENT_ID_RE.is_match(student_id) {
        errors.push(ValidationError::MalformedStudentId);
    }

    if draft.full_name.trim().chars().count() < MIN_FULL_NAME_LEN {
        errors.push(ValidationError::ShortFullName);
    }

    let program = draft.program.trim();
    if program.is_empty() {
        errors.push(ValidationError::MissingProgram);
    } else if !PROGRAMS.contains(&program) {
        errors.push(ValidationError::UnknownProgram);
    }

    check_cohort(draft.cohort.trim(), current_year, &mut errors);

    let status = draft.status.trim();
    if status.is_empty() {
        errors.push(ValidationError::MissingStatus);
    } else if !STATUSES.contains(&status) {
        errors.push(ValidationError::UnknownStatus);
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.push(ValidationError::MissingEmail);
    } else if !EMAIL_RE.is_match(email) {
        errors.push(ValidationError::MalformedEmail);
    }

    // Address, gender, phone, employer, and job title carry no format rules.
    errors
}

/// [`validate`] against the current calendar year.
pub fn validate_now(draft: &GraduateDraft) -> Vec<ValidationError> {
    use chrono::Datelike;
    validate(draft, chrono::Utc::now().year() as u16)
}

impl GraduateDraft {
    /// Convert a validated draft into a submission payload.
    ///
    /// Callers must run [`validate`] first; a draft with a malformed cohort
    /// has no payload representation and yields `None`.
    pub fn into_fields(self) -> Option<GraduateFields> {
        let cohort = Cohort::from_str(self.cohort.trim()).ok()?;
        Some(
            GraduateFields {
                student_id: self.student_id,
                full_name: self.full_name,
                program: self.program,
                cohort,
                status: self.status,
                address: Some(self.address),
                gender: Some(self.gender),
                phone: Some(self.phone),
                email: self.email,
                employer: Some(self.employer),
                job_title: Some(self.job_title),
            }
            .normalized(),
        )
    }
}
