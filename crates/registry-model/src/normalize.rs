//! Legacy-document normalization.
//!
//! # Purpose
//! Earlier schema revisions of the registry stored the same record under
//! drifting field names: the full name as `fullName`, `name`, or split
//! `first_name`/`last_name` pairs; the student ID as `studentId`; the cohort
//! as a bare year number; the record id as `_id`. Instead of re-resolving
//! those aliases in every render/search/export call site, documents pass
//! through this module exactly once at the data-access boundary and come out
//! as canonical [`Graduate`] values.
//!
//! # Notes
//! Resolution is tolerant: a field no revision carries resolves to an empty
//! string (or `None` for optionals), never to an error. Write paths always
//! emit canonical names, so the aliases only matter on reads.
use crate::{Cohort, Graduate};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A graduate document as any schema revision may have produced it.
///
/// Deserialize this from raw JSON, then call [`RawGraduate::normalize`].
#[derive(Debug, Deserialize, Default)]
pub struct RawGraduate {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default, alias = "studentId")]
    pub student_id: Option<String>,
    #[serde(default, alias = "fullName", alias = "name")]
    pub full_name: Option<String>,
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub cohort: Option<Cohort>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub employer: Option<String>,
    #[serde(default, alias = "jobTitle")]
    pub job_title: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Resolve a full name from whichever shape the revision stored.
///
/// Precedence: combined full name, then a joined first/last pair, then empty.
pub fn resolve_full_name(
    full_name: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
) -> String {
    if let Some(name) = full_name {
        let name = name.trim().to_string();
        if !name.is_empty() {
            return name;
        }
    }
    let joined = [first_name, last_name]
        .into_iter()
        .flatten()
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    joined
}

impl RawGraduate {
    /// Collapse this revision-tolerant document into a canonical record.
    pub fn normalize(self) -> Graduate {
        Graduate {
            id: self.id.unwrap_or_default(),
            student_id: self.student_id.unwrap_or_default(),
            full_name: resolve_full_name(self.full_name, self.first_name, self.last_name),
            program: self.program.unwrap_or_default(),
            cohort: self.cohort.unwrap_or(Cohort::Year(0)),
            status: self.status.unwrap_or_else(|| "unknown".to_string()),
            address: self.address,
            gender: self.gender,
            phone: self.phone,
            email: self.email.unwrap_or_default(),
            employer: self.employer,
            job_title: self.job_title,
            created_at: self.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}
