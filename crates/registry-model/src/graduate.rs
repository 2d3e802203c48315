//! Graduate record definitions.
//!
//! # Purpose
//! Defines the stored graduate record and the editable field set used as the
//! create/update payload by the HTTP API and the admin client.
use crate::Cohort;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored graduate record.
///
/// `id` and `created_at` are store-assigned and immutable; everything else is
/// replaced wholesale on update.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Graduate {
    pub id: String,
    pub student_id: String,
    pub full_name: String,
    pub program: String,
    #[schema(value_type = String, example = "2019-2023")]
    pub cohort: Cohort,
    pub status: String,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub employer: Option<String>,
    pub job_title: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The editable fields of a graduate record.
///
/// Serves as both the create and the full-replace update payload. Missing
/// required fields fail deserialization, which is the only server-side
/// validation beyond the store's uniqueness index.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct GraduateFields {
    pub student_id: String,
    pub full_name: String,
    pub program: String,
    #[schema(value_type = String, example = "2019-2023")]
    pub cohort: Cohort,
    pub status: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
    #[serde(default)]
    pub employer: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
}

fn clean(value: String) -> String {
    value.trim().to_string()
}

fn clean_opt(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl GraduateFields {
    /// Field hygiene applied once before a payload reaches a store backend:
    /// whitespace trimmed everywhere, email lower-cased, empty optionals
    /// collapsed to `None`.
    pub fn normalized(self) -> Self {
        Self {
            student_id: clean(self.student_id),
            full_name: clean(self.full_name),
            program: clean(self.program),
            cohort: self.cohort,
            status: clean(self.status),
            address: clean_opt(self.address),
            gender: clean_opt(self.gender),
            phone: clean_opt(self.phone),
            email: clean(self.email).to_lowercase(),
            employer: clean_opt(self.employer),
            job_title: clean_opt(self.job_title),
        }
    }
}

impl Graduate {
    /// Assemble a record from store-assigned identity plus editable fields.
    pub fn from_fields(id: String, created_at: DateTime<Utc>, fields: GraduateFields) -> Self {
        Self {
            id,
            student_id: fields.student_id,
            full_name: fields.full_name,
            program: fields.program,
            cohort: fields.cohort,
            status: fields.status,
            address: fields.address,
            gender: fields.gender,
            phone: fields.phone,
            email: fields.email,
            employer: fields.employer,
            job_title: fields.job_title,
            created_at,
        }
    }

    /// The editable field set of this record.
    pub fn fields(&self) -> GraduateFields {
        GraduateFields {
            student_id: self.student_id.clone(),
            full_name: self.full_name.clone(),
            program: self.program.clone(),
            cohort: self.cohort,
            status: self.status.clone(),
            address: self.address.clone(),
            gender: self.gender.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            employer: self.employer.clone(),
            job_title: self.job_title.clone(),
        }
    }
}
