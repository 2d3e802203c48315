//! Shared data model for the alumni registry.
//!
//! # Purpose
//! Defines the graduate record, the cohort type, the program/status catalogs,
//! and the legacy-document normalization step shared by the HTTP service and
//! the admin client.
//!
//! # Notes
//! Everything here is plain data: no I/O, no framework types. Both the store
//! backends and the client decode path funnel through [`normalize`] so field
//! naming drift between schema revisions is resolved in exactly one place.
mod catalog;
mod cohort;
mod graduate;
pub mod normalize;

pub use catalog::{PROGRAMS, STATUSES};
pub use cohort::{Cohort, CohortParseError};
pub use graduate::{Graduate, GraduateFields};
