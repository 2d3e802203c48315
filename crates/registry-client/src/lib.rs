//! Admin client library for the alumni registry.
//!
//! # Purpose
//! Everything the browser admin UI does apart from painting the DOM: talking
//! to the registry HTTP API, holding the fetched record list and the current
//! search subset, validating form drafts before submission, exporting CSV and
//! print-ready HTML, and the client-local login stub.
//!
//! # Notes
//! The controller is an explicit value passed around by the embedding UI, not
//! an ambient singleton, so search and export are testable without a DOM.
pub mod api;
pub mod auth;
pub mod controller;
pub mod export;
pub mod validate;

pub use api::{ApiClient, ClientError};
pub use controller::{Controller, Notification, NotificationKind};
pub use validate::{GraduateDraft, ValidationError};
