//! Fixed program and status catalogs offered by the admin form.
//!
//! The service does not enforce membership; the client-side validator does.

pub const PROGRAMS: &[&str] = &[
    "Computer Systems Engineering",
    "Industrial Engineering",
    "Business Administration",
    "Accounting",
    "Nursing",
    "Law",
    "Architecture",
];

pub const STATUSES: &[&str] = &[
    "graduated",
    "degree awarded",
    "employed",
    "continuing studies",
    "unknown",
];
