//! Session and project views over the history log
//!
//! Everything here is a pure function of the entries passed in: sessions are rebuilt
//! from scratch on every call and nothing is cached or persisted.

pub mod projects;
pub mod sessions;

pub use projects::{ProjectFilter, filter_by_project, get_project_name, get_unique_projects};
pub use sessions::{build_sessions, sort_sessions};
