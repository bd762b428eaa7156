use std::collections::BTreeSet;

use crate::models::{HistoryEntry, Session};

/// Distinct, non-empty project paths, sorted lexicographically
pub fn get_unique_projects(entries: &[HistoryEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.project.as_str())
        .filter(|p| !p.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Display name of a project: the last segment of its path
pub fn get_project_name(project: &str) -> String {
    project
        .trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Project selection applied to a session list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Project(String),
}

impl ProjectFilter {
    /// Restore a filter from its stored form (`None` means all projects)
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some(p) if !p.is_empty() => ProjectFilter::Project(p.to_string()),
            _ => ProjectFilter::All,
        }
    }

    pub fn to_preference(&self) -> Option<String> {
        match self {
            ProjectFilter::All => None,
            ProjectFilter::Project(p) => Some(p.clone()),
        }
    }

    pub fn matches(&self, session: &Session) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Project(p) => &session.project == p,
        }
    }
}

pub fn filter_by_project(sessions: Vec<Session>, filter: &ProjectFilter) -> Vec<Session> {
    sessions.into_iter().filter(|s| filter.matches(s)).collect()
}
