use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// A markdown plan document from the plans directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanFile {
    /// File name without the `.md` extension
    pub name: String,
    /// First top-level heading, if the document has one
    pub title: Option<String>,
    pub path: PathBuf,
    pub content: String,
    pub modified_at: DateTime<Utc>,
}

impl PlanFile {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}
