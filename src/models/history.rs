use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// One line of `history.jsonl`: a touch-point of a session, not message content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub display: String,
    /// Missing timestamps read as the Unix epoch so the entry still counts
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub project: String,
    #[serde(
        rename = "sessionId",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_session_id"
    )]
    pub session_id: Option<String>,
}

/// A conversation aggregated from every history entry sharing a session id.
///
/// `display`, `timestamp` and `project` come from the first entry seen for the id;
/// `last_active_at` is the latest timestamp across all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub id: String,
    pub display: String,
    pub timestamp: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
    pub project: String,
    pub project_name: String,
}

impl Session {
    /// Label for list rows. Sessions without a display label show their creation time.
    pub fn title(&self) -> String {
        if self.display.is_empty() {
            format!("[{}]", self.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"))
        } else {
            self.display.clone()
        }
    }

    pub fn resume_command(&self, skip_permissions: bool) -> String {
        if skip_permissions {
            format!("claude --dangerously-skip-permissions --resume {}", self.id)
        } else {
            format!("claude --resume {}", self.id)
        }
    }
}

/// Which timestamp session lists are sorted by (always newest first).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recent activity
    #[default]
    Recent,
    /// Creation time
    Created,
}
