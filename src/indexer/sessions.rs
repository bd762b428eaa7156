//! Folds history entries into sessions.

use std::collections::HashMap;

use crate::indexer::projects::get_project_name;
use crate::models::{HistoryEntry, Session, SortOrder};

/// Build one [`Session`] per distinct session id, in first-seen order.
///
/// The first entry for an id fixes `display`, `timestamp` and `project`; later
/// entries only move `last_active_at` forward. Entries without a session id are
/// skipped. Sorting is left to the caller (see [`sort_sessions`]).
///
/// # Examples
///
/// ```
/// use claude_history::build_sessions;
/// use claude_history::models::HistoryEntry;
///
/// let entries: Vec<HistoryEntry> = serde_json::from_str(r#"[
///     {"display":"start","timestamp":1000,"project":"/w/app","sessionId":"s1"},
///     {"display":"more","timestamp":5000,"project":"/w/app","sessionId":"s1"}
/// ]"#)?;
/// let sessions = build_sessions(&entries);
/// assert_eq!(sessions.len(), 1);
/// assert_eq!(sessions[0].display, "start");
/// assert_eq!(sessions[0].last_active_at.timestamp_millis(), 5000);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn build_sessions(entries: &[HistoryEntry]) -> Vec<Session> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut sessions: Vec<Session> = Vec::new();

    for entry in entries {
        let Some(id) = entry.session_id.as_deref() else {
            continue;
        };

        match positions.get(id).copied() {
            Some(pos) => {
                let session = &mut sessions[pos];
                if entry.timestamp > session.last_active_at {
                    session.last_active_at = entry.timestamp;
                }
            }
            None => {
                positions.insert(id, sessions.len());
                sessions.push(Session {
                    id: id.to_string(),
                    display: entry.display.clone(),
                    timestamp: entry.timestamp,
                    last_active_at: entry.timestamp,
                    project: entry.project.clone(),
                    project_name: get_project_name(&entry.project),
                });
            }
        }
    }

    sessions
}

/// Sort sessions newest first by last activity or by creation time
pub fn sort_sessions(sessions: &mut [Session], order: SortOrder) {
    match order {
        SortOrder::Recent => sessions.sort_by(|a, b| b.last_active_at.cmp(&a.last_active_at)),
        SortOrder::Created => sessions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
    }
}
