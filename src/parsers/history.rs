use std::path::Path;

use crate::models::HistoryEntry;
use crate::parsers::jsonl::{DecodedJsonl, decode_jsonl};
use crate::utils::history_path;

/// Load every entry of `<claude_dir>/history.jsonl`.
///
/// A missing or unreadable history log yields an empty list; malformed lines are skipped.
pub async fn load_history_entries(claude_dir: &Path) -> Vec<HistoryEntry> {
    load_history_with_stats(claude_dir).await.records
}

/// Like [`load_history_entries`], also reporting how many lines could not be decoded
pub async fn load_history_with_stats(claude_dir: &Path) -> DecodedJsonl<HistoryEntry> {
    let path = history_path(claude_dir);
    match tokio::fs::read(&path).await {
        Ok(bytes) => decode_jsonl(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            tracing::debug!(path = ?path, error = %e, "history log unavailable");
            DecodedJsonl { records: Vec::new(), skipped: 0 }
        }
    }
}
