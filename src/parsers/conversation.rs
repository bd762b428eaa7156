use std::path::Path;

use crate::models::{ConversationMessage, Session};
use crate::parsers::jsonl::parse_jsonl;
use crate::utils::{read_bounded, session_log_path};

/// Byte budget for reading one conversation log (2 MiB)
pub const CONVERSATION_READ_LIMIT: u64 = 2 * 1024 * 1024;

/// Load the user and assistant turns of a session's conversation log.
///
/// The log is read through [`read_bounded`], so oversized files contribute their
/// opening and most recent turns only. Any failure yields an empty list.
pub async fn load_conversation(claude_dir: &Path, session: &Session) -> Vec<ConversationMessage> {
    let path = match session_log_path(claude_dir, &session.project, &session.id) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(session = %session.id, error = %e, "refusing to locate conversation log");
            return Vec::new();
        }
    };

    let content = read_bounded(&path, CONVERSATION_READ_LIMIT).await;
    conversation_turns(parse_jsonl(&content))
}

/// Keep only user/assistant records, dropping progress, snapshot and other bookkeeping lines
pub fn conversation_turns(messages: Vec<ConversationMessage>) -> Vec<ConversationMessage> {
    messages.into_iter().filter(ConversationMessage::is_conversation_turn).collect()
}
