//! Claude History - Browse Claude Code conversation history and saved plans
//!
//! This library reads the data Claude Code keeps under its configuration directory
//! (`~/.claude/` unless `CLAUDE_CONFIG_DIR` says otherwise). It supports:
//!
//! - Decoding the `history.jsonl` log into entries and grouping them into sessions
//! - Loading per-session conversation logs with a bounded read for very large files
//! - Rendering conversations as markdown and extracting first/last prompts
//! - Listing, showing and deleting saved plans under `plans/`
//!
//! Every loader degrades to empty results on missing or malformed data.
//!
//! # Example
//!
//! ```no_run
//! use claude_history::{build_sessions, format_messages_as_markdown, load_conversation, load_history_entries};
//! use std::path::PathBuf;
//!
//! # async fn demo() {
//! let claude_dir = PathBuf::from("/Users/alice/.claude");
//! let entries = load_history_entries(&claude_dir).await;
//! let sessions = build_sessions(&entries);
//! if let Some(session) = sessions.first() {
//!     let messages = load_conversation(&claude_dir, session).await;
//!     println!("{}", format_messages_as_markdown(&messages));
//! }
//! # }
//! ```

pub mod cli;
pub mod clipboard;
pub mod filters;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod plans;
pub mod preferences;
pub mod render;
pub mod selection;
pub mod utils;

// Re-export commonly used types
pub use clipboard::copy_to_clipboard;
pub use indexer::{build_sessions, get_project_name, get_unique_projects};
pub use models::{ConversationMessage, HistoryEntry, PlanFile, Session};
pub use parsers::{load_conversation, load_history_entries};
pub use render::{extract_text_content, format_messages_as_markdown, is_tool_result_only};
pub use utils::{encode_project_path, format_path_with_tilde, read_bounded};
