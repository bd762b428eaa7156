//! JSONL decoding and loaders for Claude Code history and conversation logs
//!
//! # Error Handling Strategy
//!
//! Nothing in this module returns an error to its caller:
//!
//! - **Malformed lines**: Lines that fail to decode are dropped. The count is reported
//!   through `tracing` at debug level and, for the history log, returned alongside the
//!   records by [`history::load_history_with_stats`].
//!
//! - **Missing or unreadable files**: Treated as "no data" and surfaced as an empty list.
//!
//! - **Missing optional fields**: Fall back to defaults (empty label, empty content)
//!   through the lenient deserializers in [`deserializers`].

pub mod conversation;
pub mod deserializers;
pub mod history;
pub mod jsonl;

pub use conversation::{CONVERSATION_READ_LIMIT, conversation_turns, load_conversation};
pub use history::{load_history_entries, load_history_with_stats};
pub use jsonl::{DecodedJsonl, decode_jsonl, parse_jsonl};
