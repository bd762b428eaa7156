//! Data models for Claude Code history, conversations and plans.
//!
//! - [`HistoryEntry`] - One touch-point line from history.jsonl
//! - [`Session`] - A conversation aggregated from history entries
//! - [`ConversationMessage`] - One line of a per-session conversation log
//! - [`ContentBlock`] / [`MessageContent`] - Structured message content
//! - [`PlanFile`] - A saved plan document
//!
//! Lenient field deserializers live in [`crate::parsers::deserializers`].

pub mod conversation;
pub mod history;
pub mod plan;

pub use conversation::{ContentBlock, ConversationMessage, MessageBody, MessageContent, MessageType};
pub use history::{HistoryEntry, Session, SortOrder};
pub use plan::PlanFile;
