//! Turning conversation messages into readable text.

pub mod content;
pub mod markdown;

pub use content::{
    ToolDisplayRule, extract_text_content, format_tool_use, is_tool_result_only,
    tool_display_rule, truncate,
};
pub use markdown::{
    NO_MESSAGES_PLACEHOLDER, PromptSummary, extract_prompts, format_messages_as_markdown,
    genuine_user_prompts,
};
