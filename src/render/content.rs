//! Flattening of structured message content into display text.

use serde_json::Value;

use crate::models::{ContentBlock, MessageContent};

/// Longest tool argument shown in a tool-use summary, in characters
pub const TOOL_ARGUMENT_MAX_CHARS: usize = 80;

/// Which input field of a tool call is worth showing, and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDisplayRule {
    pub field: &'static str,
    pub code: bool,
}

static TOOL_DISPLAY_RULES: &[(&str, ToolDisplayRule)] = &[
    ("Read", ToolDisplayRule { field: "file_path", code: true }),
    ("Write", ToolDisplayRule { field: "file_path", code: true }),
    ("Edit", ToolDisplayRule { field: "file_path", code: true }),
    ("Bash", ToolDisplayRule { field: "command", code: true }),
    ("Grep", ToolDisplayRule { field: "pattern", code: true }),
    ("Glob", ToolDisplayRule { field: "pattern", code: true }),
    ("Task", ToolDisplayRule { field: "description", code: false }),
    ("Skill", ToolDisplayRule { field: "skill", code: false }),
];

pub fn tool_display_rule(name: &str) -> Option<ToolDisplayRule> {
    TOOL_DISPLAY_RULES.iter().find(|(tool, _)| *tool == name).map(|(_, rule)| *rule)
}

/// Flatten message content to text.
///
/// Plain string content is returned as is. For block content, text blocks are kept
/// verbatim and tool calls become one-line summaries; tool results, thinking and
/// unknown blocks are left out. Parts are separated by a blank line.
pub fn extract_text_content(content: &MessageContent) -> String {
    let blocks = match content {
        MessageContent::Text(text) => return text.clone(),
        MessageContent::Blocks(blocks) => blocks,
    };

    let mut parts: Vec<String> = Vec::new();
    for block in blocks {
        match block {
            ContentBlock::Text { text } if !text.is_empty() => parts.push(text.clone()),
            ContentBlock::ToolUse { name, input } if !name.is_empty() => {
                parts.push(format_tool_use(name, input.as_ref()));
            }
            _ => {}
        }
    }
    parts.join("\n\n")
}

/// One-line summary of a tool call, e.g. ``> **Bash** `ls -la` ``
pub fn format_tool_use(name: &str, input: Option<&Value>) -> String {
    let value = input
        .zip(tool_display_rule(name))
        .and_then(|(input, rule)| Some((argument_text(input.get(rule.field)?)?, rule)));

    match value {
        None => format!("> **{}**", name),
        Some((text, rule)) => {
            let shown = truncate(&text, TOOL_ARGUMENT_MAX_CHARS);
            if rule.code {
                format!("> **{}** `{}`", name, shown)
            } else {
                format!("> **{}** {}", name, shown)
            }
        }
    }
}

/// Text for a tool argument; null, false, zero and empty strings count as absent
fn argument_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// True when content is a non-empty block list made only of tool results.
///
/// Such user turns are tool output plumbing rather than something the person typed.
pub fn is_tool_result_only(content: &MessageContent) -> bool {
    match content {
        MessageContent::Text(_) => false,
        MessageContent::Blocks(blocks) => {
            !blocks.is_empty()
                && blocks.iter().all(|b| matches!(b, ContentBlock::ToolResult { .. }))
        }
    }
}

/// Cut `text` to `max_chars` characters, marking the cut with `…`
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}…", &text[..cut]),
    }
}
