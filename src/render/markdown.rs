use crate::models::{ConversationMessage, MessageType};
use crate::render::content::{extract_text_content, is_tool_result_only};

/// Document returned when a conversation has nothing to show
pub const NO_MESSAGES_PLACEHOLDER: &str = "*No messages found*";

/// Render user and assistant turns as one markdown document.
///
/// Turns without a payload, tool-result-only user turns and turns with no
/// extractable text are skipped. When nothing is left the result is
/// [`NO_MESSAGES_PLACEHOLDER`], which is a valid document rather than an error.
pub fn format_messages_as_markdown(messages: &[ConversationMessage]) -> String {
    let mut sections: Vec<String> = Vec::new();

    for msg in messages {
        let Some(body) = &msg.message else {
            continue;
        };

        let role = match msg.message_type {
            MessageType::User => {
                if is_tool_result_only(&body.content) {
                    continue;
                }
                "User"
            }
            MessageType::Assistant => "Assistant",
            _ => continue,
        };

        let text = extract_text_content(&body.content);
        if text.is_empty() {
            continue;
        }

        sections.push(format!("### {}\n{}", role, text));
    }

    if sections.is_empty() {
        NO_MESSAGES_PLACEHOLDER.to_string()
    } else {
        sections.join("\n\n")
    }
}

/// First and last prompts a person actually typed in a conversation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSummary {
    pub first_prompt: Option<String>,
    /// Only set when the conversation has at least two prompts
    pub last_prompt: Option<String>,
}

/// User turns that carry a payload and are not tool-result plumbing, in order
pub fn genuine_user_prompts(
    messages: &[ConversationMessage],
) -> impl Iterator<Item = &ConversationMessage> {
    messages.iter().filter(|msg| {
        msg.message_type == MessageType::User
            && msg.message.as_ref().is_some_and(|body| !is_tool_result_only(&body.content))
    })
}

pub fn extract_prompts(messages: &[ConversationMessage]) -> PromptSummary {
    let prompts: Vec<String> = genuine_user_prompts(messages)
        .filter_map(|msg| msg.message.as_ref())
        .map(|body| extract_text_content(&body.content))
        .collect();

    PromptSummary {
        first_prompt: prompts.first().cloned(),
        last_prompt: if prompts.len() >= 2 { prompts.last().cloned() } else { None },
    }
}
