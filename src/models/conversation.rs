use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record kind of a conversation log line. Kinds this tool has no use for decode as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    User,
    Assistant,
    Progress,
    FileHistorySnapshot,
    #[serde(other)]
    Other,
}

/// One line of a per-session conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    #[serde(default)]
    pub uuid: String,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_message_timestamp"
    )]
    pub timestamp: String,
    #[serde(rename = "sessionId", default)]
    pub session_id: String,
    #[serde(default)]
    pub message: Option<MessageBody>,
}

impl ConversationMessage {
    /// User and assistant turns; everything else is operational noise.
    pub fn is_conversation_turn(&self) -> bool {
        matches!(self.message_type, MessageType::User | MessageType::Assistant)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_content")]
    pub content: MessageContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    ToolUse {
        #[serde(default)]
        name: String,
        #[serde(default)]
        input: Option<Value>,
    },
    ToolResult {
        #[serde(
            default,
            deserialize_with = "crate::parsers::deserializers::deserialize_nested_content"
        )]
        content: Option<MessageContent>,
    },
    Thinking {
        #[serde(default)]
        thinking: String,
    },
    #[serde(other)]
    Unknown,
}
