use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{ContentBlock, MessageContent};

/// Custom deserializer for timestamp that accepts both integers (ms) and RFC3339 strings
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => {
            // Unix timestamp in milliseconds, occasionally written as a float
            let ms = n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .ok_or_else(|| Error::custom("invalid timestamp"))?;
            DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| Error::custom("timestamp out of range"))
        }
        Value::String(s) => s
            .parse::<DateTime<Utc>>()
            .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp: {}", e))),
        _ => Err(Error::custom("timestamp must be a number or string")),
    }
}

/// Session ids are opaque; a missing, null or empty id deserializes to `None`
pub fn deserialize_session_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<String>::deserialize(deserializer)?;
    Ok(id.filter(|s| !s.trim().is_empty()))
}

/// Conversation timestamps are kept as written; numbers are stringified, null becomes empty
pub fn deserialize_message_timestamp<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::custom("timestamp must be a string or number")),
    }
}

/// Message content of an unexpected shape degrades to empty text instead of
/// rejecting the whole record
pub fn deserialize_content<'de, D>(deserializer: D) -> Result<MessageContent, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(content_from_value(value).unwrap_or_default())
}

/// Nested tool-result content; anything that is not text or blocks is dropped
pub fn deserialize_nested_content<'de, D>(
    deserializer: D,
) -> Result<Option<MessageContent>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(content_from_value(value))
}

/// Blocks are decoded one at a time so a malformed block only drops itself
fn content_from_value(value: Value) -> Option<MessageContent> {
    match value {
        Value::String(text) => Some(MessageContent::Text(text)),
        Value::Array(items) => {
            let blocks = items
                .into_iter()
                .filter_map(|item| {
                    serde_json::from_value::<ContentBlock>(item)
                        .inspect_err(|e| {
                            tracing::trace!(error = %e, "dropping malformed content block")
                        })
                        .ok()
                })
                .collect();
            Some(MessageContent::Blocks(blocks))
        }
        _ => None,
    }
}
