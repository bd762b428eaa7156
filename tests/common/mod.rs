//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use claude_history::encode_project_path;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a history.jsonl file with the given content
    pub fn with_history(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("history.jsonl"), content)
            .expect("Failed to write history.jsonl");
        self
    }

    /// Add history entries programmatically
    pub fn with_history_entries(self, entries: &[HistoryEntryBuilder]) -> Self {
        let content = entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join("\n");
        self.with_history(&content)
    }

    /// Add a raw conversation log for `session_id` under the project's encoded directory
    pub fn with_session_log_content(self, project: &str, session_id: &str, content: &str) -> Self {
        let dir = self.temp_dir.path().join("projects").join(encode_project_path(project));
        fs::create_dir_all(&dir).expect("Failed to create project dir");
        fs::write(dir.join(format!("{}.jsonl", session_id)), content)
            .expect("Failed to write session log");
        self
    }

    /// Add a conversation log built from message builders
    pub fn with_session_log(
        self,
        project: &str,
        session_id: &str,
        messages: &[ConversationEntryBuilder],
    ) -> Self {
        let content =
            messages.iter().map(|m| m.to_json()).collect::<Vec<_>>().join("\n") + "\n";
        self.with_session_log_content(project, session_id, &content)
    }

    /// Add a plan file `plans/<name>.md`
    pub fn with_plan(self, name: &str, content: &str) -> Self {
        let dir = self.temp_dir.path().join("plans");
        fs::create_dir_all(&dir).expect("Failed to create plans dir");
        fs::write(dir.join(format!("{}.md", name)), content).expect("Failed to write plan");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for history.jsonl entries
pub struct HistoryEntryBuilder {
    display: String,
    timestamp: i64,
    session_id: Option<String>,
    project: String,
}

impl HistoryEntryBuilder {
    /// Create a new history entry with default values
    pub fn new() -> Self {
        Self {
            display: "Test entry".to_string(),
            timestamp: 1_700_000_000_000,
            session_id: Some("session-1".to_string()),
            project: "/Users/test/project".to_string(),
        }
    }

    /// Set the display text
    pub fn display(mut self, display: &str) -> Self {
        self.display = display.to_string();
        self
    }

    /// Set the timestamp (milliseconds since the epoch)
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the session ID
    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = Some(session_id.to_string());
        self
    }

    /// Write the entry without a session ID
    pub fn without_session(mut self) -> Self {
        self.session_id = None;
        self
    }

    /// Set the project path
    pub fn project(mut self, project: &str) -> Self {
        self.project = project.to_string();
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let mut value = json!({
            "display": self.display,
            "timestamp": self.timestamp,
            "project": self.project,
        });
        if let Some(id) = &self.session_id {
            value["sessionId"] = json!(id);
        }
        value.to_string()
    }
}

impl Default for HistoryEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for lines of a per-session conversation log
pub struct ConversationEntryBuilder {
    entry_type: String,
    role: String,
    content: Value,
    timestamp: String,
    session_id: String,
    uuid: String,
}

impl ConversationEntryBuilder {
    /// Create a new user message
    pub fn user() -> Self {
        Self::with_type("user", "user", "Test message")
    }

    /// Create a new assistant message
    pub fn assistant() -> Self {
        Self::with_type("assistant", "assistant", "Test response")
    }

    /// Create a bookkeeping record that is not a conversation turn
    pub fn progress() -> Self {
        Self::with_type("progress", "", "")
    }

    fn with_type(entry_type: &str, role: &str, text: &str) -> Self {
        Self {
            entry_type: entry_type.to_string(),
            role: role.to_string(),
            content: json!(text),
            timestamp: "2024-01-01T12:00:00Z".to_string(),
            session_id: "session-1".to_string(),
            uuid: "uuid-1".to_string(),
        }
    }

    /// Set plain string content
    pub fn text(mut self, text: &str) -> Self {
        self.content = json!(text);
        self
    }

    /// Set content blocks (text, tool_use, tool_result, thinking...)
    pub fn content_blocks(mut self, blocks: Vec<Value>) -> Self {
        self.content = Value::Array(blocks);
        self
    }

    /// A text block
    pub fn text_block(text: &str) -> Value {
        json!({"type": "text", "text": text})
    }

    /// A thinking block
    pub fn thinking_block(text: &str) -> Value {
        json!({"type": "thinking", "thinking": text})
    }

    /// A tool_use block
    pub fn tool_use_block(name: &str, input: Value) -> Value {
        json!({"type": "tool_use", "id": "toolu_1", "name": name, "input": input})
    }

    /// A tool_result block
    pub fn tool_result_block(content: Value) -> Value {
        json!({"type": "tool_result", "tool_use_id": "toolu_1", "content": content})
    }

    /// Set the session ID
    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = session_id.to_string();
        self
    }

    /// Set the UUID
    pub fn uuid(mut self, uuid: &str) -> Self {
        self.uuid = uuid.to_string();
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        json!({
            "type": self.entry_type,
            "uuid": self.uuid,
            "timestamp": self.timestamp,
            "sessionId": self.session_id,
            "message": {"role": self.role, "content": self.content},
        })
        .to_string()
    }
}

/// Helper to create a minimal valid .claude directory
pub fn minimal_claude_dir() -> TempDir {
    ClaudeDirBuilder::new().with_history("").build()
}

/// Helper to create a realistic .claude directory with two projects, a conversation and a plan
pub fn realistic_claude_dir() -> TempDir {
    ClaudeDirBuilder::new()
        .with_history_entries(&[
            HistoryEntryBuilder::new()
                .display("fix the flaky parser test")
                .timestamp(1_700_000_000_000)
                .session_id("session-a")
                .project("/Users/test/compiler"),
            HistoryEntryBuilder::new()
                .display("add dark mode")
                .timestamp(1_700_000_100_000)
                .session_id("session-b")
                .project("/Users/test/website"),
            HistoryEntryBuilder::new()
                .display("now run the whole suite")
                .timestamp(1_700_000_200_000)
                .session_id("session-a")
                .project("/Users/test/compiler"),
        ])
        .with_session_log(
            "/Users/test/compiler",
            "session-a",
            &[
                ConversationEntryBuilder::user().text("fix the flaky parser test"),
                ConversationEntryBuilder::assistant().content_blocks(vec![
                    ConversationEntryBuilder::text_block("Looking at the test."),
                    ConversationEntryBuilder::tool_use_block(
                        "Read",
                        json!({"file_path": "/src/parser.rs"}),
                    ),
                ]),
                ConversationEntryBuilder::user().content_blocks(vec![
                    ConversationEntryBuilder::tool_result_block(json!("fn parse() {}")),
                ]),
                ConversationEntryBuilder::progress(),
                ConversationEntryBuilder::user().text("now run the whole suite"),
                ConversationEntryBuilder::assistant().text("All tests pass."),
            ],
        )
        .with_plan("dark-mode", "# Dark mode rollout\n\n1. Add theme toggle\n")
        .build()
}
