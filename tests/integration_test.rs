/// End-to-end integration tests for the history browser
///
/// These tests verify complete workflows: history → sessions → conversation → markdown
mod common;

use claude_history::indexer::{ProjectFilter, filter_by_project, sort_sessions};
use claude_history::models::{MessageType, SortOrder};
use claude_history::parsers::{CONVERSATION_READ_LIMIT, load_history_with_stats};
use claude_history::plans::load_plans;
use claude_history::render::extract_prompts;
use claude_history::{
    build_sessions, format_messages_as_markdown, get_unique_projects, load_conversation,
    load_history_entries,
};
use common::{
    ClaudeDirBuilder, ConversationEntryBuilder, HistoryEntryBuilder, realistic_claude_dir,
};

#[tokio::test]
async fn test_e2e_history_to_sessions() {
    let claude_dir = realistic_claude_dir();

    let entries = load_history_entries(claude_dir.path()).await;
    assert_eq!(entries.len(), 3);

    let mut sessions = build_sessions(&entries);
    assert_eq!(sessions.len(), 2, "Entries sharing a session id collapse into one session");

    sort_sessions(&mut sessions, SortOrder::Recent);
    assert_eq!(sessions[0].id, "session-a", "Follow-up prompt makes session-a most recent");
    assert_eq!(sessions[0].display, "fix the flaky parser test");
    assert_eq!(sessions[0].project_name, "compiler");

    sort_sessions(&mut sessions, SortOrder::Created);
    assert_eq!(sessions[0].id, "session-b");
}

#[tokio::test]
async fn test_e2e_project_filter() {
    let claude_dir = realistic_claude_dir();
    let entries = load_history_entries(claude_dir.path()).await;

    assert_eq!(get_unique_projects(&entries), vec!["/Users/test/compiler", "/Users/test/website"]);

    let filter = ProjectFilter::Project("/Users/test/website".to_string());
    let sessions = filter_by_project(build_sessions(&entries), &filter);
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].id, "session-b");

    let all = filter_by_project(build_sessions(&entries), &ProjectFilter::All);
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_e2e_conversation_to_markdown() {
    let claude_dir = realistic_claude_dir();
    let entries = load_history_entries(claude_dir.path()).await;
    let session = build_sessions(&entries).into_iter().find(|s| s.id == "session-a").unwrap();

    let messages = load_conversation(claude_dir.path(), &session).await;
    assert_eq!(messages.len(), 5, "Progress record is dropped");
    assert!(messages.iter().all(|m| m.message_type != MessageType::Progress));

    let markdown = format_messages_as_markdown(&messages);
    assert_eq!(
        markdown,
        "### User\nfix the flaky parser test\n\n\
         ### Assistant\nLooking at the test.\n\n> **Read** `/src/parser.rs`\n\n\
         ### User\nnow run the whole suite\n\n\
         ### Assistant\nAll tests pass."
    );
}

#[tokio::test]
async fn test_e2e_prompts_skip_tool_results() {
    let claude_dir = realistic_claude_dir();
    let entries = load_history_entries(claude_dir.path()).await;
    let session = build_sessions(&entries).into_iter().find(|s| s.id == "session-a").unwrap();

    let messages = load_conversation(claude_dir.path(), &session).await;
    let prompts = extract_prompts(&messages);
    assert_eq!(prompts.first_prompt.as_deref(), Some("fix the flaky parser test"));
    assert_eq!(prompts.last_prompt.as_deref(), Some("now run the whole suite"));
}

#[tokio::test]
async fn test_e2e_session_without_log_renders_placeholder() {
    let claude_dir = realistic_claude_dir();
    let entries = load_history_entries(claude_dir.path()).await;
    let session = build_sessions(&entries).into_iter().find(|s| s.id == "session-b").unwrap();

    let messages = load_conversation(claude_dir.path(), &session).await;
    assert!(messages.is_empty());
    assert_eq!(format_messages_as_markdown(&messages), "*No messages found*");
    assert_eq!(extract_prompts(&messages).first_prompt, None);
}

#[tokio::test]
async fn test_e2e_large_log_keeps_opening_and_latest_turns() {
    let project = "/Users/test/big";
    let padding = "x".repeat(1024);

    let mut log = vec![ConversationEntryBuilder::user().text("FIRST PROMPT").uuid("first")];
    for i in 0..3000 {
        log.push(
            ConversationEntryBuilder::assistant()
                .text(&format!("filler {} {}", i, padding))
                .uuid(&format!("filler-{}", i)),
        );
    }
    log.push(ConversationEntryBuilder::user().text("LAST PROMPT").uuid("last"));
    log.push(ConversationEntryBuilder::assistant().text("LAST ANSWER").uuid("answer"));

    let claude_dir = ClaudeDirBuilder::new()
        .with_history_entries(&[HistoryEntryBuilder::new().session_id("big").project(project)])
        .with_session_log(project, "big", &log)
        .build();

    let log_path = claude_dir.path().join("projects").join("-Users-test-big").join("big.jsonl");
    let size = std::fs::metadata(&log_path).unwrap().len();
    assert!(size > CONVERSATION_READ_LIMIT, "Fixture must exceed the read budget");

    let entries = load_history_entries(claude_dir.path()).await;
    let session = &build_sessions(&entries)[0];
    let messages = load_conversation(claude_dir.path(), session).await;

    assert!(messages.len() < log.len(), "Middle of the log is skipped");
    assert_eq!(messages.first().unwrap().uuid, "first");
    assert_eq!(messages.last().unwrap().uuid, "answer");

    let prompts = extract_prompts(&messages);
    assert_eq!(prompts.first_prompt.as_deref(), Some("FIRST PROMPT"));
    assert_eq!(prompts.last_prompt.as_deref(), Some("LAST PROMPT"));

    let mut uuids: Vec<&str> = messages.iter().map(|m| m.uuid.as_str()).collect();
    let total = uuids.len();
    uuids.sort_unstable();
    uuids.dedup();
    assert_eq!(uuids.len(), total, "No line is decoded twice");
}

#[tokio::test]
async fn test_e2e_stats_count_skipped_lines() {
    let valid = HistoryEntryBuilder::new().display("ok").to_json();
    let bad_timestamp = r#"{"display":"bad timestamp","timestamp":true}"#;
    let content = format!("{}\nnot json\n{}\n{}\n", valid, bad_timestamp, valid);
    let claude_dir = ClaudeDirBuilder::new().with_history(&content).build();

    let decoded = load_history_with_stats(claude_dir.path()).await;
    assert_eq!(decoded.records.len(), 2);
    assert_eq!(decoded.skipped, 2);
}

#[tokio::test]
async fn test_e2e_plans_listing() {
    let claude_dir = realistic_claude_dir();

    let plans = load_plans(claude_dir.path()).await;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].name, "dark-mode");
    assert_eq!(plans[0].display_title(), "Dark mode rollout");
}
