/// Deletion executor tests
///
/// Covers idempotent deletes, retry on rate limiting and fail-fast on other errors
mod common;

use std::time::{Duration, Instant};

use common::{DAY, FakeSlack, file, message, public, ts_at};
use slack_sweeper::deletion::{DeletionOptions, delete_files, delete_messages, execute};
use slack_sweeper::harvest::RetryPolicy;
use slack_sweeper::models::{DeletionSet, Message};

fn fast() -> DeletionOptions {
    DeletionOptions { retry: RetryPolicy::immediate(), pacing: Duration::ZERO }
}

fn in_conversation(mut message: Message, conversation_id: &str) -> Message {
    message.conversation_id = conversation_id.to_string();
    message
}

fn workspace() -> (FakeSlack, DeletionSet) {
    let old = message(&ts_at(-DAY), "UA", "old");
    let older = message(&ts_at(-2 * DAY), "UB", "older");
    let slack = FakeSlack::new()
        .with_conversation(public("C1", "general"))
        .with_messages("C1", vec![old.clone(), older.clone()])
        .with_files("C1", vec![file("F1", -DAY, "UA"), file("F2", -DAY, "UB")]);
    let set = DeletionSet {
        messages: vec![in_conversation(old, "C1"), in_conversation(older, "C1")],
        files: vec![file("F1", -DAY, "UA"), file("F2", -DAY, "UB")],
    };
    (slack, set)
}

#[test]
fn test_execute_deletes_everything() {
    let (slack, set) = workspace();

    let report = execute(&slack, &set, &fast()).unwrap();

    assert_eq!(report.messages.deleted, 2);
    assert_eq!(report.files.deleted, 2);
    assert_eq!(slack.deleted_files(), vec!["F1", "F2"]);
}

#[test]
fn test_files_are_deleted_after_all_messages() {
    let (slack, set) = workspace();

    execute(&slack, &set, &fast()).unwrap();

    let kinds: Vec<_> = slack
        .delete_log()
        .iter()
        .map(|entry| entry.split(':').next().unwrap_or_default().to_string())
        .collect();
    assert_eq!(kinds, vec!["message", "message", "file", "file"]);
}

#[test]
fn test_second_execution_is_idempotent() {
    let (slack, set) = workspace();

    execute(&slack, &set, &fast()).unwrap();
    let second = execute(&slack, &set, &fast()).unwrap();

    assert_eq!(second.messages.deleted, 0);
    assert_eq!(second.messages.already_absent, 2);
    assert_eq!(second.files.already_absent, 2);
    assert_eq!(second.messages.processed(), 2);
    assert_eq!(slack.deleted_messages().len(), 2);
}

#[test]
fn test_unknown_items_count_as_already_absent() {
    let slack = FakeSlack::new();
    let messages = vec![in_conversation(message(&ts_at(-DAY), "UA", "gone"), "C9")];

    let report = delete_messages(&slack, &messages, &fast()).unwrap();

    assert_eq!(report.deleted, 0);
    assert_eq!(report.already_absent, 1);
}

#[test]
fn test_rate_limited_delete_is_retried() {
    let (slack, set) = workspace();
    slack.rate_limit_next(3);

    let report = delete_files(&slack, &set.files, &fast()).unwrap();

    assert_eq!(report.deleted, 2);
    assert_eq!(slack.calls(), 5);
}

#[test]
fn test_other_errors_stop_the_pass() {
    let (slack, set) = workspace();
    slack.fail_deletes_with("not_authed");

    let err = delete_messages(&slack, &set.messages, &fast()).unwrap_err();

    let chain = format!("{:#}", err);
    assert!(chain.contains("Failed to delete message"));
    assert!(chain.contains("not_authed"));
    assert_eq!(slack.calls(), 1, "no further deletes after a fatal error");
}

#[test]
fn test_pacing_between_deletes() {
    let (slack, set) = workspace();
    let options = DeletionOptions { retry: RetryPolicy::immediate(), pacing: Duration::from_millis(15) };
    let started = Instant::now();

    delete_messages(&slack, &set.messages, &options).unwrap();

    assert!(started.elapsed() >= Duration::from_millis(30));
}

#[test]
fn test_default_options() {
    let options = DeletionOptions::default();
    assert_eq!(options.pacing, Duration::from_millis(50));
    assert_eq!(options.retry.backoff, Duration::from_secs(1));
}
