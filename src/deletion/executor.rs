use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::api::{ApiError, RemoteApi};
use crate::harvest::{RetryPolicy, call_with_retry};
use crate::models::{DeletionSet, File, Message};
use crate::timestamps::pretty_date;

/// Pause between consecutive deletes
pub const DEFAULT_PACING: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionOptions {
    pub retry: RetryPolicy,
    pub pacing: Duration,
}

impl Default for DeletionOptions {
    fn default() -> Self {
        Self { retry: RetryPolicy::default(), pacing: DEFAULT_PACING }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionReport {
    pub deleted: usize,
    pub already_absent: usize,
}

impl DeletionReport {
    pub fn processed(&self) -> usize {
        self.deleted + self.already_absent
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub messages: DeletionReport,
    pub files: DeletionReport,
}

enum Outcome {
    Deleted,
    AlreadyAbsent,
}

fn delete_idempotent<F>(policy: &RetryPolicy, op: F) -> Result<Outcome, ApiError>
where
    F: FnMut() -> Result<(), ApiError>,
{
    match call_with_retry(policy, op) {
        Ok(()) => Ok(Outcome::Deleted),
        Err(err) if err.is_not_found() => Ok(Outcome::AlreadyAbsent),
        Err(err) => Err(err),
    }
}

fn pace(options: &DeletionOptions) {
    if !options.pacing.is_zero() {
        thread::sleep(options.pacing);
    }
}

pub fn delete_messages(
    api: &dyn RemoteApi,
    messages: &[Message],
    options: &DeletionOptions,
) -> Result<DeletionReport> {
    let mut report = DeletionReport::default();

    for (i, message) in messages.iter().enumerate() {
        let outcome = delete_idempotent(&options.retry, || {
            api.delete_message(&message.conversation_id, &message.timestamp)
        })
        .with_context(|| {
            format!(
                "Failed to delete message {} in channel {}",
                message.timestamp, message.conversation_id
            )
        })?;

        match outcome {
            Outcome::Deleted => {
                report.deleted += 1;
                println!(
                    "{:04}. Deleted message ID {} in channel ID {}",
                    i + 1,
                    message.timestamp,
                    message.conversation_id
                );
            }
            Outcome::AlreadyAbsent => {
                report.already_absent += 1;
                println!(
                    "{:04}. Message ID {} in channel ID {} was already deleted",
                    i + 1,
                    message.timestamp,
                    message.conversation_id
                );
            }
        }

        pace(options);
    }

    info!(deleted = report.deleted, already_absent = report.already_absent, "Messages processed");
    Ok(report)
}

pub fn delete_files(
    api: &dyn RemoteApi,
    files: &[File],
    options: &DeletionOptions,
) -> Result<DeletionReport> {
    let mut report = DeletionReport::default();

    for (i, file) in files.iter().enumerate() {
        let outcome = delete_idempotent(&options.retry, || api.delete_file(&file.id))
            .with_context(|| format!("Failed to delete file {} ({})", file.id, file.name))?;

        match outcome {
            Outcome::Deleted => {
                report.deleted += 1;
                println!(
                    "{:04}. Deleted file named {} (created: {})",
                    i + 1,
                    file.name,
                    pretty_date(&file.created_at)
                );
            }
            Outcome::AlreadyAbsent => {
                report.already_absent += 1;
                println!("{:04}. File named {} was already deleted", i + 1, file.name);
            }
        }

        pace(options);
    }

    info!(deleted = report.deleted, already_absent = report.already_absent, "Files processed");
    Ok(report)
}

/// Delete everything in the set: all messages, then all files
pub fn execute(
    api: &dyn RemoteApi,
    set: &DeletionSet,
    options: &DeletionOptions,
) -> Result<ExecutionReport> {
    let messages = delete_messages(api, &set.messages, options)?;
    let files = delete_files(api, &set.files, options)?;
    Ok(ExecutionReport { messages, files })
}
