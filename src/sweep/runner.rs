use std::time::Duration;

use anyhow::Result;

use crate::api::RemoteApi;
use crate::deletion::{self, DEFAULT_PACING, DeletionOptions};
use crate::filters::{ChannelPattern, SelectionFilter};
use crate::harvest::{
    RetryPolicy, harvest_conversations, harvest_files, harvest_identities, harvest_messages,
};
use crate::models::{DeletionSet, Identity, RunSummary};
use crate::timestamps::Cutoff;

/// Everything one sweep needs besides the API handle
#[derive(Debug, Clone)]
pub struct SweepOptions {
    pub cutoff: Cutoff,
    /// Handle (without `@`) the sweep is limited to
    pub user: Option<String>,
    pub pattern: ChannelPattern,
    /// Perform deletions; otherwise only report
    pub commit: bool,
    pub retry: RetryPolicy,
    pub pacing: Duration,
}

impl SweepOptions {
    pub fn new(cutoff: Cutoff) -> Self {
        Self {
            cutoff,
            user: None,
            pattern: ChannelPattern::any(),
            commit: false,
            retry: RetryPolicy::default(),
            pacing: DEFAULT_PACING,
        }
    }
}

/// Harvested deletion set and the counters gathered while building it
#[derive(Debug, Clone)]
pub struct Plan {
    pub deletion_set: DeletionSet,
    pub target: Option<Identity>,
    pub summary: RunSummary,
}

/// Harvest everything the sweep would delete, without deleting anything
pub fn plan_sweep(api: &dyn RemoteApi, options: &SweepOptions) -> Result<Plan> {
    let retry = &options.retry;
    let identities = harvest_identities(api, retry, options.user.as_deref())?;
    let target_id = identities.target.as_ref().map(|identity| identity.id.clone());

    let filter = SelectionFilter::new(options.pattern.clone(), options.cutoff, target_id);

    let conversations = harvest_conversations(api, retry, &identities.directory, &filter)?;
    let files =
        harvest_files(api, retry, &conversations.selected, filter.author_id.as_deref(), &filter)?;
    let messages = harvest_messages(api, retry, &conversations.selected, &filter)?;

    let summary = RunSummary {
        identities: identities.directory.len(),
        conversations_seen: conversations.seen,
        conversations_selected: conversations.selected.len(),
        messages_scanned: messages.scanned,
        messages_selected: messages.selected.len(),
        messages_kept: messages.kept,
        thread_replies: messages.thread_replies,
        files_scanned: files.scanned,
        files_selected: files.selected.len(),
        files_kept: files.kept,
        ..RunSummary::default()
    };

    let deletion_set = DeletionSet { messages: messages.selected, files: files.selected };
    Ok(Plan { deletion_set, target: identities.target, summary })
}

/// Plan the sweep, report it, and delete the selected content when committing
pub fn run_sweep(api: &dyn RemoteApi, options: &SweepOptions) -> Result<RunSummary> {
    let plan = plan_sweep(api, options)?;
    let mut summary = plan.summary;

    println!();
    println!(
        "Found {} messages and {} files to delete!",
        plan.deletion_set.messages.len(),
        plan.deletion_set.files.len()
    );
    println!("Conversations considered: {} of {}", summary.conversations_selected, summary.conversations_seen);
    println!("{} messages to delete, {} kept", summary.messages_selected, summary.messages_kept);
    println!("{} files to delete, {} kept", summary.files_selected, summary.files_kept);
    println!();

    if !options.commit {
        println!("Run command again with --commit flag to perform the delete operations!");
        return Ok(summary);
    }

    let deletion_options = DeletionOptions { retry: options.retry, pacing: options.pacing };
    let report = deletion::execute(api, &plan.deletion_set, &deletion_options)?;
    summary.messages_deleted = report.messages.deleted;
    summary.messages_already_absent = report.messages.already_absent;
    summary.files_deleted = report.files.deleted;
    summary.files_already_absent = report.files.already_absent;

    println!();
    println!(
        "Deleted {} messages ({} already gone) and {} files ({} already gone)",
        summary.messages_deleted,
        summary.messages_already_absent,
        summary.files_deleted,
        summary.files_already_absent
    );
    println!("It's a Done Deal!");

    Ok(summary)
}
