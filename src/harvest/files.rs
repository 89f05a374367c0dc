use anyhow::{Context, Result};

use super::pagination::harvest;
use super::retry::RetryPolicy;
use crate::api::RemoteApi;
use crate::filters::SelectionFilter;
use crate::models::{Conversation, File};
use crate::timestamps::pretty_date;

#[derive(Debug, Clone, Default)]
pub struct FileHarvest {
    pub scanned: usize,
    pub kept: usize,
    pub selected: Vec<File>,
}

/// List files in each conversation and select those created before the cutoff
///
/// When `owner_id` is set the listing itself only returns that identity's files.
pub fn harvest_files(
    api: &dyn RemoteApi,
    policy: &RetryPolicy,
    conversations: &[Conversation],
    owner_id: Option<&str>,
    filter: &SelectionFilter,
) -> Result<FileHarvest> {
    let mut result = FileHarvest::default();

    for conversation in conversations {
        if let Some(owner_id) = owner_id {
            println!(
                "Fetching only files owned by user ID {} in channel {} (name: {})",
                owner_id,
                conversation.id,
                conversation.display_name()
            );
        }

        let files = harvest(policy, "files", |cursor| {
            api.list_files(&conversation.id, owner_id, cursor)
        })
        .with_context(|| format!("Failed to list files in channel {}", conversation.id))?;

        for file in files {
            result.scanned += 1;
            if !filter.file_selected(&file) {
                result.kept += 1;
                continue;
            }
            println!(
                "{:04}. Found file {} (created: {})",
                result.selected.len() + 1,
                file.name,
                pretty_date(&file.created_at)
            );
            result.selected.push(file);
        }
    }

    println!("Fetched {} files", result.selected.len());
    Ok(result)
}
