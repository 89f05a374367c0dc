use anyhow::{Context, Result, bail};
use tracing::debug;

use super::pagination::harvest;
use super::retry::RetryPolicy;
use crate::api::RemoteApi;
use crate::models::{Identity, IdentityDirectory};

/// Workspace members and, when requested, the member the sweep is limited to
#[derive(Debug, Clone)]
pub struct IdentityHarvest {
    pub directory: IdentityDirectory,
    pub target: Option<Identity>,
}

/// List every identity and resolve `handle` (without the `@`) when one is given
///
/// # Errors
///
/// Fails when listing fails, or when `handle` is given but no identity has it.
pub fn harvest_identities(
    api: &dyn RemoteApi,
    policy: &RetryPolicy,
    handle: Option<&str>,
) -> Result<IdentityHarvest> {
    let identities = harvest(policy, "identities", |cursor| api.list_identities(cursor))
        .context("Failed to list users")?;

    let mut target = None;
    if let Some(handle) = handle {
        for identity in &identities {
            if identity.handle == handle {
                target = Some(identity.clone());
            } else {
                debug!(handle = %identity.handle, real_name = %identity.display_name, "Checked user");
            }
        }

        match &target {
            Some(identity) => println!("Found user {} (ID: {})", identity.handle, identity.id),
            None => bail!("could not find user: {}", handle),
        }
    }

    let directory = IdentityDirectory::from_identities(&identities);
    println!("Fetched {} users", directory.len());

    Ok(IdentityHarvest { directory, target })
}
