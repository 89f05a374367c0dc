//! Slack Sweeper - bulk deletion of old Slack messages and files
//!
//! This library harvests every conversation visible to one user token (public and
//! private channels, multi-party and direct messages), selects the messages and files
//! older than a cutoff, and deletes them. It supports:
//!
//! - Cursor pagination over every listing, with retry on rate limiting
//! - Limiting the sweep to conversations whose names match a pattern
//! - Keeping the messages of one user while sweeping everyone else's
//! - Deleting whole reply threads along with their root message
//! - Dry runs that only report what would be deleted
//!
//! # Example
//!
//! ```no_run
//! use slack_sweeper::api::{DEFAULT_API_URL, SlackClient};
//! use slack_sweeper::sweep::{SweepOptions, plan_sweep};
//! use slack_sweeper::timestamps::Cutoff;
//!
//! let client = SlackClient::new(DEFAULT_API_URL, "xoxp-...")?;
//! let plan = plan_sweep(&client, &SweepOptions::new(Cutoff::parse("20200501-0000")?))?;
//! println!("{} messages to delete", plan.deletion_set.messages.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod cli;
pub mod deletion;
pub mod filters;
pub mod harvest;
pub mod models;
pub mod sweep;
pub mod timestamps;
pub mod utils;

// Re-export commonly used types
pub use api::{ApiError, RemoteApi, SlackClient};
pub use models::{Conversation, ConversationKind, DeletionSet, File, Message, RunSummary};
pub use sweep::{SweepOptions, plan_sweep, run_sweep};
pub use timestamps::{Cutoff, SlackTs};
