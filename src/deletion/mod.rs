//! Deletion of a staged [`DeletionSet`](crate::models::DeletionSet).
//!
//! Items are deleted one at a time, messages first, then files. A target that is
//! already gone counts as deleted, so re-running after an interrupted run is safe.

pub mod executor;

pub use executor::{
    DEFAULT_PACING, DeletionOptions, DeletionReport, ExecutionReport, delete_files,
    delete_messages, execute,
};
