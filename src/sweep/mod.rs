//! End-to-end sweep: harvest, report, and (on commit) delete.
//!
//! # Flow
//!
//! 1. Identities are listed once; `--user` is resolved against them
//! 2. Conversations are listed, classified and matched against the name pattern
//! 3. Files, then messages (with thread expansion) are harvested per conversation
//! 4. The deletion set is reported; in commit mode it is executed, messages first
//!
//! Any failure other than rate limiting, or a delete target that is already gone, stops
//! the sweep where it happened.

pub mod runner;

pub use runner::{Plan, SweepOptions, plan_sweep, run_sweep};
