// src/model.rs

use crate::engine::CommitId;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// One measurement row: how long the diff between two adjacent commits took,
/// their hashes, the number of changed files and the file count of the
/// bigger of the two trees.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Older commit, or the zero-hash sentinel for the empty tree.
    pub hash_old: CommitId,
    pub hash_new: CommitId,
    /// Files in the commit with more files.
    pub n_files: usize,
    /// Files added, removed or modified between the two commits.
    pub n_changes: usize,
    /// Wall-clock time of the diff computation only.
    pub duration: Duration,
}

/// The full output of one benchmark run: one engine against one repository.
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub url: String,
    /// When the run started, captured before cloning began.
    pub when: DateTime<Utc>,
    /// One sample per history step, oldest to newest.
    pub data: Vec<Sample>,
}
