// src/engine.rs

use crate::error::EngineError;
use std::fmt;
use std::path::Path;

/// Hex object hash of a commit, as reported by the backing engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(hex: impl Into<String>) -> Self {
        CommitId(hex.into())
    }

    /// Sentinel standing in for "no commit" / the empty tree.
    pub fn zero() -> Self {
        CommitId("0".repeat(40))
    }

    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One repository-access backend. The pipeline is written once against this
/// trait; each backend only has to expose head resolution, first-parent
/// traversal, tree loading, tree diffing and file counting.
///
/// `diff_trees` is the single timed operation, so it must do nothing beyond
/// producing the diff; counting the changed entries happens afterwards in
/// `change_count`.
pub trait DiffEngine {
    const NAME: &'static str;

    /// A resolved tree snapshot, borrowed from the engine.
    type Tree<'a>
    where
        Self: 'a;

    /// The raw output of one diff computation, counted separately.
    type Diff<'a>
    where
        Self: 'a;

    /// Clone `url` into `workdir`, which is private to this run.
    fn acquire(url: &str, workdir: &Path) -> Result<Self, EngineError>
    where
        Self: Sized;

    fn head(&self) -> Result<CommitId, EngineError>;

    /// Parent 0 of `commit`, or `None` for a root commit. Secondary merge
    /// parents are never followed.
    fn first_parent(&self, commit: &CommitId) -> Result<Option<CommitId>, EngineError>;

    fn tree<'a>(&'a self, commit: &CommitId) -> Result<Self::Tree<'a>, EngineError>;

    /// Compute the diff between `old` and `new`. `None` means the empty tree.
    fn diff_trees<'a>(
        &'a self,
        old: Option<&Self::Tree<'a>>,
        new: &Self::Tree<'a>,
    ) -> Result<Self::Diff<'a>, EngineError>;

    /// Number of files added, removed or modified in `diff`.
    fn change_count<'a>(&'a self, diff: &Self::Diff<'a>) -> Result<usize, EngineError>;

    /// Number of file entries in `tree`, counted recursively.
    fn file_count<'a>(&'a self, tree: &Self::Tree<'a>) -> Result<usize, EngineError>;
}
