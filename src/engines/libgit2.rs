// src/engines/libgit2.rs

use crate::engine::{CommitId, DiffEngine};
use crate::error::EngineError;
use git2::{DiffOptions, ObjectType, Repository, TreeWalkMode, TreeWalkResult};
use std::path::Path;

/// Engine backed by libgit2 through the git2 crate. The repository is cloned
/// onto disk and every lookup goes through the in-process object database.
///
/// No credential or certificate callbacks are installed; libgit2's
/// validating defaults apply, so anonymous HTTPS and local clones work and
/// unknown host certificates are rejected.
pub struct Git2Engine {
    repo: Repository,
}

impl Git2Engine {
    fn find_commit(&self, id: &CommitId) -> Result<git2::Commit<'_>, EngineError> {
        let oid = git2::Oid::from_str(id.as_str())?;
        Ok(self.repo.find_commit(oid)?)
    }
}

impl DiffEngine for Git2Engine {
    const NAME: &'static str = "libgit2";

    type Tree<'a> = git2::Tree<'a> where Self: 'a;
    type Diff<'a> = git2::Diff<'a> where Self: 'a;

    fn acquire(url: &str, workdir: &Path) -> Result<Self, EngineError> {
        let repo = git2::build::RepoBuilder::new().clone(url, workdir)?;
        Ok(Git2Engine { repo })
    }

    fn head(&self) -> Result<CommitId, EngineError> {
        let commit = self.repo.head()?.peel_to_commit()?;
        Ok(CommitId::new(commit.id().to_string()))
    }

    fn first_parent(&self, commit: &CommitId) -> Result<Option<CommitId>, EngineError> {
        let commit = self.find_commit(commit)?;
        if commit.parent_count() == 0 {
            return Ok(None);
        }
        Ok(Some(CommitId::new(commit.parent_id(0)?.to_string())))
    }

    fn tree<'a>(&'a self, commit: &CommitId) -> Result<Self::Tree<'a>, EngineError> {
        Ok(self.find_commit(commit)?.tree()?)
    }

    fn diff_trees<'a>(
        &'a self,
        old: Option<&Self::Tree<'a>>,
        new: &Self::Tree<'a>,
    ) -> Result<Self::Diff<'a>, EngineError> {
        let mut opts = DiffOptions::new();
        Ok(self.repo.diff_tree_to_tree(old, Some(new), Some(&mut opts))?)
    }

    fn change_count<'a>(&'a self, diff: &Self::Diff<'a>) -> Result<usize, EngineError> {
        Ok(diff.deltas().count())
    }

    fn file_count<'a>(&'a self, tree: &Self::Tree<'a>) -> Result<usize, EngineError> {
        let mut count = 0;
        tree.walk(TreeWalkMode::PreOrder, |_, entry| {
            if entry.kind() == Some(ObjectType::Blob) {
                count += 1;
            }
            TreeWalkResult::Ok
        })?;
        Ok(count)
    }
}
