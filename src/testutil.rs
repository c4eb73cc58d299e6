// src/testutil.rs

//! Scripted in-memory engine used by the unit tests.

use crate::engine::{CommitId, DiffEngine};
use crate::error::EngineError;
use std::collections::HashMap;
use std::path::Path;

/// A file entry: name plus a blob version, so edits can be scripted without
/// the name changing.
type Entry = (String, u32);

struct MockCommit {
    parents: Vec<String>,
    files: Vec<Entry>,
}

pub struct MockEngine {
    commits: HashMap<String, MockCommit>,
    head: Option<String>,
}

impl MockEngine {
    /// Builds a linear chain, oldest first; each commit's parent is its
    /// predecessor and the last one becomes the head.
    pub fn linear(specs: &[(&str, &[&str])]) -> Self {
        let mut engine = MockEngine {
            commits: HashMap::new(),
            head: None,
        };
        let mut parent: Option<&str> = None;
        for (hash, files) in specs {
            let parents: Vec<&str> = parent.into_iter().collect();
            engine.add_commit(hash, &parents, files);
            parent = Some(hash);
        }
        engine
    }

    /// Adds a commit and makes it the head. Parent hashes are not checked
    /// until the walk reaches them.
    pub fn add_commit(&mut self, hash: &str, parents: &[&str], files: &[&str]) {
        self.insert(hash, parents, files, None);
    }

    /// Same as `add_commit`, but `edited` carries a bumped blob version so a
    /// diff against a tree holding the same name reports a modification.
    pub fn add_commit_with_edit(
        &mut self,
        hash: &str,
        parents: &[&str],
        files: &[&str],
        edited: &str,
    ) {
        self.insert(hash, parents, files, Some(edited));
    }

    fn insert(&mut self, hash: &str, parents: &[&str], files: &[&str], edited: Option<&str>) {
        let files = files
            .iter()
            .map(|name| {
                let version = if Some(*name) == edited { 1 } else { 0 };
                (name.to_string(), version)
            })
            .collect();
        self.commits.insert(
            hash.to_string(),
            MockCommit {
                parents: parents.iter().map(|p| p.to_string()).collect(),
                files,
            },
        );
        self.head = Some(hash.to_string());
    }

    fn commit(&self, id: &CommitId) -> Result<&MockCommit, EngineError> {
        self.commits
            .get(id.as_str())
            .ok_or_else(|| EngineError::MalformedOutput(format!("no such commit {id}")))
    }
}

impl DiffEngine for MockEngine {
    const NAME: &'static str = "mock";

    type Tree<'a> = &'a [Entry] where Self: 'a;
    type Diff<'a> = usize where Self: 'a;

    fn acquire(_url: &str, _workdir: &Path) -> Result<Self, EngineError> {
        Ok(MockEngine {
            commits: HashMap::new(),
            head: None,
        })
    }

    fn head(&self) -> Result<CommitId, EngineError> {
        self.head
            .as_deref()
            .map(CommitId::new)
            .ok_or_else(|| EngineError::MalformedOutput("empty repository".into()))
    }

    fn first_parent(&self, commit: &CommitId) -> Result<Option<CommitId>, EngineError> {
        Ok(self
            .commit(commit)?
            .parents
            .first()
            .map(|p| CommitId::new(p.as_str())))
    }

    fn tree<'a>(&'a self, commit: &CommitId) -> Result<Self::Tree<'a>, EngineError> {
        Ok(&self.commit(commit)?.files)
    }

    fn diff_trees<'a>(
        &'a self,
        old: Option<&Self::Tree<'a>>,
        new: &Self::Tree<'a>,
    ) -> Result<Self::Diff<'a>, EngineError> {
        let old: &[Entry] = old.copied().unwrap_or(&[]);
        let changed = |a: &[Entry], b: &[Entry]| {
            a.iter()
                .filter(|(name, version)| {
                    b.iter().find(|(n, _)| n == name).map(|(_, v)| v) != Some(version)
                })
                .count()
        };
        // Added or modified relative to old, plus removed.
        let added_or_modified = changed(new, old);
        let removed = missing_from(old, new);
        Ok(added_or_modified + removed)
    }

    fn change_count<'a>(&'a self, diff: &Self::Diff<'a>) -> Result<usize, EngineError> {
        Ok(*diff)
    }

    fn file_count<'a>(&'a self, tree: &Self::Tree<'a>) -> Result<usize, EngineError> {
        Ok(tree.len())
    }
}

/// Entries of `a` whose name does not appear in `b` at all.
fn missing_from(a: &[Entry], b: &[Entry]) -> usize {
    a.iter()
        .filter(|(name, _)| !b.iter().any(|(n, _)| n == name))
        .count()
}
