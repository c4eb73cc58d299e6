// src/engines/cli.rs

use crate::engine::{CommitId, DiffEngine};
use crate::error::EngineError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The id of git's well-known empty tree object, used as the older side of
/// the boundary step.
const EMPTY_TREE_ID: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// Engine that shells out to the `git` binary for every operation. Each diff
/// measurement therefore includes the plumbing process it takes this backend
/// to produce the change list, which is exactly its cost of doing a diff.
pub struct GitCliEngine {
    workdir: PathBuf,
}

impl GitCliEngine {
    /// Runs `git <args>` inside the clone and returns its stdout.
    fn git(&self, args: &[&str]) -> Result<String, EngineError> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.workdir)
            .args(args)
            .output()?;
        if !output.status.success() {
            return Err(EngineError::GitCommand(format!(
                "{}: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl DiffEngine for GitCliEngine {
    const NAME: &'static str = "git-cli";

    type Tree<'a> = String where Self: 'a;
    type Diff<'a> = String where Self: 'a;

    fn acquire(url: &str, workdir: &Path) -> Result<Self, EngineError> {
        let output = Command::new("git")
            .arg("clone")
            .arg("--quiet")
            .arg(url)
            .arg(workdir)
            .output()?;
        if !output.status.success() {
            return Err(EngineError::GitCommand(format!(
                "clone {}: {}",
                url,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(GitCliEngine {
            workdir: workdir.to_path_buf(),
        })
    }

    fn head(&self) -> Result<CommitId, EngineError> {
        let stdout = self.git(&["rev-parse", "HEAD"])?;
        Ok(CommitId::new(stdout.trim()))
    }

    fn first_parent(&self, commit: &CommitId) -> Result<Option<CommitId>, EngineError> {
        // "rev-list --parents -n 1 <c>" prints "<c> [<parent>...]".
        let stdout = self.git(&["rev-list", "--parents", "-n", "1", commit.as_str()])?;
        let mut fields = stdout.split_whitespace();
        match fields.next() {
            Some(first) if first == commit.as_str() => {}
            _ => {
                return Err(EngineError::MalformedOutput(format!(
                    "rev-list --parents for {commit}: {stdout:?}"
                )))
            }
        }
        Ok(fields.next().map(CommitId::new))
    }

    fn tree<'a>(&'a self, commit: &CommitId) -> Result<Self::Tree<'a>, EngineError> {
        let spec = format!("{}^{{tree}}", commit.as_str());
        let stdout = self.git(&["rev-parse", &spec])?;
        Ok(stdout.trim().to_string())
    }

    fn diff_trees<'a>(
        &'a self,
        old: Option<&Self::Tree<'a>>,
        new: &Self::Tree<'a>,
    ) -> Result<Self::Diff<'a>, EngineError> {
        let old = old.map_or(EMPTY_TREE_ID, String::as_str);
        self.git(&["diff-tree", "-r", "--name-only", old, new.as_str()])
    }

    fn change_count<'a>(&'a self, diff: &Self::Diff<'a>) -> Result<usize, EngineError> {
        Ok(diff.lines().filter(|line| !line.is_empty()).count())
    }

    fn file_count<'a>(&'a self, tree: &Self::Tree<'a>) -> Result<usize, EngineError> {
        let stdout = self.git(&["ls-tree", "-r", "--name-only", tree.as_str()])?;
        Ok(stdout.lines().filter(|line| !line.is_empty()).count())
    }
}
