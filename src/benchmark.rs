// src/benchmark.rs

use crate::engine::{CommitId, DiffEngine};
use crate::error::{BenchError, EngineError};
use crate::history;
use crate::model::Sample;
use indicatif::ProgressBar;
use std::time::Instant;

/// Label used in diff errors when the older side is the empty tree.
const EMPTY_SIDE: &str = "the empty repository";

/// Benchmarks every step of the repository's linearized history, including
/// the boundary step from the empty tree to the initial commit. One sample
/// per step, oldest to newest.
pub fn all_commits<E: DiffEngine>(engine: &E) -> Result<Vec<Sample>, BenchError> {
    let commits = history::linearize(engine)?;

    let bar = ProgressBar::new(commits.len() as u64);
    bar.set_message("Benchmarking commits");

    let mut samples = Vec::with_capacity(commits.len());
    let mut older: Option<&CommitId> = None;
    for newer in &commits {
        samples.push(diff_tree(engine, older, newer)?);
        older = Some(newer);
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(samples)
}

/// Measures the time to compare the trees of two commits. If the old commit
/// is absent, the new one is compared against the empty tree.
fn diff_tree<'e, E: DiffEngine>(
    engine: &'e E,
    older: Option<&CommitId>,
    newer: &CommitId,
) -> Result<Sample, BenchError> {
    let wrap = |source: EngineError| BenchError::Diff {
        old: older.map_or_else(|| EMPTY_SIDE.to_string(), CommitId::to_string),
        new: newer.to_string(),
        source,
    };

    // Tree resolution is deliberately outside the timed window, so engines
    // with different lookup costs stay comparable.
    let old_tree: Option<E::Tree<'e>> = match older {
        Some(commit) => Some(engine.tree(commit).map_err(wrap)?),
        None => None,
    };
    let new_tree: E::Tree<'e> = engine.tree(newer).map_err(wrap)?;

    let start = Instant::now();
    let diff = engine.diff_trees(old_tree.as_ref(), &new_tree);
    let duration = start.elapsed();
    let diff = diff.map_err(wrap)?;

    let n_changes = engine.change_count(&diff).map_err(wrap)?;

    let old_files = match &old_tree {
        Some(tree) => engine.file_count(tree).map_err(wrap)?,
        None => 0,
    };
    let new_files = engine.file_count(&new_tree).map_err(wrap)?;

    Ok(Sample {
        hash_old: older.cloned().unwrap_or_else(CommitId::zero),
        hash_new: newer.clone(),
        n_files: old_files.max(new_files),
        n_changes,
        duration,
    })
}
