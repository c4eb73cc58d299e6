// src/history.rs

use crate::engine::{CommitId, DiffEngine};
use crate::error::BenchError;

/// Returns a flat version of the repository's history: the first element is
/// the initial commit, the last is the head. At a merge, only the first
/// parent is followed; the other parents are never visited.
pub fn linearize<E: DiffEngine>(engine: &E) -> Result<Vec<CommitId>, BenchError> {
    // The chain is built head-to-root by walking parent 0, then reversed.
    let head = engine.head().map_err(|source| BenchError::Head { source })?;

    let mut chain = vec![head];
    loop {
        let current = &chain[chain.len() - 1];
        let parent = engine
            .first_parent(current)
            .map_err(|source| BenchError::Traversal {
                hash: current.to_string(),
                source,
            })?;
        match parent {
            Some(parent) => chain.push(parent),
            None => break,
        }
    }

    chain.reverse();
    Ok(chain)
}
