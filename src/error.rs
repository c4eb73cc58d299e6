// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failures inside one backend. Wrapped into [`BenchError`] by the pipeline
/// together with the commit hashes needed to locate the failing step.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Git(#[from] git2::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("git {0}")]
    GitCommand(String),

    #[error("unexpected git output: {0}")]
    MalformedOutput(String),
}

/// A pipeline failure. Every variant is fatal for the current engine's run;
/// no partial result is emitted.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("cannot clone {url:?}: {source}")]
    Acquire {
        url: String,
        #[source]
        source: EngineError,
    },

    #[error("cannot get the head commit: {source}")]
    Head {
        #[source]
        source: EngineError,
    },

    #[error("cannot resolve commit {hash}: {source}")]
    Traversal {
        hash: String,
        #[source]
        source: EngineError,
    },

    #[error("cannot benchmark diff tree between {old} and {new}: {source}")]
    Diff {
        /// Hash of the older commit, or "the empty repository" at the
        /// boundary step.
        old: String,
        new: String,
        #[source]
        source: EngineError,
    },

    #[error("cannot write report to {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown engine {0:?}")]
    UnknownEngine(String),
}
