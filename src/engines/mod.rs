// src/engines/mod.rs

pub mod cli;
pub mod libgit2;

use crate::benchmark;
use crate::engine::DiffEngine;
use crate::error::BenchError;
use crate::model::BenchResult;
use chrono::Utc;
use std::path::Path;

pub use cli::GitCliEngine;
pub use libgit2::Git2Engine;

/// One available backend: its report name and the monomorphized pipeline
/// entry point. The table below is the whole engine configuration; the
/// driver owns the selection.
#[derive(Debug)]
pub struct EngineEntry {
    pub name: &'static str,
    pub run: fn(&str, &Path) -> Result<BenchResult, BenchError>,
}

pub const ALL: &[EngineEntry] = &[
    EngineEntry {
        name: Git2Engine::NAME,
        run: run::<Git2Engine>,
    },
    EngineEntry {
        name: GitCliEngine::NAME,
        run: run::<GitCliEngine>,
    },
];

/// Resolves engine names against the table, keeping table order. `None`
/// selects every engine.
pub fn select(names: Option<&[String]>) -> Result<Vec<&'static EngineEntry>, BenchError> {
    let Some(names) = names else {
        return Ok(ALL.iter().collect());
    };
    for name in names {
        if !ALL.iter().any(|e| e.name == name) {
            return Err(BenchError::UnknownEngine(name.clone()));
        }
    }
    Ok(ALL
        .iter()
        .filter(|e| names.iter().any(|n| n == e.name))
        .collect())
}

/// Full pipeline for one engine: clone, linearize, benchmark, collect. The
/// start timestamp is captured before cloning begins.
pub fn run<E: DiffEngine>(url: &str, workdir: &Path) -> Result<BenchResult, BenchError> {
    let when = Utc::now();

    log::info!("[{}] cloning {} into {}", E::NAME, url, workdir.display());
    let engine = E::acquire(url, workdir).map_err(|source| BenchError::Acquire {
        url: url.to_string(),
        source,
    })?;

    let data = benchmark::all_commits(&engine)?;
    log::info!("[{}] collected {} samples", E::NAME, data.len());

    Ok(BenchResult {
        url: url.to_string(),
        when,
        data,
    })
}
