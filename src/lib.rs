// src/lib.rs

//! Benchmarks how long it takes to compute the set of changed files between
//! successive commits of a git repository, once per available backend
//! engine, and writes one fixed-format report per engine.
//!
//! The pipeline is written once against the [`engine::DiffEngine`] trait:
//! [`history`] linearizes the first-parent chain, [`benchmark`] times one
//! tree diff per adjacent pair (plus the empty-tree boundary step), and
//! [`report`] serializes the collected [`model::BenchResult`].

pub mod benchmark;
pub mod cli;
pub mod engine;
pub mod engines;
pub mod error;
pub mod history;
pub mod model;
pub mod report;

#[cfg(test)]
mod testutil;
