//! Ruleproof core library.
//!
//! A conformance harness for an external static-analysis engine: known-good
//! fixture files must come back clean, and known-bad snippets must trigger
//! specific named rules. The engine is a collaborator behind the
//! `engine::AnalysisEngine` trait; no lint rule is implemented here.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `engine`: Engine trait plus subprocess and canned adapters.
//! - `runner`: Batch fixture analysis and clean-run verification.
//! - `snippet`: Rule-fires assertions over inline source text.
//! - `models`: Report, file result, and finding data models.
//! - `error`: Harness error taxonomy.
//! - `output`: Human/JSON printers and diagnostic rendering.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod output;
pub mod runner;
pub mod snippet;
pub mod utils;
