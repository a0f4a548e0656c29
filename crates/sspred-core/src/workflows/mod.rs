//! # Workflows Module
//!
//! High-level entry points that run complete predictions.
//!
//! ## Overview
//!
//! Workflows are the top-level API of sspred. They resolve the lookup tables a
//! configuration asks for, run the selected methods over a sequence and return
//! finished, immutable results.
//!
//! ## Architecture
//!
//! - **Prediction Workflow** ([`predict`]) - `Predictor`, which owns one
//!   propensity table and one set of context matrices, plus the one-call helpers
//!   `predict_structure` (Chou-Fasman) and `context_predict_structure` (GOR)
//!   that run against the built-in tables
//!
//! ## Key Capabilities
//!
//! - **Both classical methods** behind a single `Method` switch
//! - **Custom tables** loaded once from CSV or TOML and shared read-only
//! - **Length-preserving output**: every result has exactly one label per input
//!   residue

pub mod predict;
