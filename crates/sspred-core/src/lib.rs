//! # sspred Core Library
//!
//! Heuristic prediction of protein secondary structure (helix, sheet, turn, coil)
//! from an amino-acid sequence, using the classical Chou-Fasman propensity method
//! and a simplified GOR context-window method.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that data, algorithms and
//! user-facing entry points stay separate and testable.
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Residue`, `Sequence`,
//!   `StructureAssignment`) and the fixed lookup tables (`PropensityTable`,
//!   `ContextMatrixTable`) together with their loaders.
//!
//! - **[`engine`]: The Logic Core.** The window detectors, the overlap
//!   classifier, the label assembler that merges overlapping window verdicts,
//!   and the context-scoring engine. Every function here is pure.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together behind
//!   `Predictor` and the one-call helpers [`predict_structure`] and
//!   [`context_predict_structure`].

pub mod core;
pub mod engine;
pub mod workflows;

pub use workflows::predict::{context_predict_structure, predict_structure};
