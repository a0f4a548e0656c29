//! # Engine Module
//!
//! The classification logic of both prediction methods.
//!
//! ## Overview
//!
//! The Chou-Fasman method examines every window offset of a sequence with three
//! fixed-length detectors and one overlap tie-breaker, then merges the
//! overlapping verdicts into a single label per residue. The GOR method scores
//! each residue independently from a five-residue neighbourhood. Both are pure
//! functions of their inputs and the read-only lookup tables.
//!
//! ## Architecture
//!
//! - **Window Detectors** ([`detectors`]) - Helix (6 residues), sheet
//!   (5 residues) and turn (4 residues) verdicts
//! - **Overlap Classifier** ([`overlap`]) - Dominant class of a 4-residue window
//!   by summed propensity
//! - **Assembler** ([`assembler`]) - Last-write-wins merge of all window
//!   verdicts, coil fill for unlabeled residues
//! - **Context Scoring** ([`context_scoring`]) - Windowed GOR scores and the
//!   per-residue arg-max predictor
//! - **Configuration** ([`config`]) - Method selection and table sources
//! - **Errors** ([`error`]) - Failures surfaced by checked entry points and
//!   table loading
//!
//! ## Assembly Order
//!
//! Offsets are visited from left to right. At each offset the helix, sheet,
//! turn and overlap checks run in that order, and every accepted check
//! overwrites the labels it covers. A later offset, or a later check at the same
//! offset, therefore always wins a shared position.

pub mod assembler;
pub mod config;
pub mod context_scoring;
pub mod detectors;
pub mod error;
pub mod overlap;
