//! # Core Module
//!
//! Fundamental building blocks shared by every prediction method.
//!
//! ## Overview
//!
//! Both prediction methods read a sequence of one-letter residue codes, consult
//! fixed per-residue lookup tables and emit one structural label per residue.
//! This module owns those three concerns and nothing else: it contains no
//! prediction logic.
//!
//! ## Architecture
//!
//! - **Sequence Representation** ([`models`]) - Residues, sequences, structural
//!   labels and finished structure assignments
//! - **Lookup Tables** ([`tables`]) - Chou-Fasman propensities and bend
//!   probabilities, GOR context matrices, and loaders for user-supplied tables
//!
//! ## Unknown Residues
//!
//! Codes outside a table are never rejected. Every table lookup falls back to a
//! named zero-valued default (`UNKNOWN_RESIDUE_PARAMETERS`,
//! `UNKNOWN_RESIDUE_SCORE`), so unknown residues simply contribute nothing to a
//! window. The policy keeps parity with the classical reference behavior; it is
//! not a biological claim.

pub mod models;
pub mod tables;
