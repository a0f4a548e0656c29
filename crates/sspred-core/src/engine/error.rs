use thiserror::Error;

use super::config::ConfigError;
use crate::core::tables::TableLoadError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{detector} window must hold exactly {expected} residues, got {actual}")]
    WindowLength {
        detector: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to load lookup table: {source}")]
    Table {
        #[from]
        source: TableLoadError,
    },

    #[error("Invalid prediction configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
