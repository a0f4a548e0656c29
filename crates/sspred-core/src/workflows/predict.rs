use crate::core::models::sequence::Sequence;
use crate::core::models::structure::StructureAssignment;
use crate::core::tables::context::ContextMatrixTable;
use crate::core::tables::propensity::PropensityTable;
use crate::engine::assembler::assemble;
use crate::engine::config::{Method, PredictionConfig};
use crate::engine::context_scoring::predict_by_context;
use crate::engine::error::EngineError;
use tracing::{debug, info, instrument};

/// Chou-Fasman prediction with the built-in table.
///
/// Returns one of `H`, `E`, `T` or `C` per input character.
pub fn predict_structure(sequence: &str) -> String {
    assemble(&Sequence::from(sequence), PropensityTable::chou_fasman()).to_string()
}

/// GOR context prediction with the built-in matrices.
///
/// Returns one of `H`, `E` or `T` per input character; the input is upper-cased
/// before lookup.
pub fn context_predict_structure(sequence: &str) -> String {
    predict_by_context(&Sequence::from(sequence), ContextMatrixTable::gor()).to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub method: Method,
    pub assignment: StructureAssignment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub sequence: Sequence,
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Clone)]
pub struct Predictor {
    propensities: PropensityTable,
    context: ContextMatrixTable,
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(
            PropensityTable::chou_fasman().clone(),
            ContextMatrixTable::gor().clone(),
        )
    }
}

impl Predictor {
    pub fn new(propensities: PropensityTable, context: ContextMatrixTable) -> Self {
        Self {
            propensities,
            context,
        }
    }

    /// Loads any table the configuration points at and falls back to the
    /// built-in tables otherwise.
    pub fn from_config(config: &PredictionConfig) -> Result<Self, EngineError> {
        let propensities = match &config.propensity_table_path {
            Some(path) => {
                info!("Loading propensity table from {:?}", path);
                PropensityTable::load(path)?
            }
            None => PropensityTable::chou_fasman().clone(),
        };
        let context = match &config.context_table_path {
            Some(path) => {
                info!("Loading context matrices from {:?}", path);
                ContextMatrixTable::load(path)?
            }
            None => ContextMatrixTable::gor().clone(),
        };
        debug!(
            propensity_entries = propensities.len(),
            "Predictor tables ready."
        );
        Ok(Self::new(propensities, context))
    }

    pub fn propensities(&self) -> &PropensityTable {
        &self.propensities
    }

    pub fn context(&self) -> &ContextMatrixTable {
        &self.context
    }

    pub fn predict(&self, method: Method, sequence: &Sequence) -> StructureAssignment {
        match method {
            Method::ChouFasman => assemble(sequence, &self.propensities),
            Method::Gor => predict_by_context(sequence, &self.context),
        }
    }

    #[instrument(skip_all, name = "prediction_workflow")]
    pub fn run(&self, sequence: &Sequence, methods: &[Method]) -> PredictionReport {
        info!(
            "Predicting secondary structure for {} residues with {} method(s).",
            sequence.len(),
            methods.len()
        );
        let predictions = methods
            .iter()
            .map(|&method| Prediction {
                method,
                assignment: self.predict(method, sequence),
            })
            .collect();
        PredictionReport {
            sequence: sequence.clone(),
            predictions,
        }
    }
}
