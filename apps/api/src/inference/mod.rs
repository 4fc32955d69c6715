//! Inference Engine — two independently trained predictors behind one trait.
//!
//! Both consume the same single-row [`FeatureVector`]. The regression variant
//! yields a USD-equivalent salary; the classification variant yields a class
//! index for the satisfaction codec. Model artifacts are adapted by
//! [`ObliviousTreeRegressor`] and [`LogisticClassifier`]; tests plug in fakes.

pub mod engine;
pub mod logistic;
pub mod oblivious_trees;

use thiserror::Error;

use crate::encoding::FeatureVector;

pub use engine::{InferenceEngine, RawPrediction};
pub use logistic::LogisticClassifier;
pub use oblivious_trees::ObliviousTreeRegressor;

/// Index into the satisfaction codec.
pub type ClassIndex = usize;

/// The underlying predictor failed. Fatal for the request, never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelInvocationError {
    #[error("{model} produced a non-finite output ({value})")]
    NonFiniteOutput { model: &'static str, value: f64 },

    #[error("{model} cannot read column {column}; rows have {width} columns")]
    ColumnOutOfRange {
        model: &'static str,
        column: usize,
        width: usize,
    },

    #[error("{model} failed: {message}")]
    Failed { model: &'static str, message: String },
}

/// The shared `predict` capability. Implement this to swap model backends
/// without touching the encoder, the engine, or the handlers.
pub trait Predictor: Send + Sync {
    type Output;

    /// Short backend name for logs and errors.
    fn name(&self) -> &'static str;

    fn predict(&self, row: &FeatureVector) -> Result<Self::Output, ModelInvocationError>;
}

pub type SalaryPredictor = dyn Predictor<Output = f64>;
pub type SatisfactionPredictor = dyn Predictor<Output = ClassIndex>;
