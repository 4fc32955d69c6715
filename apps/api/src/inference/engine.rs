use std::sync::Arc;

use tracing::debug;

use crate::encoding::FeatureVector;
use crate::inference::{ClassIndex, ModelInvocationError, SalaryPredictor, SatisfactionPredictor};

/// Unprocessed outputs of one inference pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPrediction {
    /// USD-equivalent, unrounded.
    pub salary: f64,
    pub satisfaction_class: ClassIndex,
}

/// Holds both predictors; read-only after startup and shared across requests.
#[derive(Clone)]
pub struct InferenceEngine {
    salary: Arc<SalaryPredictor>,
    satisfaction: Arc<SatisfactionPredictor>,
}

impl InferenceEngine {
    pub fn new(salary: Arc<SalaryPredictor>, satisfaction: Arc<SatisfactionPredictor>) -> Self {
        Self {
            salary,
            satisfaction,
        }
    }

    /// Runs both models on the identical row. Either failure aborts the pass;
    /// there is no partial result and no retry.
    pub fn infer(&self, row: &FeatureVector) -> Result<RawPrediction, ModelInvocationError> {
        let salary = self.salary.predict(row)?;
        let satisfaction_class = self.satisfaction.predict(row)?;

        debug!(
            salary_model = self.salary.name(),
            satisfaction_model = self.satisfaction.name(),
            salary,
            satisfaction_class,
            "inference complete"
        );

        Ok(RawPrediction {
            salary,
            satisfaction_class,
        })
    }
}

impl std::fmt::Debug for InferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceEngine")
            .field("salary", &self.salary.name())
            .field("satisfaction", &self.satisfaction.name())
            .finish()
    }
}
