//! Prediction pipeline — encode → infer → present → overlay, all or nothing.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::artifacts::ArtifactBundle;
use crate::comparison::{build_overlay, HistoricalSeries, OverlayDataset};
use crate::encoding::{EncodingError, FeatureEncoder};
use crate::inference::{InferenceEngine, ModelInvocationError};
use crate::lookup::UnknownClassError;
use crate::models::profile::Profile;
use crate::prediction::options::FormOptions;
use crate::presentation::{present, Currency, PredictionResult};

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("model invocation failed: {0}")]
    Model(#[from] ModelInvocationError),

    #[error(transparent)]
    UnknownClass(#[from] UnknownClassError),
}

/// One completed request: the result plus the chart data built from it.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub result: PredictionResult,
    pub overlay: OverlayDataset,
}

/// Read-only after construction; shared across requests without locking.
#[derive(Debug, Clone)]
pub struct PredictionService {
    encoder: FeatureEncoder,
    engine: InferenceEngine,
    historical: Arc<HistoricalSeries>,
}

impl PredictionService {
    pub fn new(
        encoder: FeatureEncoder,
        engine: InferenceEngine,
        historical: Arc<HistoricalSeries>,
    ) -> Self {
        Self {
            encoder,
            engine,
            historical,
        }
    }

    pub fn from_bundle(bundle: ArtifactBundle) -> Self {
        Self::new(
            FeatureEncoder::new(Arc::new(bundle.tables)),
            InferenceEngine::new(
                Arc::new(bundle.salary_model),
                Arc::new(bundle.satisfaction_model),
            ),
            Arc::new(bundle.historical),
        )
    }

    pub fn options(&self) -> FormOptions {
        FormOptions::from_tables(self.encoder.tables())
    }

    /// Encoding failures abort before either model runs. Any failure means no
    /// result at all, never a salary without a satisfaction label.
    pub fn predict(
        &self,
        profile: &Profile,
        currency: Currency,
    ) -> Result<Prediction, PredictionError> {
        let row = self.encoder.encode(profile).map_err(|e| {
            warn!("Rejected profile: {e}");
            e
        })?;

        let raw = self.engine.infer(&row).map_err(|e| {
            error!("Inference failed: {e}");
            e
        })?;

        let result = present(&raw, currency, &self.encoder.tables().satisfaction).map_err(|e| {
            error!("Satisfaction decode failed: {e}");
            e
        })?;

        let overlay = build_overlay(
            &self.historical,
            profile.years_experience,
            result.converted_salary,
        );

        info!(
            raw_salary = result.raw_salary,
            currency = %currency,
            satisfaction = %result.satisfaction_label,
            "Prediction complete"
        );

        Ok(Prediction { result, overlay })
    }
}
