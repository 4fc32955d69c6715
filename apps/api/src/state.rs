use std::sync::Arc;

use crate::prediction::service::PredictionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Lookup tables, both models, and the historical series. Read-only, so no lock.
    pub predictor: Arc<PredictionService>,
}
