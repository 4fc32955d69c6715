//! Shared fixtures for unit tests: small in-memory tables and fake predictors.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::comparison::HistoricalSeries;
use crate::encoding::{FeatureEncoder, FeatureVector};
use crate::inference::{ClassIndex, InferenceEngine, ModelInvocationError, Predictor};
use crate::lookup::{CategoryEntry, CategoryField, CategoryMap, LookupTables, SatisfactionCodec};
use crate::models::profile::Profile;
use crate::prediction::service::PredictionService;

fn map(field: CategoryField, labels: &[(&str, u32)]) -> CategoryMap {
    CategoryMap::new(
        field,
        labels
            .iter()
            .map(|(label, code)| CategoryEntry {
                label: label.to_string(),
                code: *code,
            })
            .collect(),
    )
    .unwrap()
}

pub fn sample_tables() -> LookupTables {
    let countries: Vec<(String, u32)> = (0..15)
        .map(|i| (format!("Country {i}"), i))
        .chain([("India".to_string(), 15), ("Germany".to_string(), 16)])
        .collect();
    let countries: Vec<(&str, u32)> = countries.iter().map(|(l, c)| (l.as_str(), *c)).collect();

    LookupTables {
        role: map(
            CategoryField::Role,
            &[
                ("Back-end Developer", 0),
                ("Cloud Engineer", 1),
                ("Data Engineer", 2),
                ("Data Scientist", 3),
            ],
        ),
        country: map(CategoryField::Country, &countries),
        education: map(
            CategoryField::Education,
            &[
                ("Secondary School", 0),
                ("Some College", 1),
                ("Bachelor's", 2),
                ("Master's", 3),
            ],
        ),
        remote_work: map(
            CategoryField::RemoteWork,
            &[("In-person", 0), ("Remote", 1), ("Hybrid", 2)],
        ),
        org_size: map(
            CategoryField::OrgSize,
            &[
                ("Just me", 0),
                ("2-9", 1),
                ("10-19", 2),
                ("20-99", 3),
                ("100-499", 4),
            ],
        ),
        satisfaction: SatisfactionCodec::new(
            [
                "Very Satisfied",
                "Satisfied",
                "Neutral",
                "Dissatisfied",
                "Very Dissatisfied",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
        .unwrap(),
    }
}

pub fn sample_historical() -> HistoricalSeries {
    HistoricalSeries::new(
        vec![0.0, 1.0, 2.0, 2.0, 5.0],
        vec![30_000.0, 42_000.0, 50_000.0, 55_000.0, 80_000.0],
    )
    .unwrap()
}

/// Data Scientist in India, 3 years, Bachelor's, remote, 100-499 employees.
pub fn reference_profile() -> Profile {
    Profile {
        role: "Data Scientist".to_string(),
        country: "India".to_string(),
        years_experience: 3.0,
        education: "Bachelor's".to_string(),
        remote_work: "Remote".to_string(),
        org_size: "100-499".to_string(),
    }
}

pub fn service_with(
    salary: Arc<dyn Predictor<Output = f64>>,
    satisfaction: Arc<dyn Predictor<Output = ClassIndex>>,
) -> PredictionService {
    PredictionService::new(
        FeatureEncoder::new(Arc::new(sample_tables())),
        InferenceEngine::new(salary, satisfaction),
        Arc::new(sample_historical()),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Fake predictors
// ────────────────────────────────────────────────────────────────────────────

/// Records how often it was called and with which row.
#[derive(Default)]
pub struct CallLog {
    calls: AtomicUsize,
    last: Mutex<Option<FeatureVector>>,
}

impl CallLog {
    fn record(&self, row: &FeatureVector) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(*row);
    }
}

pub struct FixedRegressor {
    value: f64,
    log: CallLog,
}

impl FixedRegressor {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            log: CallLog::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.log.calls.load(Ordering::SeqCst)
    }

    pub fn last_row(&self) -> Option<FeatureVector> {
        *self.log.last.lock().unwrap()
    }
}

impl Predictor for FixedRegressor {
    type Output = f64;

    fn name(&self) -> &'static str {
        "fixed_regressor"
    }

    fn predict(&self, row: &FeatureVector) -> Result<f64, ModelInvocationError> {
        self.log.record(row);
        Ok(self.value)
    }
}

pub struct FixedClassifier {
    class: ClassIndex,
    log: CallLog,
}

impl FixedClassifier {
    pub fn new(class: ClassIndex) -> Self {
        Self {
            class,
            log: CallLog::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.log.calls.load(Ordering::SeqCst)
    }

    pub fn last_row(&self) -> Option<FeatureVector> {
        *self.log.last.lock().unwrap()
    }
}

impl Predictor for FixedClassifier {
    type Output = ClassIndex;

    fn name(&self) -> &'static str {
        "fixed_classifier"
    }

    fn predict(&self, row: &FeatureVector) -> Result<ClassIndex, ModelInvocationError> {
        self.log.record(row);
        Ok(self.class)
    }
}

pub struct FailingPredictor<T> {
    _output: PhantomData<fn() -> T>,
}

impl<T> FailingPredictor<T> {
    pub fn new() -> Self {
        Self {
            _output: PhantomData,
        }
    }
}

impl<T> Predictor for FailingPredictor<T> {
    type Output = T;

    fn name(&self) -> &'static str {
        "failing"
    }

    fn predict(&self, _row: &FeatureVector) -> Result<T, ModelInvocationError> {
        Err(ModelInvocationError::Failed {
            model: "failing",
            message: "malformed input shape".to_string(),
        })
    }
}
