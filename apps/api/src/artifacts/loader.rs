use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::comparison::HistoricalSeries;
use crate::encoding::FEATURE_COLUMNS;
use crate::inference::{LogisticClassifier, ObliviousTreeRegressor};
use crate::lookup::{CategoryEntry, CategoryField, CategoryMap, LookupTables, SatisfactionCodec};

pub const LOOKUP_TABLES_FILE: &str = "lookup_tables.json";
pub const HISTORICAL_FILE: &str = "historical.json";
pub const SALARY_MODEL_FILE: &str = "salary_model.json";
pub const SATISFACTION_MODEL_FILE: &str = "satisfaction_model.json";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid artifact {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}

// ────────────────────────────────────────────────────────────────────────────
// On-disk shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LookupTablesFile {
    role: Vec<CategoryEntry>,
    country: Vec<CategoryEntry>,
    education: Vec<CategoryEntry>,
    remote_work: Vec<CategoryEntry>,
    org_size: Vec<CategoryEntry>,
    satisfaction: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct HistoricalFile {
    years_code_pro: Vec<f64>,
    converted_comp_yearly: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct ModelFile<M> {
    feature_names: Vec<String>,
    #[serde(flatten)]
    model: M,
}

// ────────────────────────────────────────────────────────────────────────────
// Bundle
// ────────────────────────────────────────────────────────────────────────────

/// Everything the pipeline loads once at startup.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub tables: LookupTables,
    pub historical: HistoricalSeries,
    pub salary_model: ObliviousTreeRegressor,
    pub satisfaction_model: LogisticClassifier,
}

impl ArtifactBundle {
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        info!("Loading prediction artifacts from {}", dir.display());

        let tables = load_tables(&dir.join(LOOKUP_TABLES_FILE))?;
        info!(
            roles = tables.role.len(),
            countries = tables.country.len(),
            education_levels = tables.education.len(),
            remote_options = tables.remote_work.len(),
            org_sizes = tables.org_size.len(),
            satisfaction_classes = tables.satisfaction.len(),
            "Lookup tables loaded"
        );

        let historical = load_historical(&dir.join(HISTORICAL_FILE))?;
        info!(points = historical.len(), "Historical series loaded");

        let salary_path = dir.join(SALARY_MODEL_FILE);
        let salary_model: ObliviousTreeRegressor = load_model(&salary_path)?;
        salary_model
            .validate()
            .map_err(|reason| invalid(&salary_path, reason))?;
        info!(trees = salary_model.tree_count(), "Salary model loaded");

        let satisfaction_path = dir.join(SATISFACTION_MODEL_FILE);
        let satisfaction_model: LogisticClassifier = load_model(&satisfaction_path)?;
        satisfaction_model
            .validate()
            .map_err(|reason| invalid(&satisfaction_path, reason))?;
        if let Some(class) = satisfaction_model
            .classes
            .iter()
            .find(|c| **c >= tables.satisfaction.len())
        {
            return Err(invalid(
                &satisfaction_path,
                format!(
                    "class {class} has no satisfaction label ({} labels)",
                    tables.satisfaction.len()
                ),
            ));
        }
        info!(
            classes = satisfaction_model.class_count(),
            "Satisfaction model loaded"
        );

        Ok(Self {
            tables,
            historical,
            salary_model,
            satisfaction_model,
        })
    }
}

fn invalid(path: &Path, reason: impl Into<String>) -> ArtifactError {
    ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_tables(path: &Path) -> Result<LookupTables, ArtifactError> {
    let file: LookupTablesFile = read_json(path)?;

    let build = |field, entries| {
        CategoryMap::new(field, entries).map_err(|e| invalid(path, e.to_string()))
    };

    Ok(LookupTables {
        role: build(CategoryField::Role, file.role)?,
        country: build(CategoryField::Country, file.country)?,
        education: build(CategoryField::Education, file.education)?,
        remote_work: build(CategoryField::RemoteWork, file.remote_work)?,
        org_size: build(CategoryField::OrgSize, file.org_size)?,
        satisfaction: SatisfactionCodec::new(file.satisfaction)
            .map_err(|e| invalid(path, e.to_string()))?,
    })
}

fn load_historical(path: &Path) -> Result<HistoricalSeries, ArtifactError> {
    let file: HistoricalFile = read_json(path)?;
    HistoricalSeries::new(file.years_code_pro, file.converted_comp_yearly)
        .map_err(|e| invalid(path, e.to_string()))
}

/// Parses a model file and checks its declared columns against the encoder's.
fn load_model<M: DeserializeOwned>(path: &Path) -> Result<M, ArtifactError> {
    let file: ModelFile<M> = read_json(path)?;
    if file.feature_names != FEATURE_COLUMNS {
        return Err(invalid(
            path,
            format!(
                "feature_names {:?} do not match {:?}",
                file.feature_names, FEATURE_COLUMNS
            ),
        ));
    }
    Ok(file.model)
}
