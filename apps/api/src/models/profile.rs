use serde::{Deserialize, Serialize};

/// Slider bounds the form enforces for years of professional experience.
/// They mirror the training data range; the core itself never clamps.
pub const MIN_YEARS_EXPERIENCE: f64 = 0.0;
pub const MAX_YEARS_EXPERIENCE: f64 = 29.0;
pub const DEFAULT_YEARS_EXPERIENCE: f64 = 3.0;

/// Raw, user-facing inputs for a single prediction request. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub role: String,
    pub country: String,
    pub years_experience: f64,
    pub education: String,
    pub remote_work: String,
    pub org_size: String,
}
