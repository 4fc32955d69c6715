use serde::Serialize;

pub const FEATURE_COUNT: usize = 6;

/// Column names and order shared with both trained models.
/// Reordering these silently corrupts every prediction.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "DevType",
    "Country",
    "YearsCodePro",
    "EdLevel",
    "RemoteWork",
    "OrgSize",
];

pub const ROLE: usize = 0;
pub const COUNTRY: usize = 1;
pub const YEARS_CODE_PRO: usize = 2;
pub const EDUCATION: usize = 3;
pub const REMOTE_WORK: usize = 4;
pub const ORG_SIZE: usize = 5;

/// One encoded model input row, columns in [`FEATURE_COLUMNS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(
        role: u32,
        country: u32,
        years_code_pro: f64,
        education: u32,
        remote_work: u32,
        org_size: u32,
    ) -> Self {
        let mut row = [0.0; FEATURE_COUNT];
        row[ROLE] = f64::from(role);
        row[COUNTRY] = f64::from(country);
        row[YEARS_CODE_PRO] = years_code_pro;
        row[EDUCATION] = f64::from(education);
        row[REMOTE_WORK] = f64::from(remote_work);
        row[ORG_SIZE] = f64::from(org_size);
        Self(row)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, column: usize) -> Option<f64> {
        self.0.get(column).copied()
    }

    /// Value of the column with the given model-facing name.
    #[cfg(test)]
    pub fn column(&self, name: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|c| *c == name)
            .map(|i| self.0[i])
    }
}
