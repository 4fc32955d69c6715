use std::sync::Arc;

use thiserror::Error;

use crate::encoding::features::FeatureVector;
use crate::lookup::{CategoryField, LookupTables, UnknownCategoryError};
use crate::models::profile::Profile;

/// The profile could not be turned into a feature vector. No model was invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not encode profile: {0}")]
pub struct EncodingError(#[from] pub UnknownCategoryError);

/// Turns raw profiles into model rows using the injected lookup tables.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    tables: Arc<LookupTables>,
}

impl FeatureEncoder {
    pub fn new(tables: Arc<LookupTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// All-or-nothing: the first unknown label aborts encoding.
    /// Years of experience pass through unchanged.
    pub fn encode(&self, profile: &Profile) -> Result<FeatureVector, EncodingError> {
        let role = self.tables.lookup(CategoryField::Role, &profile.role)?;
        let country = self.tables.lookup(CategoryField::Country, &profile.country)?;
        let education = self
            .tables
            .lookup(CategoryField::Education, &profile.education)?;
        let remote_work = self
            .tables
            .lookup(CategoryField::RemoteWork, &profile.remote_work)?;
        let org_size = self.tables.lookup(CategoryField::OrgSize, &profile.org_size)?;

        Ok(FeatureVector::new(
            role,
            country,
            profile.years_experience,
            education,
            remote_work,
            org_size,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{reference_profile, sample_tables};

    fn encoder() -> FeatureEncoder {
        FeatureEncoder::new(Arc::new(sample_tables()))
    }

    #[test]
    fn test_encode_reference_profile() {
        let v = encoder().encode(&reference_profile()).unwrap();
        assert_eq!(v.values(), &[3.0, 15.0, 3.0, 2.0, 1.0, 4.0]);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let enc = encoder();
        let profile = reference_profile();
        assert_eq!(enc.encode(&profile).unwrap(), enc.encode(&profile).unwrap());
    }

    #[test]
    fn test_encode_keeps_fractional_years() {
        let mut profile = reference_profile();
        profile.years_experience = 4.5;
        let v = encoder().encode(&profile).unwrap();
        assert_eq!(v.column("YearsCodePro"), Some(4.5));
    }

    #[test]
    fn test_encode_slider_bounds() {
        let enc = encoder();
        for years in [0.0, 29.0] {
            let mut profile = reference_profile();
            profile.years_experience = years;
            assert_eq!(enc.encode(&profile).unwrap().column("YearsCodePro"), Some(years));
        }
    }

    #[test]
    fn test_encode_does_not_clamp_years() {
        let mut profile = reference_profile();
        profile.years_experience = 50.0;
        assert_eq!(encoder().encode(&profile).unwrap().column("YearsCodePro"), Some(50.0));
    }

    #[test]
    fn test_encode_unknown_role_fails() {
        let mut profile = reference_profile();
        profile.role = "Astronaut".to_string();
        let err = encoder().encode(&profile).unwrap_err();
        assert_eq!(err.0.field, CategoryField::Role);
        assert_eq!(err.0.label, "Astronaut");
    }

    #[test]
    fn test_encode_unknown_org_size_fails() {
        let mut profile = reference_profile();
        profile.org_size = "huge".to_string();
        let err = encoder().encode(&profile).unwrap_err();
        assert_eq!(err.0.field, CategoryField::OrgSize);
    }
}
