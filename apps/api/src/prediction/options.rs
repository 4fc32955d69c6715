use serde::Serialize;

use crate::lookup::{CategoryMap, LookupTables};
use crate::models::profile::{DEFAULT_YEARS_EXPERIENCE, MAX_YEARS_EXPERIENCE, MIN_YEARS_EXPERIENCE};
use crate::presentation::Currency;

const DEFAULT_COUNTRY_INDEX: usize = 15;
const DEFAULT_EDUCATION_INDEX: usize = 3;

/// A dropdown: its choices, in order, and which one starts selected.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceList {
    pub choices: Vec<String>,
    pub default_index: usize,
}

impl ChoiceList {
    fn from_map(map: &CategoryMap, default_index: usize) -> Self {
        let choices: Vec<String> = map.labels().map(str::to_string).collect();
        // Fall back to the first choice for tables shorter than the preferred default.
        let default_index = if default_index < choices.len() {
            default_index
        } else {
            0
        };
        Self {
            choices,
            default_index,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// Everything a form needs to offer only valid inputs.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub role: ChoiceList,
    pub country: ChoiceList,
    pub education: ChoiceList,
    pub remote_work: ChoiceList,
    pub org_size: ChoiceList,
    pub years_experience: ExperienceRange,
    pub currencies: Vec<Currency>,
    pub default_currency: Currency,
}

impl FormOptions {
    pub fn from_tables(tables: &LookupTables) -> Self {
        Self {
            role: ChoiceList::from_map(&tables.role, 0),
            country: ChoiceList::from_map(&tables.country, DEFAULT_COUNTRY_INDEX),
            education: ChoiceList::from_map(&tables.education, DEFAULT_EDUCATION_INDEX),
            remote_work: ChoiceList::from_map(&tables.remote_work, 0),
            org_size: ChoiceList::from_map(&tables.org_size, 0),
            years_experience: ExperienceRange {
                min: MIN_YEARS_EXPERIENCE,
                max: MAX_YEARS_EXPERIENCE,
                default: DEFAULT_YEARS_EXPERIENCE,
            },
            currencies: Currency::ALL.to_vec(),
            default_currency: Currency::default(),
        }
    }
}
