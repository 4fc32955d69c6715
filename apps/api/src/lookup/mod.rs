// Lookup Tables: label encodings for the categorical features and the
// satisfaction class codec. Built once from artifacts, never mutated.

pub mod category_map;
pub mod satisfaction;

pub use category_map::{CategoryEntry, CategoryField, CategoryMap, UnknownCategoryError};
pub use satisfaction::{SatisfactionCodec, UnknownClassError};

/// Every encoding table the pipeline needs, one per categorical field plus the codec.
#[derive(Debug, Clone)]
pub struct LookupTables {
    pub role: CategoryMap,
    pub country: CategoryMap,
    pub education: CategoryMap,
    pub remote_work: CategoryMap,
    pub org_size: CategoryMap,
    pub satisfaction: SatisfactionCodec,
}

impl LookupTables {
    pub fn table(&self, field: CategoryField) -> &CategoryMap {
        match field {
            CategoryField::Role => &self.role,
            CategoryField::Country => &self.country,
            CategoryField::Education => &self.education,
            CategoryField::RemoteWork => &self.remote_work,
            CategoryField::OrgSize => &self.org_size,
        }
    }

    pub fn lookup(&self, field: CategoryField, label: &str) -> Result<u32, UnknownCategoryError> {
        self.table(field).lookup(label)
    }
}
