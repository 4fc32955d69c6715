use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Categorical fields
// ────────────────────────────────────────────────────────────────────────────

/// The five categorical profile fields that are label-encoded before inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryField {
    Role,
    Country,
    Education,
    RemoteWork,
    OrgSize,
}

impl CategoryField {
    #[cfg(test)]
    pub const ALL: [CategoryField; 5] = [
        CategoryField::Role,
        CategoryField::Country,
        CategoryField::Education,
        CategoryField::RemoteWork,
        CategoryField::OrgSize,
    ];

    /// Column name the trained models know this feature by.
    #[cfg(test)]
    pub fn column_name(&self) -> &'static str {
        match self {
            CategoryField::Role => "DevType",
            CategoryField::Country => "Country",
            CategoryField::Education => "EdLevel",
            CategoryField::RemoteWork => "RemoteWork",
            CategoryField::OrgSize => "OrgSize",
        }
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CategoryField::Role => "role",
            CategoryField::Country => "country",
            CategoryField::Education => "education",
            CategoryField::RemoteWork => "remote_work",
            CategoryField::OrgSize => "org_size",
        };
        f.write_str(name)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// A categorical value has no entry in its lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} category '{label}'")]
pub struct UnknownCategoryError {
    pub field: CategoryField,
    pub label: String,
}

/// A table could not be built because its entries break the one-to-one invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryMapError {
    #[error("{field} table lists label '{label}' more than once")]
    DuplicateLabel { field: CategoryField, label: String },

    #[error("{field} table assigns code {code} to both '{first}' and '{second}'")]
    DuplicateCode {
        field: CategoryField,
        code: u32,
        first: String,
        second: String,
    },

    #[error("{field} table is empty")]
    Empty { field: CategoryField },
}

// ────────────────────────────────────────────────────────────────────────────
// CategoryMap
// ────────────────────────────────────────────────────────────────────────────

/// One label → code pair as stored in the lookup artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub label: String,
    pub code: u32,
}

/// Immutable label → code table mirroring one feature's training-time encoding.
///
/// Entries keep their artifact order, which is the order the form presents them in.
/// There is no fallback code: an absent label is always an [`UnknownCategoryError`].
#[derive(Debug, Clone)]
pub struct CategoryMap {
    field: CategoryField,
    entries: Vec<CategoryEntry>,
    index: HashMap<String, u32>,
}

impl CategoryMap {
    pub fn new(field: CategoryField, entries: Vec<CategoryEntry>) -> Result<Self, CategoryMapError> {
        if entries.is_empty() {
            return Err(CategoryMapError::Empty { field });
        }

        let mut index = HashMap::with_capacity(entries.len());
        let mut owners: HashMap<u32, &str> = HashMap::with_capacity(entries.len());

        for entry in &entries {
            if let Some(first) = owners.insert(entry.code, &entry.label) {
                return Err(CategoryMapError::DuplicateCode {
                    field,
                    code: entry.code,
                    first: first.to_string(),
                    second: entry.label.clone(),
                });
            }
            if index.insert(entry.label.clone(), entry.code).is_some() {
                return Err(CategoryMapError::DuplicateLabel {
                    field,
                    label: entry.label.clone(),
                });
            }
        }

        Ok(Self {
            field,
            entries,
            index,
        })
    }

    #[cfg(test)]
    pub fn field(&self) -> CategoryField {
        self.field
    }

    pub fn lookup(&self, label: &str) -> Result<u32, UnknownCategoryError> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| UnknownCategoryError {
                field: self.field,
                label: label.to_string(),
            })
    }

    /// Labels in presentation order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
