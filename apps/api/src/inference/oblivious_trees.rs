//! Oblivious decision-tree ensemble — the exported form of the boosted salary regressor.
//!
//! Every tree applies the same split at each depth, so a row's leaf is addressed
//! by a bitmask: bit `i` is set when `row[split_i.feature] > split_i.border`.
//! The prediction is `bias + scale * Σ leaf_value`.

use serde::{Deserialize, Serialize};

use crate::encoding::{FeatureVector, FEATURE_COUNT};
use crate::inference::{ModelInvocationError, Predictor};

const MODEL_NAME: &str = "oblivious_trees";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub feature: usize,
    pub border: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObliviousTree {
    pub splits: Vec<Split>,
    pub leaf_values: Vec<f64>,
}

impl ObliviousTree {
    fn leaf_index(&self, row: &FeatureVector) -> Result<usize, ModelInvocationError> {
        let mut index = 0usize;
        for (depth, split) in self.splits.iter().enumerate() {
            let value = row
                .get(split.feature)
                .ok_or(ModelInvocationError::ColumnOutOfRange {
                    model: MODEL_NAME,
                    column: split.feature,
                    width: FEATURE_COUNT,
                })?;
            if value > split.border {
                index |= 1 << depth;
            }
        }
        Ok(index)
    }

    fn evaluate(&self, row: &FeatureVector) -> Result<f64, ModelInvocationError> {
        let index = self.leaf_index(row)?;
        self.leaf_values
            .get(index)
            .copied()
            .ok_or_else(|| ModelInvocationError::Failed {
                model: MODEL_NAME,
                message: format!(
                    "leaf {index} missing; tree has {} leaves",
                    self.leaf_values.len()
                ),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObliviousTreeRegressor {
    pub bias: f64,
    #[serde(default = "unit_scale")]
    pub scale: f64,
    pub trees: Vec<ObliviousTree>,
}

fn unit_scale() -> f64 {
    1.0
}

impl ObliviousTreeRegressor {
    /// Structural checks run once at load time, so a well-formed model never
    /// fails on a well-formed row.
    pub fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("ensemble has no trees".to_string());
        }
        if !self.bias.is_finite() || !self.scale.is_finite() {
            return Err("bias and scale must be finite".to_string());
        }
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.splits.len() >= usize::BITS as usize {
                return Err(format!("tree {t} is too deep ({} splits)", tree.splits.len()));
            }
            let expected = 1usize << tree.splits.len();
            if tree.leaf_values.len() != expected {
                return Err(format!(
                    "tree {t} has {} leaf values, expected {expected}",
                    tree.leaf_values.len()
                ));
            }
            if let Some(split) = tree.splits.iter().find(|s| s.feature >= FEATURE_COUNT) {
                return Err(format!(
                    "tree {t} splits on column {}, rows have {FEATURE_COUNT}",
                    split.feature
                ));
            }
        }
        Ok(())
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl Predictor for ObliviousTreeRegressor {
    type Output = f64;

    fn name(&self) -> &'static str {
        MODEL_NAME
    }

    fn predict(&self, row: &FeatureVector) -> Result<f64, ModelInvocationError> {
        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.evaluate(row)?;
        }

        let value = self.bias + self.scale * sum;
        if !value.is_finite() {
            return Err(ModelInvocationError::NonFiniteOutput {
                model: MODEL_NAME,
                value,
            });
        }
        Ok(value)
    }
}
