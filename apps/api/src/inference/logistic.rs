use serde::{Deserialize, Serialize};

use crate::encoding::{FeatureVector, FEATURE_COUNT};
use crate::inference::{ClassIndex, ModelInvocationError, Predictor};

const MODEL_NAME: &str = "logistic_regression";

/// Multinomial logistic regression over the encoded row.
///
/// Softmax is monotonic, so the predicted class is the argmax of the linear
/// scores; probabilities are never materialised. Ties resolve to the first row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticClassifier {
    /// Class index emitted for each coefficient row.
    pub classes: Vec<ClassIndex>,
    pub coefficients: Vec<[f64; FEATURE_COUNT]>,
    pub intercepts: Vec<f64>,
}

impl LogisticClassifier {
    pub fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("classifier has no classes".to_string());
        }
        if self.coefficients.len() != self.classes.len() {
            return Err(format!(
                "{} coefficient rows for {} classes",
                self.coefficients.len(),
                self.classes.len()
            ));
        }
        if self.intercepts.len() != self.classes.len() {
            return Err(format!(
                "{} intercepts for {} classes",
                self.intercepts.len(),
                self.classes.len()
            ));
        }
        let all_finite = self
            .coefficients
            .iter()
            .flatten()
            .chain(self.intercepts.iter())
            .all(|w| w.is_finite());
        if !all_finite {
            return Err("weights must be finite".to_string());
        }
        Ok(())
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    fn scores<'a>(&'a self, row: &'a FeatureVector) -> impl Iterator<Item = f64> + 'a {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(move |(weights, intercept)| {
                intercept
                    + weights
                        .iter()
                        .zip(row.values())
                        .map(|(w, x)| w * x)
                        .sum::<f64>()
            })
    }
}

impl Predictor for LogisticClassifier {
    type Output = ClassIndex;

    fn name(&self) -> &'static str {
        MODEL_NAME
    }

    fn predict(&self, row: &FeatureVector) -> Result<ClassIndex, ModelInvocationError> {
        let mut best: Option<(usize, f64)> = None;

        for (i, score) in self.scores(row).enumerate() {
            if !score.is_finite() {
                return Err(ModelInvocationError::NonFiniteOutput {
                    model: MODEL_NAME,
                    value: score,
                });
            }
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((i, score));
            }
        }

        let (row_index, _) = best.ok_or_else(|| ModelInvocationError::Failed {
            model: MODEL_NAME,
            message: "no class scores computed".to_string(),
        })?;

        self.classes
            .get(row_index)
            .copied()
            .ok_or_else(|| ModelInvocationError::Failed {
                model: MODEL_NAME,
                message: format!("score row {row_index} has no class"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO: [f64; FEATURE_COUNT] = [0.0; FEATURE_COUNT];

    fn years_weight(w: f64) -> [f64; FEATURE_COUNT] {
        let mut row = ZERO;
        row[2] = w;
        row
    }

    /// Juniors lean "Satisfied" (1), seniors "Very Satisfied" (0).
    fn model() -> LogisticClassifier {
        LogisticClassifier {
            classes: vec![0, 1, 2],
            coefficients: vec![years_weight(0.2), years_weight(0.0), years_weight(-0.1)],
            intercepts: vec![-1.0, 0.5, 0.0],
        }
    }

    #[test]
    fn test_predict_junior_is_satisfied() {
        let row = FeatureVector::new(3, 15, 3.0, 2, 1, 4);
        assert_eq!(model().predict(&row).unwrap(), 1);
    }

    #[test]
    fn test_predict_senior_is_very_satisfied() {
        let row = FeatureVector::new(3, 15, 20.0, 2, 1, 4);
        assert_eq!(model().predict(&row).unwrap(), 0);
    }

    #[test]
    fn test_predict_maps_through_classes() {
        let mut m = model();
        m.classes = vec![4, 3, 2];
        let row = FeatureVector::new(3, 15, 3.0, 2, 1, 4);
        assert_eq!(m.predict(&row).unwrap(), 3);
    }

    #[test]
    fn test_tie_resolves_to_first_class() {
        let m = LogisticClassifier {
            classes: vec![2, 0],
            coefficients: vec![ZERO, ZERO],
            intercepts: vec![0.0, 0.0],
        };
        assert_eq!(m.predict(&FeatureVector::new(0, 0, 0.0, 0, 0, 0)).unwrap(), 2);
    }

    #[test]
    fn test_non_finite_input_is_an_error() {
        let row = FeatureVector::new(3, 15, f64::NAN, 2, 1, 4);
        let err = model().predict(&row).unwrap_err();
        assert!(matches!(err, ModelInvocationError::NonFiniteOutput { .. }));
    }

    #[test]
    fn test_validate_rejects_mismatched_rows() {
        let mut m = model();
        m.intercepts.pop();
        assert!(m.validate().is_err());
        assert!(model().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_classes() {
        let m = LogisticClassifier {
            classes: vec![],
            coefficients: vec![],
            intercepts: vec![],
        };
        assert!(m.validate().is_err());
    }
}
