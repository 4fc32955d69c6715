use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const X_TITLE: &str = "Years of Experience";
pub const Y_TITLE: &str = "Annual Salary (USD)";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("historical series lengths differ: {experience} experience values, {salary} salaries")]
pub struct SeriesLengthMismatch {
    pub experience: usize,
    pub salary: usize,
}

/// Observed experience/salary pairs backing the trend line. Read-only after load.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalSeries {
    experience: Vec<f64>,
    salary: Vec<f64>,
}

impl HistoricalSeries {
    pub fn new(experience: Vec<f64>, salary: Vec<f64>) -> Result<Self, SeriesLengthMismatch> {
        if experience.len() != salary.len() {
            return Err(SeriesLengthMismatch {
                experience: experience.len(),
                salary: salary.len(),
            });
        }
        Ok(Self { experience, salary })
    }

    pub fn len(&self) -> usize {
        self.experience.len()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.experience
            .iter()
            .copied()
            .zip(self.salary.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayPoint {
    pub x: f64,
    pub y: f64,
}

/// Trend line plus one highlighted marker, in a shared coordinate space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayDataset {
    pub trend: Vec<OverlayPoint>,
    pub highlight: OverlayPoint,
    pub x_title: String,
    pub y_title: String,
}

impl OverlayDataset {
    #[cfg(test)]
    pub fn point_count(&self) -> usize {
        self.trend.len() + 1
    }
}

/// Packages the historical curve and the just-computed prediction.
///
/// Historical points keep their order and duplicates; nothing is smoothed,
/// binned, or filtered. `predicted_salary` is the converted figure the user saw.
pub fn build_overlay(
    historical: &HistoricalSeries,
    predicted_experience: f64,
    predicted_salary: f64,
) -> OverlayDataset {
    OverlayDataset {
        trend: historical
            .pairs()
            .map(|(x, y)| OverlayPoint { x, y })
            .collect(),
        highlight: OverlayPoint {
            x: predicted_experience,
            y: predicted_salary,
        },
        x_title: X_TITLE.to_string(),
        y_title: Y_TITLE.to_string(),
    }
}
