use chrono::{DateTime, TimeZone};

use crate::models::profile::Profile;
use crate::presentation::transform::PredictionResult;

pub const REPORT_FILE_NAME: &str = "SalSat_Report.txt";

/// Plain-text report for download. Pure interpolation of already-computed values.
pub fn render_report<Tz>(
    profile: &Profile,
    result: &PredictionResult,
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "SalSat Report - {timestamp}

User Profile:
-----------------
Role: {role}
Country: {country}
Experience: {years} years
Education: {education}
Flexibility: {remote}
Org Size: {org_size}

Predictions:
-----------------
Estimated Salary: {salary}
Predicted Satisfaction: {satisfaction}

Thank you for using SalSat
",
        timestamp = generated_at.format("%Y-%m-%d %H:%M:%S"),
        role = profile.role,
        country = profile.country,
        years = format_years(profile.years_experience),
        education = profile.education,
        remote = profile.remote_work,
        org_size = profile.org_size,
        salary = result.display_salary,
        satisfaction = result.satisfaction_label,
    )
}

/// Shortest form that reads back as the same value, keeping one decimal on
/// whole numbers ("3.0", "4.25").
fn format_years(years: f64) -> String {
    if years.is_finite() && years.fract() == 0.0 {
        format!("{years:.1}")
    } else {
        years.to_string()
    }
}
