// Presentation Transform: currency conversion, rounding policy, satisfaction
// label decoding, and the downloadable text report.

pub mod currency;
pub mod report;
pub mod transform;

pub use currency::Currency;
pub use report::{render_report, REPORT_FILE_NAME};
pub use transform::{present, PredictionResult};
