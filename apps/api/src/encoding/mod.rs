// Feature Encoder: raw profile → fixed-order numeric row.

pub mod encoder;
pub mod features;

pub use encoder::{EncodingError, FeatureEncoder};
pub use features::{FeatureVector, FEATURE_COLUMNS, FEATURE_COUNT};
