// Prediction API: the end-to-end pipeline, form options, and HTTP handlers.
// Inference is two constant-time model calls, so handlers run it inline.

pub mod handlers;
pub mod options;
pub mod service;
