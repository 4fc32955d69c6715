// Startup artifacts: lookup tables, historical series, and both trained models,
// read from JSON files in one directory.

pub mod loader;

pub use loader::ArtifactBundle;
