// Comparison Overlay: historical trend + single predicted point for the chart.

pub mod overlay;

pub use overlay::{build_overlay, HistoricalSeries, OverlayDataset};
