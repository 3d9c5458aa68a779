//! plotboard: filter-driven scatter and choropleth charts.
//!
//! Charts are built as backend-agnostic [`render::RenderFrame`]s wrapped in
//! disposable [`surface::ChartArtifact`]s and mounted into a host
//! [`surface::DisplaySurface`]. Control events from the host re-run the
//! render pipeline against datasets that are loaded once and borrowed.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod filters;
pub mod generator;
pub mod render;
pub mod surface;
pub mod telemetry;

pub use api::{ChoroplethChart, ChoroplethConfig, ScatterChart, ScatterConfig};
pub use error::{ChartError, ChartResult};
