//! Chart controllers, their configuration and the text they display.

mod choropleth_chart;
mod choropleth_config;
mod choropleth_render_frame_builder;
mod legend_render_frame_builder;
mod number_format;
pub mod palette;
mod scatter_chart;
mod scatter_config;
mod scatter_render_frame_builder;
mod summary;

pub use choropleth_chart::ChoroplethChart;
pub use choropleth_config::{ChoroplethConfig, ChoroplethElementIds, MIN_GRATICULE_STEP_DEG};
pub use choropleth_render_frame_builder::{RegionValue, resolve_regions};
pub use number_format::{FR_GROUP_SEPARATOR, format_fr};
pub use scatter_chart::{ScatterChart, filter_observations};
pub use scatter_config::{ScatterConfig, ScatterElementIds};
pub use summary::{
    SCATTER_EMPTY_PLACEHOLDER, SCATTER_EMPTY_SUMMARY, choropleth_summary, pluralize,
    scatter_summary,
};
