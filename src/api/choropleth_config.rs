use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::filters::ChoroplethDimension;
use crate::render::Color;

use super::palette::{BLUES7, BORDER, GRATICULE};

/// Finest graticule spacing accepted, in degrees.
pub const MIN_GRATICULE_STEP_DEG: f64 = 0.1;

/// Host element ids the choropleth binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoroplethElementIds {
    #[serde(default = "default_year_control")]
    pub year: String,
    #[serde(default = "default_sex_control")]
    pub sex: String,
    #[serde(default = "default_age_control")]
    pub age: String,
    #[serde(default = "default_reset_button")]
    pub reset: String,
    #[serde(default = "default_summary")]
    pub summary: String,
    #[serde(default = "default_plot_root")]
    pub plot_root: String,
}

impl Default for ChoroplethElementIds {
    fn default() -> Self {
        Self {
            year: default_year_control(),
            sex: default_sex_control(),
            age: default_age_control(),
            reset: default_reset_button(),
            summary: default_summary(),
            plot_root: default_plot_root(),
        }
    }
}

impl ChoroplethElementIds {
    #[must_use]
    pub fn control(&self, dimension: ChoroplethDimension) -> &str {
        match dimension {
            ChoroplethDimension::Year => &self.year,
            ChoroplethDimension::Sex => &self.sex,
            ChoroplethDimension::Age => &self.age,
        }
    }

    #[must_use]
    pub fn dimension_for(&self, control_id: &str) -> Option<ChoroplethDimension> {
        ChoroplethDimension::ALL
            .into_iter()
            .find(|dimension| self.control(*dimension) == control_id)
    }
}

/// Layout and color scale of the population choropleth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_margins")]
    pub margins: Margins,
    #[serde(default = "default_legend_label")]
    pub legend_label: String,
    #[serde(default = "default_aria_label")]
    pub aria_label: String,
    /// One color per quantile bucket, lightest first.
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_graticule_color")]
    pub graticule_color: Color,
    /// Spacing of graticule meridians and parallels; `None` disables it.
    #[serde(default = "default_graticule_step_deg")]
    pub graticule_step_deg: Option<f64>,
    #[serde(default)]
    pub element_ids: ChoroplethElementIds,
}

impl Default for ChoroplethConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: default_margins(),
            legend_label: default_legend_label(),
            aria_label: default_aria_label(),
            palette: default_palette(),
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            graticule_color: default_graticule_color(),
            graticule_step_deg: default_graticule_step_deg(),
            element_ids: ChoroplethElementIds::default(),
        }
    }
}

impl ChoroplethConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the bucket colors; the bucket count follows the palette length.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_graticule_step_deg(mut self, step: Option<f64>) -> Self {
        self.graticule_step_deg = step;
        self
    }

    #[must_use]
    pub fn with_element_ids(mut self, element_ids: ChoroplethElementIds) -> Self {
        self.element_ids = element_ids;
        self
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.palette.len()
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::inset(self.viewport, self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.plot_area().is_valid() {
            return Err(ChartError::InvalidData(
                "choropleth margins leave no plot area".to_owned(),
            ));
        }
        if self.palette.is_empty() {
            return Err(ChartError::InvalidData(
                "choropleth palette must not be empty".to_owned(),
            ));
        }
        for color in self
            .palette
            .iter()
            .chain([&self.stroke_color, &self.graticule_color])
        {
            color.validate()?;
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "region stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(step) = self.graticule_step_deg {
            if !step.is_finite() || step < MIN_GRATICULE_STEP_DEG {
                return Err(ChartError::InvalidData(format!(
                    "graticule step must be finite and >= {MIN_GRATICULE_STEP_DEG} degrees"
                )));
            }
        }
        Ok(())
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(640, 560)
}

fn default_margins() -> Margins {
    Margins::new(40.0, 0.0, 40.0, 0.0)
}

fn default_legend_label() -> String {
    "Population (habitants)".to_owned()
}

fn default_aria_label() -> String {
    "Carte choroplèthe des départements français indiquant la population pour l'année, \
     le sexe et la tranche d'âge sélectionnés."
        .to_owned()
}

fn default_palette() -> Vec<Color> {
    BLUES7.to_vec()
}

fn default_stroke_color() -> Color {
    BORDER
}

fn default_stroke_width() -> f64 {
    0.6
}

fn default_graticule_color() -> Color {
    GRATICULE
}

fn default_graticule_step_deg() -> Option<f64> {
    Some(10.0)
}

fn default_year_control() -> String {
    "filter-year".to_owned()
}

fn default_sex_control() -> String {
    "filter-sex".to_owned()
}

fn default_age_control() -> String {
    "filter-age".to_owned()
}

fn default_reset_button() -> String {
    "filters-reset".to_owned()
}

fn default_summary() -> String {
    "population-summary".to_owned()
}

fn default_plot_root() -> String {
    "population-choropleth".to_owned()
}
