use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::filters::ScatterDimension;
use crate::render::Color;

use super::palette::TABLEAU10;

/// Host element ids the scatter chart binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterElementIds {
    #[serde(default = "default_species_control")]
    pub species: String,
    #[serde(default = "default_island_control")]
    pub island: String,
    #[serde(default = "default_sex_control")]
    pub sex: String,
    #[serde(default = "default_reset_button")]
    pub reset: String,
    #[serde(default = "default_summary")]
    pub summary: String,
    #[serde(default = "default_plot_root")]
    pub plot_root: String,
}

impl Default for ScatterElementIds {
    fn default() -> Self {
        Self {
            species: default_species_control(),
            island: default_island_control(),
            sex: default_sex_control(),
            reset: default_reset_button(),
            summary: default_summary(),
            plot_root: default_plot_root(),
        }
    }
}

impl ScatterElementIds {
    #[must_use]
    pub fn control(&self, dimension: ScatterDimension) -> &str {
        match dimension {
            ScatterDimension::Species => &self.species,
            ScatterDimension::Island => &self.island,
            ScatterDimension::Sex => &self.sex,
        }
    }

    /// Dimension bound to `control_id`, if any.
    #[must_use]
    pub fn dimension_for(&self, control_id: &str) -> Option<ScatterDimension> {
        ScatterDimension::ALL
            .into_iter()
            .find(|dimension| self.control(*dimension) == control_id)
    }
}

/// Layout and labelling of the culmen scatter plot.
///
/// Serializable so hosts can keep chart setup next to their page assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_margins")]
    pub margins: Margins,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default = "default_legend_label")]
    pub legend_label: String,
    #[serde(default = "default_aria_label")]
    pub aria_label: String,
    #[serde(default = "default_grid")]
    pub grid: bool,
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f64,
    #[serde(default = "default_dot_stroke_width")]
    pub dot_stroke_width: f64,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default)]
    pub element_ids: ScatterElementIds,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: default_margins(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            legend_label: default_legend_label(),
            aria_label: default_aria_label(),
            grid: default_grid(),
            dot_radius: default_dot_radius(),
            dot_stroke_width: default_dot_stroke_width(),
            font_size_px: default_font_size_px(),
            palette: default_palette(),
            element_ids: ScatterElementIds::default(),
        }
    }
}

impl ScatterConfig {
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

    #[must_use]
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_element_ids(mut self, element_ids: ScatterElementIds) -> Self {
        self.element_ids = element_ids;
        self
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
                "scatter margins leave no plot area".to_owned(),
            ));
        }
        if self.palette.is_empty() {
            return Err(ChartError::InvalidData(
                "scatter palette must not be empty".to_owned(),
            ));
        }
        for color in &self.palette {
            color.validate()?;
        }
        if !self.dot_radius.is_finite() || self.dot_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "dot radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.dot_stroke_width.is_finite() || self.dot_stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "dot stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(640, 460)
}

fn default_margins() -> Margins {
    Margins::new(32.0, 32.0, 30.0, 40.0)
}

fn default_x_label() -> String {
    "Longueur du culmen (mm)".to_owned()
}

fn default_y_label() -> String {
    "Profondeur du culmen (mm)".to_owned()
}

fn default_legend_label() -> String {
    "Espece".to_owned()
}

fn default_aria_label() -> String {
    "Nuage de points comparant la longueur et la profondeur du culmen des manchots. \
     Chaque point represente un manchot et sa couleur indique l'espece."
        .to_owned()
}

fn default_grid() -> bool {
    true
}

fn default_dot_radius() -> f64 {
    3.0
}

fn default_dot_stroke_width() -> f64 {
    1.5
}

fn default_font_size_px() -> f64 {
    10.0
}

fn default_palette() -> Vec<Color> {
    TABLEAU10.to_vec()
}

fn default_species_control() -> String {
    "filter-species".to_owned()
}

fn default_island_control() -> String {
    "filter-island".to_owned()
}

fn default_sex_control() -> String {
    "filter-sex".to_owned()
}

fn default_reset_button() -> String {
    "filter-reset".to_owned()
}

fn default_summary() -> String {
    "filter-summary".to_owned()
}

fn default_plot_root() -> String {
    "penguin-scatter".to_owned()
}
