use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactId(u64);

impl ArtifactId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Hover text anchored at a pixel position.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
}

/// Color key shown next to a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Legend {
    /// One swatch per category.
    Categorical {
        label: String,
        entries: Vec<LegendEntry>,
    },
    /// Ordered color ramp with the thresholds separating buckets.
    Quantile {
        label: String,
        colors: Vec<Color>,
        thresholds: Vec<f64>,
    },
}

impl Legend {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Categorical { label, .. } | Self::Quantile { label, .. } => label,
        }
    }
}

/// Disposable visual produced by one render pass.
///
/// Exactly one artifact is mounted per chart region; the owning
/// [`ArtifactSlot`](crate::surface::ArtifactSlot) removes it before the next
/// one is installed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    id: ArtifactId,
    frame: RenderFrame,
    tooltips: Vec<Tooltip>,
    legend: Option<Legend>,
    aria_label: String,
}

impl ChartArtifact {
    #[must_use]
    pub fn new(id: ArtifactId, frame: RenderFrame, aria_label: impl Into<String>) -> Self {
        Self {
            id,
            frame,
            tooltips: Vec::new(),
            legend: None,
            aria_label: aria_label.into(),
        }
    }

    #[must_use]
    pub fn with_tooltips(mut self, tooltips: Vec<Tooltip>) -> Self {
        self.tooltips = tooltips;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn id(&self) -> ArtifactId {
        self.id
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn tooltips(&self) -> &[Tooltip] {
        &self.tooltips
    }

    #[must_use]
    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    #[must_use]
    pub fn aria_label(&self) -> &str {
        &self.aria_label
    }

    /// Draws the artifact's frame with `renderer`.
    pub fn render_with<R: Renderer + ?Sized>(&self, renderer: &mut R) -> ChartResult<()> {
        renderer.render(&self.frame)
    }
}
