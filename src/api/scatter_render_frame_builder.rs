use std::collections::BTreeSet;

use tracing::trace;

use crate::core::{LinearScale, PlotArea};
use crate::data::PenguinObservation;
use crate::error::ChartResult;
use crate::filters::{FilterCategory, Species};
use crate::render::{
    CirclePrimitive, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive,
};
use crate::surface::{ArtifactId, ChartArtifact, Legend, LegendEntry, Tooltip};

use super::ScatterConfig;
use super::legend_render_frame_builder::{LegendLayout, push_legend};
use super::palette::{GRID, INK};

const X_TICK_SPACING_PX: f64 = 80.0;
const Y_TICK_SPACING_PX: f64 = 35.0;
const TICK_LABEL_GAP_PX: f64 = 6.0;

/// Builds the scatter artifact for an already filtered, non-empty subset.
pub(super) fn build_scatter_artifact(
    id: ArtifactId,
    observations: &[&PenguinObservation],
    config: &ScatterConfig,
) -> ChartResult<ChartArtifact> {
    let area = config.plot_area();
    let drawable: Vec<_> = observations
        .iter()
        .filter_map(|observation| {
            observation
                .culmen_point()
                .map(|point| (*observation, point))
        })
        .collect();

    let x_ticks = tick_count(area.width(), X_TICK_SPACING_PX);
    let y_ticks = tick_count(area.height(), Y_TICK_SPACING_PX);
    let x_scale =
        LinearScale::from_values(drawable.iter().map(|(_, point)| point.x))?.nice(x_ticks);
    // The zero rule keeps 0 inside the vertical domain.
    let y_scale = LinearScale::from_values(
        drawable
            .iter()
            .map(|(_, point)| point.y)
            .chain(std::iter::once(0.0)),
    )?
    .nice(y_ticks);

    let species = species_domain(observations);
    let color_for = |species_value: Species| {
        let index = species
            .iter()
            .position(|candidate| *candidate == species_value)
            .unwrap_or(0);
        config.palette[index % config.palette.len()]
    };

    let mut frame = RenderFrame::new(config.viewport);
    let mut builder = AxisBuilder {
        frame: &mut frame,
        area,
        font_size_px: config.font_size_px,
    };
    builder.push_x_axis(x_scale, x_ticks, config.grid)?;
    builder.push_y_axis(y_scale, y_ticks, config.grid)?;

    let zero_y = y_scale.map(0.0, area.bottom, area.top)?;
    frame.lines.push(LinePrimitive::new(
        area.left, zero_y, area.right, zero_y, 1.0, INK,
    ));

    let mut tooltips = Vec::with_capacity(drawable.len());
    for (observation, point) in &drawable {
        let cx = x_scale.map(point.x, area.left, area.right)?;
        let cy = y_scale.map(point.y, area.bottom, area.top)?;
        let text = observation.tooltip_text();
        frame.circles.push(
            CirclePrimitive::stroked(
                cx,
                cy,
                config.dot_radius,
                config.dot_stroke_width,
                color_for(observation.species),
            )
            .with_title(text.clone()),
        );
        tooltips.push(Tooltip { x: cx, y: cy, text });
    }

    push_axis_labels(&mut frame, area, config);
    trace!(
        observations = observations.len(),
        drawn = drawable.len(),
        "built scatter frame"
    );

    let legend = Legend::Categorical {
        label: config.legend_label.clone(),
        entries: species
            .iter()
            .map(|species_value| LegendEntry {
                color: color_for(*species_value),
                label: species_value.as_str().to_owned(),
            })
            .collect(),
    };
    // Legend row sits in the top margin, right of the y-axis label.
    push_legend(
        &mut frame,
        &legend,
        LegendLayout {
            x: area.left + area.width() / 2.0,
            y: 0.0,
            font_size_px: config.font_size_px,
        },
    );

    Ok(ChartArtifact::new(id, frame, config.aria_label.clone())
        .with_tooltips(tooltips)
        .with_legend(legend))
}

/// Species present in the subset, sorted by name.
fn species_domain(observations: &[&PenguinObservation]) -> Vec<Species> {
    observations
        .iter()
        .map(|observation| observation.species)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn tick_count(span_px: f64, spacing_px: f64) -> usize {
    ((span_px / spacing_px).round() as usize).max(2)
}

struct AxisBuilder<'a> {
    frame: &'a mut RenderFrame,
    area: PlotArea,
    font_size_px: f64,
}

impl AxisBuilder<'_> {
    fn push_x_axis(&mut self, scale: LinearScale, ticks: usize, grid: bool) -> ChartResult<()> {
        let precision = scale.tick_precision(ticks);
        let label_y = self.area.bottom + TICK_LABEL_GAP_PX + self.font_size_px;
        for tick in scale.ticks(ticks) {
            let x = scale.map(tick, self.area.left, self.area.right)?;
            if grid {
                self.frame.lines.push(LinePrimitive::new(
                    x,
                    self.area.top,
                    x,
                    self.area.bottom,
                    1.0,
                    GRID,
                ));
            }
            self.frame.texts.push(TextPrimitive::new(
                format!("{tick:.precision$}"),
                x,
                label_y,
                self.font_size_px,
                INK,
                TextHAlign::Center,
            ));
        }
        Ok(())
    }

    fn push_y_axis(&mut self, scale: LinearScale, ticks: usize, grid: bool) -> ChartResult<()> {
        let precision = scale.tick_precision(ticks);
        let label_x = self.area.left - TICK_LABEL_GAP_PX;
        for tick in scale.ticks(ticks) {
            let y = scale.map(tick, self.area.bottom, self.area.top)?;
            if grid {
                self.frame.lines.push(LinePrimitive::new(
                    self.area.left,
                    y,
                    self.area.right,
                    y,
                    1.0,
                    GRID,
                ));
            }
            self.frame.texts.push(TextPrimitive::new(
                format!("{tick:.precision$}"),
                label_x,
                y + self.font_size_px / 3.0,
                self.font_size_px,
                INK,
                TextHAlign::Right,
            ));
        }
        Ok(())
    }
}

fn push_axis_labels(frame: &mut RenderFrame, area: PlotArea, config: &ScatterConfig) {
    let label_color = INK;
    if !config.x_label.is_empty() {
        frame.texts.push(TextPrimitive::new(
            format!("{} →", config.x_label),
            area.right,
            f64::from(config.viewport.height) - 2.0,
            config.font_size_px,
            label_color,
            TextHAlign::Right,
        ));
    }
    if !config.y_label.is_empty() {
        frame.texts.push(TextPrimitive::new(
            format!("↑ {}", config.y_label),
            area.left - config.margins.left + 2.0,
            area.top - config.font_size_px,
            config.font_size_px,
            label_color,
            TextHAlign::Left,
        ));
    }
}
