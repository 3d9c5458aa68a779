use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::{MercatorProjection, PlotArea, QuantileScale};
use crate::data::{FeatureCollection, PolygonCoordinates, PopulationDataset, ResolvedValue};
use crate::error::ChartResult;
use crate::filters::ChoroplethFilters;
use crate::render::{LinePrimitive, PolygonPrimitive, RenderFrame, Ring};
use crate::surface::{ArtifactId, ChartArtifact, Legend, Tooltip};

use super::ChoroplethConfig;
use super::legend_render_frame_builder::{LegendLayout, push_legend};
use super::number_format::format_fr;

/// Latitude limit of drawn parallels.
const GRATICULE_MAX_LAT: f64 = 80.0;
/// Upper bound on meridians or parallels drawn per render.
const MAX_GRATICULE_LINES: i64 = 1_000;
const LEGEND_FONT_SIZE_PX: f64 = 10.0;
const LEGEND_INSET_PX: f64 = 8.0;

/// One feature's value under the current filters.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionValue {
    pub name: String,
    pub value: ResolvedValue,
}

impl RegionValue {
    #[must_use]
    pub fn tooltip_text(&self, filters: &ChoroplethFilters) -> String {
        match self.value {
            ResolvedValue::Value(value) => format!(
                "{} — {} habitant·e·s ({}, {}, {})",
                self.name,
                format_fr(value),
                filters.age,
                filters.sex,
                filters.year
            ),
            ResolvedValue::NoData => format!(
                "{} — données non disponibles ({}, {}, {})",
                self.name, filters.age, filters.sex, filters.year
            ),
        }
    }
}

/// Resolves every feature in collection order; unnamed features have no data.
#[must_use]
pub fn resolve_regions(
    features: &FeatureCollection,
    dataset: &PopulationDataset,
    filters: &ChoroplethFilters,
) -> Vec<RegionValue> {
    features
        .features
        .iter()
        .map(|feature| match feature.name() {
            Some(name) => RegionValue {
                name: name.to_owned(),
                value: dataset.resolve(name, filters),
            },
            None => RegionValue {
                name: String::new(),
                value: ResolvedValue::NoData,
            },
        })
        .collect()
}

pub(super) fn build_choropleth_artifact(
    id: ArtifactId,
    features: &FeatureCollection,
    regions: &[RegionValue],
    filters: &ChoroplethFilters,
    config: &ChoroplethConfig,
) -> ChartResult<ChartArtifact> {
    let fill_values: Vec<f64> = regions
        .iter()
        .map(|region| region.value.fill_value())
        .collect();
    let scale = QuantileScale::new(&fill_values, config.bucket_count())?;
    let area = config.plot_area();
    let mut frame = RenderFrame::new(config.viewport);
    let mut tooltips = Vec::with_capacity(regions.len());

    if let Some(projection) = fit_projection(features, area) {
        for (feature, region) in features.features.iter().zip(regions) {
            let fill = config.palette[scale.bucket(region.value.fill_value())];
            let text = region.tooltip_text(filters);
            for polygon in feature.polygons() {
                let rings = project_polygon(polygon, projection);
                if rings.is_empty() {
                    continue;
                }
                frame.polygons.push(
                    PolygonPrimitive::new(rings, fill, config.stroke_color, config.stroke_width)
                        .with_title(text.clone()),
                );
            }

            let bounds = feature.bounds();
            if !bounds.is_empty() {
                let (lon, lat) = bounds.center();
                let (x, y) = projection.project(lon, lat);
                tooltips.push(Tooltip { x, y, text });
            }
        }

        if let Some(step) = config.graticule_step_deg {
            push_graticule(&mut frame, projection, area, step, config);
        }
    }

    trace!(
        regions = regions.len(),
        polygons = frame.polygons.len(),
        "built choropleth frame"
    );

    let legend = Legend::Quantile {
        label: config.legend_label.clone(),
        colors: config.palette.clone(),
        thresholds: scale.thresholds().to_vec(),
    };
    push_legend(
        &mut frame,
        &legend,
        LegendLayout {
            x: area.left + LEGEND_INSET_PX,
            y: 0.0,
            font_size_px: LEGEND_FONT_SIZE_PX,
        },
    );
    Ok(ChartArtifact::new(id, frame, config.aria_label.clone())
        .with_tooltips(tooltips)
        .with_legend(legend))
}

fn fit_projection(features: &FeatureCollection, area: PlotArea) -> Option<MercatorProjection> {
    let bounds = features.bounds();
    if bounds.is_empty() {
        return None;
    }
    match MercatorProjection::fit(bounds, area) {
        Ok(projection) => Some(projection),
        Err(err) => {
            warn!(error = %err, "skipping region geometry");
            None
        }
    }
}

fn project_polygon(
    polygon: &PolygonCoordinates,
    projection: MercatorProjection,
) -> SmallVec<[Ring; 1]> {
    polygon
        .iter()
        .map(|ring| {
            ring.iter()
                .filter_map(|position| match position.as_slice() {
                    [lon, lat, ..] => Some(projection.project(*lon, *lat)),
                    _ => None,
                })
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect::<Ring>()
        })
        .filter(|ring| ring.len() >= 3)
        .collect()
}

fn push_graticule(
    frame: &mut RenderFrame,
    projection: MercatorProjection,
    area: PlotArea,
    step: f64,
    config: &ChoroplethConfig,
) {
    let (west, north) = projection.invert(area.left, area.top);
    let (east, south) = projection.invert(area.right, area.bottom);

    for lon in graticule_steps(west, east, step) {
        let (x, _) = projection.project(lon, 0.0);
        frame.lines.push(LinePrimitive::new(
            x,
            area.top,
            x,
            area.bottom,
            1.0,
            config.graticule_color,
        ));
    }

    let south = south.max(-GRATICULE_MAX_LAT);
    let north = north.min(GRATICULE_MAX_LAT);
    for lat in graticule_steps(south, north, step) {
        let (_, y) = projection.project(0.0, lat);
        frame.lines.push(LinePrimitive::new(
            area.left,
            y,
            area.right,
            y,
            1.0,
            config.graticule_color,
        ));
    }
}

/// Multiples of `step` inside `[low, high]`, at most `MAX_GRATICULE_LINES + 1`
/// of them, walked by integer index.
fn graticule_steps(low: f64, high: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (low / step).ceil();
    let last = (high / step).floor();
    let in_range = |index: f64| index.is_finite() && index.abs() < 1e15;
    let (first, last) = if in_range(first) && in_range(last) {
        (first as i64, last as i64)
    } else {
        (1, 0)
    };
    let last = last.min(first.saturating_add(MAX_GRATICULE_LINES));
    (first..=last).map(move |index| index as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::graticule_steps;

    #[test]
    fn graticule_steps_are_multiples_inside_the_range() {
        let steps: Vec<f64> = graticule_steps(-7.5, 12.0, 5.0).collect();
        assert_eq!(steps, [-5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn graticule_steps_stay_bounded_for_tiny_steps() {
        assert_eq!(graticule_steps(-180.0, 180.0, 1e-18).count(), 0);
        assert_eq!(graticule_steps(-180.0, 180.0, 1e-6).count(), 1_001);
        assert_eq!(graticule_steps(1.0, -1.0, 1.0).count(), 0);
        assert_eq!(graticule_steps(f64::NAN, 1.0, 1.0).count(), 0);
    }
}
