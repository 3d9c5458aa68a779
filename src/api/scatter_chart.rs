use tracing::{debug, trace, warn};

use crate::data::PenguinObservation;
use crate::error::ChartResult;
use crate::filters::{ScatterDimension, ScatterFilters};
use crate::surface::{ArtifactId, ArtifactSlot, DisplaySurface, SurfaceEvent};

use super::ScatterConfig;
use super::scatter_render_frame_builder::build_scatter_artifact;
use super::summary::{SCATTER_EMPTY_PLACEHOLDER, SCATTER_EMPTY_SUMMARY, scatter_summary};

/// Culmen scatter plot bound to a set of host controls.
///
/// The chart borrows the observations for its whole lifetime and owns only
/// the filter state and the artifact slot of its plot region.
#[derive(Debug)]
pub struct ScatterChart<'d> {
    observations: &'d [PenguinObservation],
    config: ScatterConfig,
    filters: ScatterFilters,
    slot: ArtifactSlot,
}

impl<'d> ScatterChart<'d> {
    /// Binds the chart to `surface` and runs the initial render.
    ///
    /// Returns `Ok(None)` when one of the required elements is missing; the
    /// reset button is optional.
    pub fn mount<S: DisplaySurface + ?Sized>(
        observations: &'d [PenguinObservation],
        config: ScatterConfig,
        surface: &mut S,
    ) -> ChartResult<Option<Self>> {
        config.validate()?;

        let ids = &config.element_ids;
        let mut required = vec![ids.plot_root.as_str(), ids.summary.as_str()];
        required.extend(ScatterDimension::ALL.map(|dimension| ids.control(dimension)));
        if let Some(missing) = required.into_iter().find(|id| !surface.contains(id)) {
            debug!(element_id = missing, "scatter chart not mounted");
            return Ok(None);
        }

        let mut chart = Self {
            observations,
            slot: ArtifactSlot::new(config.element_ids.plot_root.clone()),
            config,
            filters: ScatterFilters::default(),
        };
        for dimension in ScatterDimension::ALL {
            chart.apply_control(surface, dimension);
        }
        chart.render(surface)?;
        Ok(Some(chart))
    }

    #[must_use]
    pub fn filters(&self) -> &ScatterFilters {
        &self.filters
    }

    #[must_use]
    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    /// Id of the artifact currently mounted, `None` while the placeholder shows.
    #[must_use]
    pub fn current_artifact(&self) -> Option<ArtifactId> {
        self.slot.current()
    }

    /// Rebuilds the chart and summary for the current filters.
    pub fn render<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) -> ChartResult<()> {
        let visible = filter_observations(self.observations, &self.filters);
        debug!(
            total = self.observations.len(),
            filtered = visible.len(),
            "render scatter chart"
        );

        let summary_id = &self.config.element_ids.summary;
        if visible.is_empty() {
            self.slot.show_placeholder(surface, SCATTER_EMPTY_PLACEHOLDER);
            surface.set_text_content(summary_id, SCATTER_EMPTY_SUMMARY);
            return Ok(());
        }

        let id = self.slot.next_artifact_id();
        let artifact = build_scatter_artifact(id, &visible, &self.config)?;
        self.slot.install(surface, artifact);
        surface.set_text_content(summary_id, &scatter_summary(visible.len(), &self.filters));
        Ok(())
    }

    /// Routes a host event; returns whether it triggered a render.
    pub fn handle_event<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        event: &SurfaceEvent,
    ) -> ChartResult<bool> {
        match event {
            SurfaceEvent::Change { element_id } => {
                let Some(dimension) = self.config.element_ids.dimension_for(element_id) else {
                    return Ok(false);
                };
                trace!(element_id = %element_id, ?dimension, "scatter filter changed");
                self.apply_control(surface, dimension);
                self.render(surface)?;
                Ok(true)
            }
            SurfaceEvent::Click { element_id } if *element_id == self.config.element_ids.reset => {
                self.reset(surface)?;
                Ok(true)
            }
            SurfaceEvent::Click { .. } => Ok(false),
        }
    }

    /// Puts every control back on the wildcard and renders once.
    pub fn reset<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) -> ChartResult<()> {
        self.filters = ScatterFilters::default();
        for dimension in ScatterDimension::ALL {
            surface.set_control_value(
                self.config.element_ids.control(dimension),
                self.filters.raw_value(dimension),
            );
        }
        trace!("scatter filters reset");
        self.render(surface)
    }

    fn apply_control<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &S,
        dimension: ScatterDimension,
    ) {
        let control_id = self.config.element_ids.control(dimension);
        let Some(raw) = surface.control_value(control_id) else {
            warn!(control_id, "scatter control has no value");
            return;
        };
        if let Err(err) = self.filters.set_raw(dimension, &raw) {
            warn!(error = %err, control_id, "ignoring scatter control value");
        }
    }
}

/// Observations matching every active filter, in dataset order.
#[must_use]
pub fn filter_observations<'a>(
    observations: &'a [PenguinObservation],
    filters: &ScatterFilters,
) -> Vec<&'a PenguinObservation> {
    observations
        .iter()
        .filter(|observation| filters.matches(observation))
        .collect()
}
