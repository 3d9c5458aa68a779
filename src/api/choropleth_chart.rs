use tracing::{debug, trace, warn};

use crate::data::{FeatureCollection, PopulationDataset};
use crate::error::ChartResult;
use crate::filters::{ChoroplethDimension, ChoroplethFilters};
use crate::surface::{ArtifactId, ArtifactSlot, DisplaySurface, SurfaceEvent};

use super::ChoroplethConfig;
use super::choropleth_render_frame_builder::{
    RegionValue, build_choropleth_artifact, resolve_regions,
};
use super::summary::choropleth_summary;

/// Population choropleth over a fixed feature collection.
#[derive(Debug)]
pub struct ChoroplethChart<'d> {
    features: &'d FeatureCollection,
    dataset: &'d PopulationDataset,
    config: ChoroplethConfig,
    filters: ChoroplethFilters,
    slot: ArtifactSlot,
}

impl<'d> ChoroplethChart<'d> {
    /// Binds the chart to `surface`, reads the initial filters from its
    /// controls and renders once. Missing elements yield `Ok(None)`.
    pub fn mount<S: DisplaySurface + ?Sized>(
        features: &'d FeatureCollection,
        dataset: &'d PopulationDataset,
        config: ChoroplethConfig,
        surface: &mut S,
    ) -> ChartResult<Option<Self>> {
        config.validate()?;

        let ids = &config.element_ids;
        let mut required = vec![ids.plot_root.as_str(), ids.summary.as_str()];
        required.extend(ChoroplethDimension::ALL.map(|dimension| ids.control(dimension)));
        if let Some(missing) = required.into_iter().find(|id| !surface.contains(id)) {
            debug!(element_id = missing, "choropleth chart not mounted");
            return Ok(None);
        }

        let mut chart = Self {
            features,
            dataset,
            slot: ArtifactSlot::new(config.element_ids.plot_root.clone()),
            config,
            filters: ChoroplethFilters::default(),
        };
        for dimension in ChoroplethDimension::ALL {
            chart.apply_control(surface, dimension);
        }
        chart.render(surface)?;
        Ok(Some(chart))
    }

    #[must_use]
    pub fn filters(&self) -> &ChoroplethFilters {
        &self.filters
    }

    #[must_use]
    pub fn config(&self) -> &ChoroplethConfig {
        &self.config
    }

    #[must_use]
    pub fn current_artifact(&self) -> Option<ArtifactId> {
        self.slot.current()
    }

    /// Per-feature values under the current filters, in collection order.
    #[must_use]
    pub fn regions(&self) -> Vec<RegionValue> {
        resolve_regions(self.features, self.dataset, &self.filters)
    }

    pub fn render<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) -> ChartResult<()> {
        let regions = self.regions();
        let total = self.dataset.grand_total(&self.filters);
        debug!(
            year = self.filters.year,
            sex = %self.filters.sex,
            age = %self.filters.age,
            regions = regions.len(),
            no_data = regions.iter().filter(|region| region.value.is_no_data()).count(),
            total,
            "render choropleth"
        );

        let id = self.slot.next_artifact_id();
        let artifact =
            build_choropleth_artifact(id, self.features, &regions, &self.filters, &self.config)?;
        self.slot.install(surface, artifact);
        surface.set_text_content(
            &self.config.element_ids.summary,
            &choropleth_summary(total, &self.filters),
        );
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
                trace!(element_id = %element_id, ?dimension, "choropleth filter changed");
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

    /// Restores each control to its default option and renders once.
    pub fn reset<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) -> ChartResult<()> {
        let fallback = ChoroplethFilters::default();
        for dimension in ChoroplethDimension::ALL {
            let control_id = self.config.element_ids.control(dimension).to_owned();
            let value = surface
                .default_control_value(&control_id)
                .unwrap_or_else(|| fallback.raw_value(dimension));
            surface.set_control_value(&control_id, &value);
            if let Err(err) = self.filters.set_raw(dimension, &value) {
                warn!(
                    error = %err,
                    control_id = %control_id,
                    "ignoring default control value"
                );
            }
        }
        trace!("choropleth filters reset");
        self.render(surface)
    }

    fn apply_control<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &S,
        dimension: ChoroplethDimension,
    ) {
        let control_id = self.config.element_ids.control(dimension);
        let Some(raw) = surface.control_value(control_id) else {
            warn!(control_id, "choropleth control has no value");
            return;
        };
        if let Err(err) = self.filters.set_raw(dimension, &raw) {
            warn!(error = %err, control_id, "ignoring choropleth control value");
        }
    }
}
