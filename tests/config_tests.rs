use plotboard::api::{ChoroplethConfig, MIN_GRATICULE_STEP_DEG, ScatterConfig, palette};
use plotboard::core::{Margins, Viewport};
use plotboard::generator::GeneratorConfig;
use plotboard::{ChartError, ChoroplethChart, ScatterChart};
use plotboard::data::{FeatureCollection, PopulationDataset};
use plotboard::surface::MemorySurface;

#[test]
fn scatter_defaults_match_page_layout() {
    let config = ScatterConfig::default();
    assert_eq!(config.viewport, Viewport::new(640, 460));
    assert_eq!(config.margins, Margins::new(32.0, 32.0, 30.0, 40.0));
    assert_eq!(config.x_label, "Longueur du culmen (mm)");
    assert_eq!(config.y_label, "Profondeur du culmen (mm)");
    assert!(config.grid);
    assert_eq!(config.palette.as_slice(), palette::TABLEAU10.as_slice());
    config.validate().expect("defaults are valid");
}

#[test]
fn choropleth_defaults_match_page_layout() {
    let config = ChoroplethConfig::default();
    assert_eq!(config.viewport, Viewport::new(640, 560));
    assert_eq!(config.margins.top, 40.0);
    assert_eq!(config.margins.bottom, 40.0);
    assert_eq!(config.bucket_count(), 7);
    assert_eq!(config.stroke_color, palette::BORDER);
    assert_eq!(config.stroke_width, 0.6);
    assert_eq!(config.graticule_step_deg, Some(10.0));
    assert_eq!(config.legend_label, "Population (habitants)");
    config.validate().expect("defaults are valid");
}

#[test]
fn partial_json_fills_in_defaults() {
    let scatter: ScatterConfig =
        serde_json::from_str(r#"{"grid":false,"element_ids":{"plot_root":"chart"}}"#)
            .expect("scatter config");
    assert!(!scatter.grid);
    assert_eq!(scatter.element_ids.plot_root, "chart");
    assert_eq!(scatter.element_ids.species, "filter-species");
    assert_eq!(scatter.viewport, ScatterConfig::default().viewport);

    let choropleth: ChoroplethConfig =
        serde_json::from_str(r#"{"graticule_step_deg":null}"#).expect("choropleth config");
    assert_eq!(choropleth.graticule_step_deg, None);
    assert_eq!(choropleth.palette, ChoroplethConfig::default().palette);

    let generator: GeneratorConfig = serde_json::from_str("{}").expect("generator config");
    assert_eq!(generator, GeneratorConfig::default());
}

#[test]
fn configs_survive_json_round_trip() {
    let scatter = ScatterConfig::default().with_grid(false);
    let json = serde_json::to_string(&scatter).expect("serialize");
    let back: ScatterConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, scatter);

    let choropleth = ChoroplethConfig::default().with_graticule_step_deg(Some(5.0));
    let json = serde_json::to_string(&choropleth).expect("serialize");
    let back: ChoroplethConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, choropleth);
}

#[test]
fn invalid_configs_fail_before_mounting() {
    let mut surface = MemorySurface::new();
    let scatter = ScatterConfig::default().with_viewport(Viewport::new(0, 460));
    assert!(matches!(
        ScatterChart::mount(&[], scatter, &mut surface),
        Err(ChartError::InvalidViewport { width: 0, .. })
    ));

    let empty_palette = ChoroplethConfig::default().with_palette(Vec::new());
    let features = FeatureCollection::default();
    let dataset = PopulationDataset::new(Vec::new());
    assert!(matches!(
        ChoroplethChart::mount(&features, &dataset, empty_palette, &mut surface),
        Err(ChartError::InvalidData(_))
    ));

    let crushed = ChoroplethConfig::default().with_margins(Margins::new(300.0, 0.0, 300.0, 0.0));
    assert!(crushed.validate().is_err());

    let generator = GeneratorConfig::default().with_base_range(-5.0, 10.0);
    assert!(generator.validate().is_err());
}

#[test]
fn graticule_step_below_minimum_is_rejected() {
    for step in [1e-18, 0.05, 0.0, -10.0, f64::NAN] {
        let config = ChoroplethConfig::default().with_graticule_step_deg(Some(step));
        assert!(config.validate().is_err(), "step {step} should be rejected");
    }
    ChoroplethConfig::default()
        .with_graticule_step_deg(Some(MIN_GRATICULE_STEP_DEG))
        .validate()
        .expect("minimum step is accepted");

    let features = FeatureCollection::default();
    let dataset = PopulationDataset::new(Vec::new());
    let mut surface = MemorySurface::new();
    let tiny = ChoroplethConfig::default().with_graticule_step_deg(Some(1e-18));
    assert!(matches!(
        ChoroplethChart::mount(&features, &dataset, tiny, &mut surface),
        Err(ChartError::InvalidData(_))
    ));
}
