use approx::assert_relative_eq;
use plotboard::api::{ChoroplethChart, ChoroplethConfig, palette, resolve_regions};
use plotboard::data::{
    FeatureCollection, PopulationDataset, PopulationRecord, ResolvedValue,
    load_feature_collection, load_population,
};
use plotboard::filters::{AgeBand, ChoroplethFilters, SexCategory};
use plotboard::render::{NullRenderer, SvgRenderer};
use plotboard::surface::{Legend, MemorySurface, SurfaceEvent};

const PLOT: &str = "population-choropleth";
const SUMMARY: &str = "population-summary";

fn features() -> FeatureCollection {
    load_feature_collection(include_str!("fixtures/departements_sample.geojson.json"))
        .expect("geojson fixture")
}

fn dataset() -> PopulationDataset {
    PopulationDataset::new(
        load_population(include_str!("fixtures/population_sample.json"))
            .expect("population fixture"),
    )
}

fn surface() -> MemorySurface {
    MemorySurface::new()
        .with_element(PLOT)
        .with_element(SUMMARY)
        .with_element("filters-reset")
        .with_select("filter-year", ["2019", "2020", "2021", "2022"], Some("2022"))
        .with_select("filter-sex", ["Total", "Femmes", "Hommes"], None)
        .with_select("filter-age", ["Total", "0-19", "20-64", "65+"], None)
}

#[test]
fn single_record_dataset_resolves_only_its_geography() {
    let dataset = PopulationDataset::new(vec![PopulationRecord::new(
        "Paris",
        2021,
        SexCategory::Total,
        AgeBand::Total,
        2_148_000.0,
    )]);
    let filters = ChoroplethFilters::new(2021, SexCategory::Total, AgeBand::Total);

    assert_eq!(dataset.resolve("Paris", &filters), ResolvedValue::Value(2_148_000.0));
    assert_eq!(dataset.resolve("Lyon", &filters), ResolvedValue::NoData);
    assert_eq!(dataset.resolve("paris", &filters), ResolvedValue::NoData);
}

#[test]
fn initial_state_comes_from_the_controls() {
    let features = features();
    let dataset = dataset();
    let mut surface = surface();
    let chart = ChoroplethChart::mount(&features, &dataset, ChoroplethConfig::default(), &mut surface)
        .expect("mount")
        .expect("all elements present");

    assert_eq!(
        *chart.filters(),
        ChoroplethFilters::new(2022, SexCategory::Total, AgeBand::Total)
    );
    assert_eq!(
        surface.text_content(SUMMARY),
        Some("3\u{202f}484\u{202f}111 habitants (Total, tranche Total) en 2022.")
    );
}

#[test]
fn resolved_values_sum_to_grand_total() {
    let features = features();
    let dataset = dataset();
    let filters = ChoroplethFilters::new(2021, SexCategory::Total, AgeBand::Total);

    let regions = resolve_regions(&features, &dataset, &filters);
    let sum: f64 = regions.iter().filter_map(|region| region.value.value()).sum();
    assert_relative_eq!(sum, dataset.grand_total(&filters));
    assert_relative_eq!(sum, 3_335_230.0);
}

#[test]
fn missing_regions_are_flagged_and_described() {
    let features = features();
    let dataset = dataset();
    let mut surface = surface();
    let mut chart =
        ChoroplethChart::mount(&features, &dataset, ChoroplethConfig::default(), &mut surface)
            .expect("mount")
            .expect("mounted");

    surface.select("filter-year", "2021");
    assert!(
        chart
            .handle_event(&mut surface, &SurfaceEvent::change("filter-year"))
            .expect("render")
    );

    let regions = chart.regions();
    let names: Vec<_> = regions.iter().map(|region| region.name.as_str()).collect();
    assert_eq!(names, ["Ain", "Aisne", "Paris", "Corse-du-Sud", ""]);
    assert_eq!(regions[2].value, ResolvedValue::Value(2_148_000.0));
    assert!(regions[3].value.is_no_data());
    assert!(regions[4].value.is_no_data());

    let tooltips = surface.artifact(PLOT).expect("artifact").tooltips();
    let texts: Vec<_> = tooltips.iter().map(|tooltip| tooltip.text.as_str()).collect();
    assert!(texts.contains(&"Paris — 2\u{202f}148\u{202f}000 habitant·e·s (Total, Total, 2021)"));
    assert!(texts.contains(&"Corse-du-Sud — données non disponibles (Total, Total, 2021)"));
}

#[test]
fn record_with_null_value_is_zero_not_missing() {
    let features = features();
    let dataset = dataset();
    let mut surface = surface();
    let mut chart =
        ChoroplethChart::mount(&features, &dataset, ChoroplethConfig::default(), &mut surface)
            .expect("mount")
            .expect("mounted");

    surface.select("filter-sex", "Femmes");
    surface.select("filter-age", "0-19");
    chart
        .handle_event(&mut surface, &SurfaceEvent::change("filter-sex"))
        .expect("render");
    chart
        .handle_event(&mut surface, &SurfaceEvent::change("filter-age"))
        .expect("render");

    let corsica = chart
        .regions()
        .into_iter()
        .find(|region| region.name == "Corse-du-Sud")
        .expect("corsica");
    assert_eq!(corsica.value, ResolvedValue::Value(0.0));
    assert_eq!(
        surface.text_content(SUMMARY),
        Some("0 habitants (Femmes, tranche 0-19) en 2022.")
    );
}

#[test]
fn frame_holds_every_polygon_and_graticule() {
    let features = features();
    let dataset = dataset();
    let mut surface = surface();
    ChoroplethChart::mount(&features, &dataset, ChoroplethConfig::default(), &mut surface)
        .expect("mount")
        .expect("mounted");

    let artifact = surface.artifact(PLOT).expect("artifact");
    let frame = artifact.frame();
    // Corse-du-Sud is a two-part multipolygon.
    assert_eq!(frame.polygons.len(), 6);
    assert_eq!(frame.polygons[2].rings.len(), 2);
    assert!(!frame.lines.is_empty());
    assert!(
        frame
            .lines
            .iter()
            .all(|line| line.color == palette::GRATICULE)
    );

    let mut renderer = NullRenderer::default();
    artifact.render_with(&mut renderer).expect("frame is valid");
    assert_eq!(renderer.last_polygon_count, 6);
}

#[test]
fn polygons_stay_inside_the_plot_area() {
    let features = features();
    let dataset = dataset();
    let mut surface = surface();
    let config = ChoroplethConfig::default();
    let area = config.plot_area();
    ChoroplethChart::mount(&features, &dataset, config, &mut surface)
        .expect("mount")
        .expect("mounted");

    let frame = surface.artifact(PLOT).expect("artifact").frame();
    for polygon in &frame.polygons {
        for &(x, y) in polygon.rings.iter().flatten() {
            assert!(x >= area.left - 1e-6 && x <= area.right + 1e-6, "x={x}");
            assert!(y >= area.top - 1e-6 && y <= area.bottom + 1e-6, "y={y}");
        }
    }
}

#[test]
fn quantile_legend_and_fill_colors() {
    let features = features();
    let dataset = dataset();
    let mut surface = surface();
    ChoroplethChart::mount(&features, &dataset, ChoroplethConfig::default(), &mut surface)
        .expect("mount")
        .expect("mounted");

    let artifact = surface.artifact(PLOT).expect("artifact");
    let Some(Legend::Quantile {
        label,
        colors,
        thresholds,
    }) = artifact.legend()
    else {
        panic!("choropleth legend should be a quantile ramp");
    };
    assert_eq!(label, "Population (habitants)");
    assert_eq!(colors.as_slice(), palette::BLUES7.as_slice());
    assert_eq!(thresholds.len(), 6);
    assert!(thresholds.windows(2).all(|pair| pair[0] <= pair[1]));

    let frame = artifact.frame();
    // The unnamed feature is drawn as zero, the lowest bucket.
    assert_eq!(frame.polygons[5].fill_color, palette::BLUES7[0]);
    // Paris is the largest value, the darkest bucket.
    assert_eq!(frame.polygons[2].fill_color, palette::BLUES7[6]);
}

#[test]
fn svg_document_carries_the_aria_label() {
    let features = features();
    let dataset = dataset();
    let mut surface = surface();
    ChoroplethChart::mount(&features, &dataset, ChoroplethConfig::default(), &mut surface)
        .expect("mount")
        .expect("mounted");
    let artifact = surface.artifact(PLOT).expect("artifact");

    let mut renderer = SvgRenderer::new();
    renderer.set_aria_label(Some(artifact.aria_label().to_owned()));
    artifact.render_with(&mut renderer).expect("svg render");

    let document = renderer.document();
    assert!(document.starts_with("<svg"));
    assert!(document.contains("aria-label=\"Carte choroplèthe"));
    assert_eq!(renderer.last_stats().polygons_drawn, 6);
}

#[test]
fn svg_document_draws_legend_and_region_tooltips() {
    let features = features();
    let dataset = dataset();
    let mut surface = surface();
    ChoroplethChart::mount(&features, &dataset, ChoroplethConfig::default(), &mut surface)
        .expect("mount")
        .expect("mounted");
    let artifact = surface.artifact(PLOT).expect("artifact");

    let frame = artifact.frame();
    assert_eq!(frame.rects.len(), palette::BLUES7.len());
    assert!(frame.texts.iter().any(|text| text.text == "Population (habitants)"));
    // Six thresholds label the boundaries of the seven-step ramp.
    assert_eq!(frame.texts.len(), 1 + 6);
    assert!(frame.polygons.iter().all(|polygon| polygon.title.is_some()));

    let mut renderer = SvgRenderer::new();
    artifact.render_with(&mut renderer).expect("svg render");
    let document = renderer.document();
    assert!(document.contains(">Population (habitants)</text>"));
    assert!(document.contains(
        "<title>Paris — 2\u{202f}133\u{202f}111 habitant·e·s (Total, Total, 2022)</title></path>"
    ));
    assert_eq!(renderer.last_stats().rects_drawn, 7);
}
