use plotboard::api::{
    ChoroplethChart, ChoroplethConfig, ChoroplethElementIds, ScatterChart, ScatterConfig,
};
use plotboard::data::{FeatureCollection, PopulationDataset, load_feature_collection, load_penguins};
use plotboard::filters::{
    AgeBand, ChoroplethFilters, PenguinSex, ScatterFilters, Selection, SexCategory, Species,
};
use plotboard::surface::{DisplaySurface, MemorySurface, SurfaceEvent};

fn scatter_surface() -> MemorySurface {
    MemorySurface::new()
        .with_element("penguin-scatter")
        .with_element("filter-summary")
        .with_element("filter-reset")
        .with_select("filter-species", ["all", "Adelie", "Chinstrap", "Gentoo"], None)
        .with_select("filter-island", ["all", "Biscoe", "Dream", "Torgersen"], None)
        .with_select("filter-sex", ["all", "FEMALE", "MALE"], None)
}

fn choropleth_surface() -> MemorySurface {
    MemorySurface::new()
        .with_element("population-choropleth")
        .with_element("population-summary")
        .with_element("filters-reset")
        .with_select("filter-year", ["2019", "2020", "2021", "2022"], Some("2022"))
        .with_select("filter-sex", ["Total", "Femmes", "Hommes"], None)
        .with_select("filter-age", ["Total", "0-19", "20-64", "65+"], None)
}

fn features() -> FeatureCollection {
    load_feature_collection(include_str!("fixtures/departements_sample.geojson.json"))
        .expect("geojson fixture")
}

#[test]
fn missing_plot_root_skips_mounting() {
    let observations = load_penguins(include_str!("fixtures/penguins_sample.json")).expect("fixture");
    let mut surface = MemorySurface::new()
        .with_element("filter-summary")
        .with_select("filter-species", ["all"], None)
        .with_select("filter-island", ["all"], None)
        .with_select("filter-sex", ["all"], None);

    let chart = ScatterChart::mount(&observations, ScatterConfig::default(), &mut surface)
        .expect("mount");
    assert!(chart.is_none());
    assert_eq!(surface.text_content("filter-summary"), None);
}

#[test]
fn missing_control_skips_choropleth_mounting() {
    let features = features();
    let dataset = PopulationDataset::new(Vec::new());
    let mut surface = MemorySurface::new()
        .with_element("population-choropleth")
        .with_element("population-summary")
        .with_select("filter-year", ["2022"], None)
        .with_select("filter-sex", ["Total"], None);

    let chart = ChoroplethChart::mount(&features, &dataset, ChoroplethConfig::default(), &mut surface)
        .expect("mount");
    assert!(chart.is_none());
    assert_eq!(surface.live_artifact_count(), 0);
}

#[test]
fn reset_button_is_optional() {
    let observations = load_penguins(include_str!("fixtures/penguins_sample.json")).expect("fixture");
    let mut surface = MemorySurface::new()
        .with_element("penguin-scatter")
        .with_element("filter-summary")
        .with_select("filter-species", ["all", "Adelie"], None)
        .with_select("filter-island", ["all"], None)
        .with_select("filter-sex", ["all"], None);

    let chart = ScatterChart::mount(&observations, ScatterConfig::default(), &mut surface)
        .expect("mount");
    assert!(chart.is_some());
}

#[test]
fn each_change_event_renders_exactly_once() {
    let observations = load_penguins(include_str!("fixtures/penguins_sample.json")).expect("fixture");
    let mut surface = scatter_surface();
    let mut chart = ScatterChart::mount(&observations, ScatterConfig::default(), &mut surface)
        .expect("mount")
        .expect("mounted");
    let initial = chart.current_artifact().expect("initial artifact");

    surface.select("filter-species", "Adelie");
    let rendered = chart
        .handle_event(&mut surface, &SurfaceEvent::change("filter-species"))
        .expect("render");
    assert!(rendered);
    assert_eq!(chart.filters().species, Selection::Only(Species::Adelie));

    let next = chart.current_artifact().expect("next artifact");
    assert_eq!(next.get(), initial.get() + 1);
    assert_eq!(surface.removed_artifact_count(), 1);
}

#[test]
fn unrelated_events_are_ignored() {
    let observations = load_penguins(include_str!("fixtures/penguins_sample.json")).expect("fixture");
    let mut surface = scatter_surface();
    let mut chart = ScatterChart::mount(&observations, ScatterConfig::default(), &mut surface)
        .expect("mount")
        .expect("mounted");
    let before = chart.current_artifact();

    for event in [
        SurfaceEvent::change("somewhere-else"),
        SurfaceEvent::click("filter-species"),
        SurfaceEvent::click("unknown-button"),
    ] {
        assert!(!chart.handle_event(&mut surface, &event).expect("handled"));
    }
    assert_eq!(chart.current_artifact(), before);
    assert_eq!(surface.removed_artifact_count(), 0);
}

#[test]
fn invalid_scatter_value_keeps_field_and_still_renders() {
    let observations = load_penguins(include_str!("fixtures/penguins_sample.json")).expect("fixture");
    let mut surface = scatter_surface();
    let mut chart = ScatterChart::mount(&observations, ScatterConfig::default(), &mut surface)
        .expect("mount")
        .expect("mounted");

    surface.select("filter-sex", "MALE");
    chart
        .handle_event(&mut surface, &SurfaceEvent::change("filter-sex"))
        .expect("render");
    surface.select("filter-sex", "male-ish");
    let rendered = chart
        .handle_event(&mut surface, &SurfaceEvent::change("filter-sex"))
        .expect("render");

    assert!(rendered);
    assert_eq!(chart.filters().sex, Selection::Only(PenguinSex::Male));
    assert_eq!(surface.removed_artifact_count(), 2);
    assert_eq!(
        surface.text_content("filter-summary"),
        Some("4 observations affichees pour sexe MALE.")
    );
}

#[test]
fn scatter_reset_restores_wildcards_on_every_control() {
    let observations = load_penguins(include_str!("fixtures/penguins_sample.json")).expect("fixture");
    let mut surface = scatter_surface();
    let mut chart = ScatterChart::mount(&observations, ScatterConfig::default(), &mut surface)
        .expect("mount")
        .expect("mounted");
    let initial_summary = surface.text_content("filter-summary").map(str::to_owned);
    let initial_frame = surface
        .artifact("penguin-scatter")
        .expect("artifact")
        .frame()
        .clone();

    for (control, value) in [("filter-species", "Gentoo"), ("filter-island", "Biscoe")] {
        surface.select(control, value);
        chart
            .handle_event(&mut surface, &SurfaceEvent::change(control))
            .expect("render");
    }
    assert!(chart
        .handle_event(&mut surface, &SurfaceEvent::click("filter-reset"))
        .expect("reset"));

    assert_eq!(*chart.filters(), ScatterFilters::default());
    for control in ["filter-species", "filter-island", "filter-sex"] {
        assert_eq!(surface.control_value(control).as_deref(), Some("all"));
    }
    assert_eq!(surface.text_content("filter-summary").map(str::to_owned), initial_summary);
    assert_eq!(
        surface.artifact("penguin-scatter").expect("artifact").frame(),
        &initial_frame
    );

    // A second reset produces the same state.
    chart.reset(&mut surface).expect("reset again");
    assert_eq!(*chart.filters(), ScatterFilters::default());
    assert_eq!(surface.text_content("filter-summary").map(str::to_owned), initial_summary);
}

#[test]
fn invalid_year_is_ignored() {
    let features = features();
    let dataset = PopulationDataset::new(Vec::new());
    let mut surface = choropleth_surface();
    let mut chart =
        ChoroplethChart::mount(&features, &dataset, ChoroplethConfig::default(), &mut surface)
            .expect("mount")
            .expect("mounted");

    surface.select("filter-year", "deux mille");
    let rendered = chart
        .handle_event(&mut surface, &SurfaceEvent::change("filter-year"))
        .expect("render");
    assert!(rendered);
    assert_eq!(chart.filters().year, 2022);
    assert_eq!(surface.removed_artifact_count(), 1);
}

#[test]
fn year_text_is_parsed_as_integer() {
    let features = features();
    let dataset = PopulationDataset::new(Vec::new());
    let mut surface = choropleth_surface();
    let mut chart =
        ChoroplethChart::mount(&features, &dataset, ChoroplethConfig::default(), &mut surface)
            .expect("mount")
            .expect("mounted");

    surface.select("filter-year", " 2019 ");
    chart
        .handle_event(&mut surface, &SurfaceEvent::change("filter-year"))
        .expect("render");
    assert_eq!(chart.filters().year, 2019);
}

#[test]
fn choropleth_reset_uses_marked_default_then_first_option() {
    let features = features();
    let dataset = PopulationDataset::new(Vec::new());
    let mut surface = choropleth_surface();
    let mut chart =
        ChoroplethChart::mount(&features, &dataset, ChoroplethConfig::default(), &mut surface)
            .expect("mount")
            .expect("mounted");

    for (control, value) in [
        ("filter-year", "2019"),
        ("filter-sex", "Hommes"),
        ("filter-age", "65+"),
    ] {
        surface.select(control, value);
        chart
            .handle_event(&mut surface, &SurfaceEvent::change(control))
            .expect("render");
    }
    assert_eq!(
        *chart.filters(),
        ChoroplethFilters::new(2019, SexCategory::Male, AgeBand::Senior)
    );

    chart
        .handle_event(&mut surface, &SurfaceEvent::click("filters-reset"))
        .expect("reset");
    assert_eq!(*chart.filters(), ChoroplethFilters::default());
    assert_eq!(surface.control_value("filter-year").as_deref(), Some("2022"));
    assert_eq!(surface.control_value("filter-sex").as_deref(), Some("Total"));
    assert_eq!(surface.control_value("filter-age").as_deref(), Some("Total"));
    assert_eq!(surface.live_artifact_count(), 1);
}

#[test]
fn element_ids_can_be_renamed() {
    let features = features();
    let dataset = PopulationDataset::new(Vec::new());
    let ids = ChoroplethElementIds {
        year: "annee".to_owned(),
        plot_root: "carte".to_owned(),
        ..ChoroplethElementIds::default()
    };
    let mut surface = MemorySurface::new()
        .with_element("carte")
        .with_element("population-summary")
        .with_select("annee", ["2020", "2021"], None)
        .with_select("filter-sex", ["Total"], None)
        .with_select("filter-age", ["Total"], None);

    let chart = ChoroplethChart::mount(
        &features,
        &dataset,
        ChoroplethConfig::default().with_element_ids(ids),
        &mut surface,
    )
    .expect("mount")
    .expect("mounted");

    assert_eq!(chart.filters().year, 2020);
    assert!(surface.artifact("carte").is_some());
}
