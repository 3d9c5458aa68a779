use criterion::{Criterion, criterion_group, criterion_main};
use plotboard::api::{ChoroplethChart, ChoroplethConfig, ScatterChart, ScatterConfig};
use plotboard::data::{FeatureCollection, LookupIndex, PenguinObservation, PopulationDataset};
use plotboard::filters::{ChoroplethFilters, Island, PenguinSex, Species};
use plotboard::generator::{GeneratorConfig, generate_population};
use plotboard::surface::{MemorySurface, SurfaceEvent};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

/// Grid of 96 square "regions" laid over metropolitan France.
fn synthetic_regions() -> FeatureCollection {
    let features: Vec<_> = (0..96)
        .map(|index| {
            let lon = -4.5 + f64::from(index % 12) * 1.1;
            let lat = 42.5 + f64::from(index / 12) * 0.9;
            serde_json::json!({
                "type": "Feature",
                "properties": {"nom": format!("Region {index:02}")},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[lon, lat], [lon + 1.0, lat], [lon + 1.0, lat + 0.8], [lon, lat + 0.8], [lon, lat]]]
                }
            })
        })
        .collect();
    serde_json::from_value(serde_json::json!({"type": "FeatureCollection", "features": features}))
        .expect("synthetic regions")
}

fn synthetic_penguins(count: usize) -> Vec<PenguinObservation> {
    let species = [Species::Adelie, Species::Chinstrap, Species::Gentoo];
    let islands = [Island::Biscoe, Island::Dream, Island::Torgersen];
    (0..count)
        .map(|index| {
            let t = index as f64;
            PenguinObservation {
                species: species[index % 3],
                island: islands[(index / 3) % 3],
                culmen_length_mm: Some(35.0 + (t * 0.37) % 20.0),
                culmen_depth_mm: Some(13.0 + (t * 0.23) % 8.0),
                flipper_length_mm: Some(180.0 + (t * 0.7) % 50.0),
                body_mass_g: Some(3_000.0 + (t * 13.0) % 3_000.0),
                sex: (index % 5 != 0).then(|| {
                    if index % 2 == 0 {
                        PenguinSex::Female
                    } else {
                        PenguinSex::Male
                    }
                }),
            }
        })
        .collect()
}

fn bench_generate_and_index(c: &mut Criterion) {
    let regions = synthetic_regions();
    let config = GeneratorConfig::default();

    c.bench_function("generate_population_96_regions", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            let records = generate_population(black_box(&regions), &config, &mut rng)
                .expect("generate");
            black_box(records.len());
        })
    });

    let records = generate_population(&regions, &config, &mut StdRng::seed_from_u64(42))
        .expect("generate");
    c.bench_function("lookup_index_build_4608", |b| {
        b.iter(|| black_box(LookupIndex::build(black_box(&records))).len())
    });
}

fn bench_choropleth_render(c: &mut Criterion) {
    let regions = synthetic_regions();
    let records = generate_population(
        &regions,
        &GeneratorConfig::default(),
        &mut StdRng::seed_from_u64(7),
    )
    .expect("generate");
    let dataset = PopulationDataset::new(records);
    let mut surface = MemorySurface::new()
        .with_element("population-choropleth")
        .with_element("population-summary")
        .with_select("filter-year", ["2019", "2020", "2021", "2022"], Some("2022"))
        .with_select("filter-sex", ["Total", "Femmes", "Hommes"], None)
        .with_select("filter-age", ["Total", "0-19", "20-64", "65+"], None);
    let mut chart =
        ChoroplethChart::mount(&regions, &dataset, ChoroplethConfig::default(), &mut surface)
            .expect("mount")
            .expect("mounted");
    assert_eq!(*chart.filters(), ChoroplethFilters::default());

    c.bench_function("choropleth_render_96_regions", |b| {
        b.iter(|| chart.render(&mut surface).expect("render"))
    });
}

fn bench_scatter_filter_change(c: &mut Criterion) {
    let observations = synthetic_penguins(2_000);
    let mut surface = MemorySurface::new()
        .with_element("penguin-scatter")
        .with_element("filter-summary")
        .with_select("filter-species", ["all", "Adelie", "Chinstrap", "Gentoo"], None)
        .with_select("filter-island", ["all", "Biscoe", "Dream", "Torgersen"], None)
        .with_select("filter-sex", ["all", "FEMALE", "MALE"], None);
    let mut chart = ScatterChart::mount(&observations, ScatterConfig::default(), &mut surface)
        .expect("mount")
        .expect("mounted");
    let change = SurfaceEvent::change("filter-species");

    c.bench_function("scatter_filter_change_2k", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            surface.select("filter-species", if flip { "Gentoo" } else { "all" });
            chart.handle_event(&mut surface, &change).expect("render")
        })
    });
}

criterion_group!(
    benches,
    bench_generate_and_index,
    bench_choropleth_render,
    bench_scatter_filter_change
);
criterion_main!(benches);
