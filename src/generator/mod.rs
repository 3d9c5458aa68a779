//! Synthetic population figures for a set of named regions.
//!
//! Each (region, year) pair gets a random base population. Sex and age-band
//! breakdowns are derived from fixed ratios, so every slice of the output is
//! internally consistent up to integer rounding.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::data::{FeatureCollection, PopulationRecord, read_json_file, write_json_file_pretty};
use crate::error::{ChartError, ChartResult};
use crate::filters::{AgeBand, SexCategory};

/// Share of the base population per age band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeRatios {
    #[serde(rename = "0-19")]
    pub young: f64,
    #[serde(rename = "20-64")]
    pub adult: f64,
    #[serde(rename = "65+")]
    pub senior: f64,
}

impl Default for AgeRatios {
    fn default() -> Self {
        Self {
            young: 0.24,
            adult: 0.55,
            senior: 0.21,
        }
    }
}

impl AgeRatios {
    #[must_use]
    pub fn ratio(self, age: AgeBand) -> f64 {
        match age {
            AgeBand::Total => 1.0,
            AgeBand::Young => self.young,
            AgeBand::Adult => self.adult,
            AgeBand::Senior => self.senior,
        }
    }
}

/// Share of the base population per sex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SexRatios {
    #[serde(rename = "Femmes")]
    pub female: f64,
    #[serde(rename = "Hommes")]
    pub male: f64,
}

impl Default for SexRatios {
    fn default() -> Self {
        Self {
            female: 0.51,
            male: 0.49,
        }
    }
}

impl SexRatios {
    #[must_use]
    pub fn ratio(self, sex: SexCategory) -> f64 {
        match sex {
            SexCategory::Total => 1.0,
            SexCategory::Female => self.female,
            SexCategory::Male => self.male,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_years")]
    pub years: Vec<i32>,
    /// Inclusive lower bound of the base population.
    #[serde(default = "default_base_min")]
    pub base_min: f64,
    /// Exclusive upper bound of the base population.
    #[serde(default = "default_base_max")]
    pub base_max: f64,
    #[serde(default)]
    pub age_ratios: AgeRatios,
    #[serde(default)]
    pub sex_ratios: SexRatios,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            years: default_years(),
            base_min: default_base_min(),
            base_max: default_base_max(),
            age_ratios: AgeRatios::default(),
            sex_ratios: SexRatios::default(),
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn with_years(mut self, years: Vec<i32>) -> Self {
        self.years = years;
        self
    }

    #[must_use]
    pub fn with_base_range(mut self, base_min: f64, base_max: f64) -> Self {
        self.base_min = base_min;
        self.base_max = base_max;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.base_min.is_finite() || !self.base_max.is_finite() {
            return Err(ChartError::InvalidData(
                "base population bounds must be finite".to_owned(),
            ));
        }
        if self.base_min < 0.0 || self.base_min >= self.base_max {
            return Err(ChartError::InvalidData(format!(
                "base population range [{}, {}) is empty or negative",
                self.base_min, self.base_max
            )));
        }
        let ratios = [
            self.age_ratios.young,
            self.age_ratios.adult,
            self.age_ratios.senior,
            self.sex_ratios.female,
            self.sex_ratios.male,
        ];
        if ratios.iter().any(|ratio| !ratio.is_finite() || *ratio < 0.0) {
            return Err(ChartError::InvalidData(
                "population ratios must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_years() -> Vec<i32> {
    vec![2019, 2020, 2021, 2022]
}

fn default_base_min() -> f64 {
    400_000.0
}

fn default_base_max() -> f64 {
    1_000_000.0
}

/// Sex categories in output order.
pub const SEX_ORDER: [SexCategory; 3] = [SexCategory::Total, SexCategory::Female, SexCategory::Male];

/// Age bands in output order.
pub const AGE_ORDER: [AgeBand; 4] = [
    AgeBand::Total,
    AgeBand::Young,
    AgeBand::Adult,
    AgeBand::Senior,
];

/// Emits 12 records per named feature and configured year.
///
/// Unnamed features are skipped. Records are ordered by feature, then year,
/// then sex, then age band.
pub fn generate_population<G: Rng + ?Sized>(
    features: &FeatureCollection,
    config: &GeneratorConfig,
    rng: &mut G,
) -> ChartResult<Vec<PopulationRecord>> {
    config.validate()?;

    let mut records = Vec::with_capacity(
        features.features.len() * config.years.len() * SEX_ORDER.len() * AGE_ORDER.len(),
    );
    let mut skipped = 0_usize;
    for feature in &features.features {
        let Some(name) = feature.name() else {
            skipped += 1;
            continue;
        };
        for &year in &config.years {
            let base = rng.gen_range(config.base_min..config.base_max);
            push_breakdown(&mut records, name, year, base, config);
        }
    }

    debug!(
        features = features.features.len(),
        skipped,
        records = records.len(),
        "generated population"
    );
    Ok(records)
}

fn push_breakdown(
    records: &mut Vec<PopulationRecord>,
    name: &str,
    year: i32,
    base: f64,
    config: &GeneratorConfig,
) {
    for sex in SEX_ORDER {
        let sex_share = base * config.sex_ratios.ratio(sex);
        for age in AGE_ORDER {
            let value = (sex_share * config.age_ratios.ratio(age)).round();
            records.push(PopulationRecord::new(name, year, sex, age, value));
        }
    }
}

/// Reads a GeoJSON file, generates records and writes them as pretty JSON.
///
/// Returns the number of records written.
pub fn generate_population_file<G: Rng + ?Sized>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &GeneratorConfig,
    rng: &mut G,
) -> ChartResult<usize> {
    let input = input.as_ref();
    let output = output.as_ref();
    let features: FeatureCollection = read_json_file(input)?;
    let records = generate_population(&features, config, rng)?;
    write_json_file_pretty(output, &records)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        records = records.len(),
        "population dataset written"
    );
    Ok(records.len())
}
