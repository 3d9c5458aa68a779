use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::filters::{AgeBand, ChoroplethFilters, SexCategory};

use super::{LookupIndex, ResolvedValue};

/// One (geography, year, sex, age band) population figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationRecord {
    #[serde(rename = "Géographie")]
    pub geography: String,
    #[serde(rename = "Période")]
    pub period: i32,
    #[serde(rename = "Sexe")]
    pub sex: SexCategory,
    #[serde(rename = "Âge")]
    pub age: AgeBand,
    #[serde(
        rename = "Valeur",
        default,
        deserialize_with = "value_or_zero",
        serialize_with = "whole_as_integer"
    )]
    pub value: f64,
}

impl PopulationRecord {
    #[must_use]
    pub fn new(
        geography: impl Into<String>,
        period: i32,
        sex: SexCategory,
        age: AgeBand,
        value: f64,
    ) -> Self {
        Self {
            geography: geography.into(),
            period,
            sex,
            age,
            value,
        }
    }
}

fn value_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Whole counts are written without a trailing `.0`.
fn whole_as_integer<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Population records plus their lookup index, built once and shared by
/// every choropleth render.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationDataset {
    records: Vec<PopulationRecord>,
    index: LookupIndex,
}

impl PopulationDataset {
    #[must_use]
    pub fn new(records: Vec<PopulationRecord>) -> Self {
        let index = LookupIndex::build(&records);
        Self { records, index }
    }

    #[must_use]
    pub fn records(&self) -> &[PopulationRecord] {
        &self.records
    }

    #[must_use]
    pub fn index(&self) -> &LookupIndex {
        &self.index
    }

    #[must_use]
    pub fn resolve(&self, geography: &str, filters: &ChoroplethFilters) -> ResolvedValue {
        self.index.resolve(geography, filters)
    }

    /// Sum of every record matching `filters`, across all geographies.
    #[must_use]
    pub fn grand_total(&self, filters: &ChoroplethFilters) -> f64 {
        self.records
            .iter()
            .filter(|record| filters.matches(record))
            .map(|record| record.value)
            .sum()
    }
}
