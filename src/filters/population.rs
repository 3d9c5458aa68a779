use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::PopulationRecord;
use crate::error::{ChartError, ChartResult};

use super::FilterCategory;

/// Default year shown before any control has been read.
pub const DEFAULT_YEAR: i32 = 2022;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SexCategory {
    Total,
    #[serde(rename = "Femmes")]
    Female,
    #[serde(rename = "Hommes")]
    Male,
}

impl FilterCategory for SexCategory {
    const DIMENSION: &'static str = "sex";
    const VARIANTS: &'static [Self] = &[Self::Total, Self::Female, Self::Male];

    fn as_str(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Female => "Femmes",
            Self::Male => "Hommes",
        }
    }
}

impl fmt::Display for SexCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    Total,
    #[serde(rename = "0-19")]
    Young,
    #[serde(rename = "20-64")]
    Adult,
    #[serde(rename = "65+")]
    Senior,
}

impl FilterCategory for AgeBand {
    const DIMENSION: &'static str = "age";
    const VARIANTS: &'static [Self] = &[Self::Total, Self::Young, Self::Adult, Self::Senior];

    fn as_str(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Young => "0-19",
            Self::Adult => "20-64",
            Self::Senior => "65+",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter dimensions exposed by the choropleth controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoroplethDimension {
    Year,
    Sex,
    Age,
}

impl ChoroplethDimension {
    pub const ALL: [Self; 3] = [Self::Year, Self::Sex, Self::Age];
}

/// Current choropleth selection. Every dimension is always pinned to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoroplethFilters {
    pub year: i32,
    pub sex: SexCategory,
    pub age: AgeBand,
}

impl Default for ChoroplethFilters {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            sex: SexCategory::Total,
            age: AgeBand::Total,
        }
    }
}

impl ChoroplethFilters {
    #[must_use]
    pub fn new(year: i32, sex: SexCategory, age: AgeBand) -> Self {
        Self { year, sex, age }
    }

    #[must_use]
    pub fn matches(&self, record: &PopulationRecord) -> bool {
        record.period == self.year && record.sex == self.sex && record.age == self.age
    }

    /// Parses `raw` and stores it in `dimension`; the state is untouched on error.
    pub fn set_raw(&mut self, dimension: ChoroplethDimension, raw: &str) -> ChartResult<()> {
        match dimension {
            ChoroplethDimension::Year => self.year = parse_year(raw)?,
            ChoroplethDimension::Sex => self.sex = SexCategory::parse(raw)?,
            ChoroplethDimension::Age => self.age = AgeBand::parse(raw)?,
        }
        Ok(())
    }

    #[must_use]
    pub fn raw_value(&self, dimension: ChoroplethDimension) -> String {
        match dimension {
            ChoroplethDimension::Year => self.year.to_string(),
            ChoroplethDimension::Sex => self.sex.as_str().to_owned(),
            ChoroplethDimension::Age => self.age.as_str().to_owned(),
        }
    }
}

fn parse_year(raw: &str) -> ChartResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ChartError::InvalidFilter {
            dimension: "year",
            value: raw.to_owned(),
        })
}
