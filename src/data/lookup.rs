use std::collections::HashMap;

use crate::filters::{AgeBand, ChoroplethFilters, SexCategory};

use super::PopulationRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SliceKey {
    year: i32,
    sex: SexCategory,
    age: AgeBand,
}

/// Outcome of resolving one geography under the current filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedValue {
    Value(f64),
    /// No record exists for the key; distinct from a recorded zero.
    NoData,
}

impl ResolvedValue {
    /// Value used for coloring, where missing data counts as zero.
    #[must_use]
    pub fn fill_value(self) -> f64 {
        match self {
            Self::Value(value) => value,
            Self::NoData => 0.0,
        }
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value),
            Self::NoData => None,
        }
    }

    #[must_use]
    pub fn is_no_data(self) -> bool {
        matches!(self, Self::NoData)
    }
}

/// Read-only (geography, year, sex, age) → value index.
///
/// Built in one pass; a duplicate key keeps the value inserted last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupIndex {
    values: HashMap<String, HashMap<SliceKey, f64>>,
    len: usize,
}

impl LookupIndex {
    #[must_use]
    pub fn build(records: &[PopulationRecord]) -> Self {
        let mut values: HashMap<String, HashMap<SliceKey, f64>> = HashMap::new();
        let mut len = 0;
        for record in records {
            let key = SliceKey {
                year: record.period,
                sex: record.sex,
                age: record.age,
            };
            let previous = values
                .entry(record.geography.clone())
                .or_default()
                .insert(key, record.value);
            if previous.is_none() {
                len += 1;
            }
        }
        Self { values, len }
    }

    #[must_use]
    pub fn get(&self, geography: &str, year: i32, sex: SexCategory, age: AgeBand) -> Option<f64> {
        self.values
            .get(geography)?
            .get(&SliceKey { year, sex, age })
            .copied()
    }

    #[must_use]
    pub fn resolve(&self, geography: &str, filters: &ChoroplethFilters) -> ResolvedValue {
        self.get(geography, filters.year, filters.sex, filters.age)
            .map_or(ResolvedValue::NoData, ResolvedValue::Value)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
