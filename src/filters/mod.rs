//! Filter state: one closed enumeration per dimension.
//!
//! Raw control values are parsed here, at the boundary, and never trusted
//! deeper in the render pipeline.

mod penguin;
mod population;

pub use penguin::{Island, PenguinSex, ScatterDimension, ScatterFilters, Species};
pub use population::{AgeBand, ChoroplethDimension, ChoroplethFilters, DEFAULT_YEAR, SexCategory};

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Raw control value that selects every category of a dimension.
pub const WILDCARD: &str = "all";

/// Closed set of categories for one filter dimension.
pub trait FilterCategory: Copy + Eq + 'static {
    /// Dimension name used in diagnostics.
    const DIMENSION: &'static str;
    const VARIANTS: &'static [Self];

    /// Raw value as it appears in data files and control options.
    fn as_str(self) -> &'static str;

    fn from_raw(raw: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == raw)
    }

    fn parse(raw: &str) -> ChartResult<Self> {
        Self::from_raw(raw).ok_or_else(|| ChartError::InvalidFilter {
            dimension: Self::DIMENSION,
            value: raw.to_owned(),
        })
    }
}

/// A dimension value that may be the `all` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: FilterCategory> Selection<T> {
    pub fn parse(raw: &str) -> ChartResult<Self> {
        if raw == WILDCARD {
            return Ok(Self::All);
        }
        T::parse(raw).map(Self::Only)
    }

    /// Wildcard matches everything, including records missing the field.
    #[must_use]
    pub fn matches(self, value: Option<T>) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => value == Some(selected),
        }
    }

    #[must_use]
    pub fn is_all(self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub fn as_raw(self) -> &'static str {
        match self {
            Self::All => WILDCARD,
            Self::Only(value) => value.as_str(),
        }
    }
}
