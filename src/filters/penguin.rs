use serde::{Deserialize, Serialize};

use crate::data::PenguinObservation;
use crate::error::{ChartError, ChartResult};

use super::{FilterCategory, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    Adelie,
    Chinstrap,
    Gentoo,
}

impl FilterCategory for Species {
    const DIMENSION: &'static str = "species";
    const VARIANTS: &'static [Self] = &[Self::Adelie, Self::Chinstrap, Self::Gentoo];

    fn as_str(self) -> &'static str {
        match self {
            Self::Adelie => "Adelie",
            Self::Chinstrap => "Chinstrap",
            Self::Gentoo => "Gentoo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Island {
    Biscoe,
    Dream,
    Torgersen,
}

impl FilterCategory for Island {
    const DIMENSION: &'static str = "island";
    const VARIANTS: &'static [Self] = &[Self::Biscoe, Self::Dream, Self::Torgersen];

    fn as_str(self) -> &'static str {
        match self {
            Self::Biscoe => "Biscoe",
            Self::Dream => "Dream",
            Self::Torgersen => "Torgersen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenguinSex {
    #[serde(rename = "FEMALE")]
    Female,
    #[serde(rename = "MALE")]
    Male,
}

impl FilterCategory for PenguinSex {
    const DIMENSION: &'static str = "sex";
    const VARIANTS: &'static [Self] = &[Self::Female, Self::Male];

    fn as_str(self) -> &'static str {
        match self {
            Self::Female => "FEMALE",
            Self::Male => "MALE",
        }
    }
}

/// Filter dimensions exposed by the scatter chart controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScatterDimension {
    Species,
    Island,
    Sex,
}

impl ScatterDimension {
    pub const ALL: [Self; 3] = [Self::Species, Self::Island, Self::Sex];
}

/// Current scatter filter selection; the default selects everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScatterFilters {
    pub species: Selection<Species>,
    pub island: Selection<Island>,
    pub sex: Selection<PenguinSex>,
}

impl ScatterFilters {
    /// Logical AND across every non-wildcard dimension.
    #[must_use]
    pub fn matches(&self, observation: &PenguinObservation) -> bool {
        self.species.matches(Some(observation.species))
            && self.island.matches(Some(observation.island))
            && self.sex.matches(observation.sex)
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.species.is_all() && self.island.is_all() && self.sex.is_all()
    }

    /// Parses `raw` and stores it in `dimension`; the state is untouched on error.
    pub fn set_raw(&mut self, dimension: ScatterDimension, raw: &str) -> ChartResult<()> {
        match dimension {
            ScatterDimension::Species => self.species = Selection::parse(raw)?,
            ScatterDimension::Island => self.island = Selection::parse(raw)?,
            ScatterDimension::Sex => self.sex = Selection::parse(raw)?,
        }
        Ok(())
    }

    #[must_use]
    pub fn raw_value(&self, dimension: ScatterDimension) -> &'static str {
        match dimension {
            ScatterDimension::Species => self.species.as_raw(),
            ScatterDimension::Island => self.island.as_raw(),
            ScatterDimension::Sex => self.sex.as_raw(),
        }
    }

    /// Human-readable fragments for each active dimension, in control order.
    #[must_use]
    pub fn active_details(&self) -> Vec<String> {
        let mut details = Vec::new();
        if let Selection::Only(species) = self.species {
            details.push(format!("espece {}", species.as_str()));
        }
        if let Selection::Only(island) = self.island {
            details.push(format!("ile {}", island.as_str()));
        }
        if let Selection::Only(sex) = self.sex {
            details.push(format!("sexe {}", sex.as_str()));
        }
        details
    }
}

impl TryFrom<&[(ScatterDimension, &str)]> for ScatterFilters {
    type Error = ChartError;

    fn try_from(values: &[(ScatterDimension, &str)]) -> Result<Self, Self::Error> {
        let mut filters = Self::default();
        for (dimension, raw) in values {
            filters.set_raw(*dimension, raw)?;
        }
        Ok(filters)
    }
}
