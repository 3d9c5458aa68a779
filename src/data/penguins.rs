use serde::{Deserialize, Deserializer, Serialize};

use crate::core::DataPoint;
use crate::filters::{FilterCategory, Island, PenguinSex, Species};

/// One penguin measurement row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenguinObservation {
    pub species: Species,
    pub island: Island,
    #[serde(default)]
    pub culmen_length_mm: Option<f64>,
    #[serde(default)]
    pub culmen_depth_mm: Option<f64>,
    #[serde(default)]
    pub flipper_length_mm: Option<f64>,
    #[serde(default)]
    pub body_mass_g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_sex")]
    pub sex: Option<PenguinSex>,
}

impl PenguinObservation {
    /// Culmen length/depth pair, or `None` when either measurement is missing.
    #[must_use]
    pub fn culmen_point(&self) -> Option<DataPoint> {
        match (self.culmen_length_mm, self.culmen_depth_mm) {
            (Some(length), Some(depth)) if length.is_finite() && depth.is_finite() => {
                Some(DataPoint::new(length, depth))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn tooltip_text(&self) -> String {
        format!(
            "{} ({}) - {}\nLength: {} mm / Depth: {} mm\nFlipper: {} mm / Weight: {} g",
            self.species.as_str(),
            self.sex.map_or("Unknown", PenguinSex::as_str),
            self.island.as_str(),
            measurement(self.culmen_length_mm),
            measurement(self.culmen_depth_mm),
            measurement(self.flipper_length_mm),
            measurement(self.body_mass_g),
        )
    }
}

fn measurement(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |value| value.to_string())
}

/// Unknown sex markers (`"."`, empty strings) load as missing.
fn lenient_sex<'de, D>(deserializer: D) -> Result<Option<PenguinSex>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(PenguinSex::from_raw))
}
