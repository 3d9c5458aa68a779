//! Datasets consumed by the charts and produced by the generator.

mod geo;
mod lookup;
mod penguins;
mod population;

pub use geo::{
    Feature, FeatureCollection, Geometry, NAME_PROPERTY_KEYS, PolygonCoordinates, Position,
};
pub use lookup::{LookupIndex, ResolvedValue};
pub use penguins::PenguinObservation;
pub use population::{PopulationDataset, PopulationRecord};

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ChartError, ChartResult};

pub fn load_penguins(input: &str) -> ChartResult<Vec<PenguinObservation>> {
    Ok(serde_json::from_str(input)?)
}

pub fn load_population(input: &str) -> ChartResult<Vec<PopulationRecord>> {
    Ok(serde_json::from_str(input)?)
}

pub fn load_feature_collection(input: &str) -> ChartResult<FeatureCollection> {
    Ok(serde_json::from_str(input)?)
}

/// Reads and deserializes a whole JSON document.
pub fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> ChartResult<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Serializes `value` as pretty-printed JSON, replacing the file wholesale.
pub fn write_json_file_pretty<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    value: &T,
) -> ChartResult<()> {
    let path = path.as_ref();
    let payload = serde_json::to_string_pretty(value)?;
    fs::write(path, payload).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })
}
