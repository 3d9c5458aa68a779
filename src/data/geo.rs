use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::GeoBounds;

/// Property keys probed for a feature name, highest priority first.
pub const NAME_PROPERTY_KEYS: [&str; 3] = ["nom", "NAME_1", "name"];

/// GeoJSON position: `[lon, lat, ..]`.
pub type Position = Vec<f64>;
/// Exterior ring followed by optional holes.
pub type PolygonCoordinates = Vec<Vec<Position>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Bounding box of every polygon vertex in the collection.
    #[must_use]
    pub fn bounds(&self) -> GeoBounds {
        let mut bounds = GeoBounds::empty();
        for feature in &self.features {
            feature.extend_bounds(&mut bounds);
        }
        bounds
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon {
        coordinates: PolygonCoordinates,
    },
    MultiPolygon {
        coordinates: Vec<PolygonCoordinates>,
    },
    /// Points, lines and collections are ignored by the charts.
    #[serde(other)]
    Unsupported,
}

impl Feature {
    /// First non-null name-like property, if it is a non-empty string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        let properties = self.properties.as_ref()?;
        let value = NAME_PROPERTY_KEYS
            .iter()
            .filter_map(|key| properties.get(*key))
            .find(|value| !value.is_null())?;
        value.as_str().filter(|name| !name.is_empty())
    }

    #[must_use]
    pub fn polygons(&self) -> &[PolygonCoordinates] {
        match &self.geometry {
            Some(Geometry::Polygon { coordinates }) => std::slice::from_ref(coordinates),
            Some(Geometry::MultiPolygon { coordinates }) => coordinates,
            Some(Geometry::Unsupported) | None => &[],
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GeoBounds {
        let mut bounds = GeoBounds::empty();
        self.extend_bounds(&mut bounds);
        bounds
    }

    fn extend_bounds(&self, bounds: &mut GeoBounds) {
        for polygon in self.polygons() {
            for ring in polygon {
                for position in ring {
                    if let [lon, lat, ..] = position.as_slice() {
                        bounds.extend(*lon, *lat);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Feature, FeatureCollection};

    fn feature(properties: &str) -> Feature {
        serde_json::from_str(&format!(
            r#"{{"type":"Feature","properties":{properties},"geometry":null}}"#
        ))
        .expect("valid feature")
    }

    #[test]
    fn name_lookup_follows_key_priority() {
        assert_eq!(feature(r#"{"name":"C","NAME_1":"B","nom":"A"}"#).name(), Some("A"));
        assert_eq!(feature(r#"{"name":"C","NAME_1":"B"}"#).name(), Some("B"));
        assert_eq!(feature(r#"{"name":"C","nom":null}"#).name(), Some("C"));
        assert_eq!(feature(r#"{"nom":"","name":"C"}"#).name(), None);
        assert_eq!(feature(r#"{"code":"75"}"#).name(), None);
    }

    #[test]
    fn unsupported_geometries_contribute_no_polygons() {
        let collection: FeatureCollection = serde_json::from_str(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"nom":"Point"},"geometry":{"type":"Point","coordinates":[2.3,48.8]}},
                {"type":"Feature","properties":{"nom":"Carre"},"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}}
            ]}"#,
        )
        .expect("valid collection");

        assert!(collection.features[0].polygons().is_empty());
        assert_eq!(collection.features[1].polygons().len(), 1);
        let bounds = collection.bounds();
        assert_eq!((bounds.min_lon, bounds.max_lat), (0.0, 1.0));
    }
}
