use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::core::PlotArea;
use crate::error::{ChartError, ChartResult};

const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;

/// Longitude/latitude bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl GeoBounds {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min_lon: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        }
    }

    pub fn extend(&mut self, lon: f64, lat: f64) {
        if !lon.is_finite() || !lat.is_finite() {
            return;
        }
        self.min_lon = self.min_lon.min(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lon = self.max_lon.max(lon);
        self.max_lat = self.max_lat.max(lat);
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min_lon > self.max_lon || self.min_lat > self.max_lat
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }
}

/// Spherical Mercator projection scaled and translated onto a plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorProjection {
    scale: f64,
    translate_x: f64,
    translate_y: f64,
}

impl MercatorProjection {
    /// Fits `bounds` inside `area`, preserving aspect ratio and centering it.
    pub fn fit(bounds: GeoBounds, area: PlotArea) -> ChartResult<Self> {
        if bounds.is_empty() {
            return Err(ChartError::InvalidData(
                "cannot fit a projection to empty bounds".to_owned(),
            ));
        }
        if !area.is_valid() {
            return Err(ChartError::InvalidData(
                "projection plot area must be finite and non-empty".to_owned(),
            ));
        }

        let (x0, y0) = mercator_raw(bounds.min_lon, bounds.min_lat);
        let (x1, y1) = mercator_raw(bounds.max_lon, bounds.max_lat);
        let span_x = x1 - x0;
        let span_y = y1 - y0;

        let scale = match (span_x > 0.0, span_y > 0.0) {
            (true, true) => (area.width() / span_x).min(area.height() / span_y),
            (true, false) => area.width() / span_x,
            (false, true) => area.height() / span_y,
            (false, false) => {
                return Err(ChartError::InvalidData(
                    "cannot fit a projection to a single point".to_owned(),
                ));
            }
        };

        let translate_x = area.left + (area.width() - scale * span_x) / 2.0 - scale * x0;
        let translate_y = area.top + (area.height() - scale * span_y) / 2.0 + scale * y1;
        Ok(Self {
            scale,
            translate_x,
            translate_y,
        })
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    /// Projects degrees to pixels; north is up.
    #[must_use]
    pub fn project(self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = mercator_raw(lon, lat);
        (
            self.translate_x + self.scale * x,
            self.translate_y - self.scale * y,
        )
    }

    /// Pixels back to degrees.
    #[must_use]
    pub fn invert(self, x: f64, y: f64) -> (f64, f64) {
        let raw_x = (x - self.translate_x) / self.scale;
        let raw_y = (self.translate_y - y) / self.scale;
        (
            raw_x.to_degrees(),
            (2.0 * raw_y.exp().atan() - FRAC_PI_2).to_degrees(),
        )
    }
}

fn mercator_raw(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
    (
        lon.to_radians(),
        (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln(),
    )
}
