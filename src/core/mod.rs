pub mod projection;
pub mod quantile;
pub mod scale;
pub mod types;

pub use projection::{GeoBounds, MercatorProjection};
pub use quantile::QuantileScale;
pub use scale::LinearScale;
pub use types::{DataPoint, Margins, PlotArea, Viewport};
