pub mod band;
pub mod coord;
pub mod geobox;
pub mod group;
pub mod load;
pub mod source;

pub use band::RasterBandMetadata;
pub use coord::{CoordValue, FixedCoord};
pub use geobox::{GeoBox, GridDescriptor};
pub use group::{BandKey, RasterGroupMetadata};
pub use load::RasterLoadParams;
pub use source::RasterSource;
