//! Metadata model for multi-band raster sources.
//!
//! Describes where each band of a logical dataset lives
//! ([RasterSource]), what is known about it ([RasterBandMetadata],
//! [RasterGroupMetadata], [FixedCoord]) and how to materialize it
//! ([RasterLoadParams]). Everything is an immutable value record, safe
//! to share across worker boundaries; pixel I/O and CRS math live in
//! the loading engine, not here.

mod components;
mod defaults;
mod errors;
mod json;

pub use components::{
    BandKey, CoordValue, FixedCoord, GeoBox, GridDescriptor, RasterBandMetadata,
    RasterGroupMetadata, RasterLoadParams, RasterSource,
};
pub use defaults::with_default;
pub use errors::{RastermetaError, Result};
pub use json::JsonRepr;
