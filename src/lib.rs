//! Coordinate reference system switching for points, shapes, GeoJSON and raster transforms.
//!
//! Facade over the workspace crates, see [`projector`] for the details.

pub use projector;

pub use projector::{
    Affine, DEFAULT_BLOCK_SIZE, Error, FnMapper, GridSampling, Point, PointMapper, Projector, Result, approximate_transform,
    crs, generate_points, interpolate, sampling, srs,
};

#[cfg(feature = "proj4rs")]
pub use projector::{CoordinateTransformer, SpatialReference};
