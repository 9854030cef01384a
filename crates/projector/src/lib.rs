#![warn(clippy::unwrap_used)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Projection of points, shapes, GeoJSON objects and raster transforms between coordinate reference systems.
//!
//! Raster transforms are projected by sampling the pixel grid ([`generate_points`]) and fitting a new
//! affine transform through the projected samples ([`approximate_transform`]).

pub type Result<T = ()> = std::result::Result<T, Error>;

mod affine;
pub mod crs;
mod error;
mod fit;
mod geojsonprojection;
mod geometryprojection;
pub mod interpolate;
mod mapper;
mod projector;
pub mod sampling;
pub mod srs;

#[doc(inline)]
pub use affine::Affine;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use fit::{approximate_transform, squared_residual};
#[doc(inline)]
pub use mapper::{FnMapper, PointMapper};
#[doc(inline)]
pub use projector::Projector;
#[doc(inline)]
pub use sampling::{DEFAULT_BLOCK_SIZE, GridSampling, generate_points};

#[cfg(feature = "proj4rs")]
#[doc(inline)]
pub use srs::{CoordinateTransformer, SpatialReference};

pub type Point<T = f64> = geo_types::Point<T>;
