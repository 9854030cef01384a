use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Point counts do not match ({from} source points <-> {to} destination points)")]
    PointCountMismatch { from: usize, to: usize },
    #[error(
        "Invalid CRS definition ({0}), supported formats are:\n\
         EPSG code: 4326\n\
         EPSG string: \"EPSG:4326\"\n\
         PROJ string: \"+proj=longlat +datum=WGS84\"\n\
         WKT string: GEOGCS[...] / GEOGCRS[...]"
    )]
    InvalidCrs(String),
    #[error("Projection error: {0}")]
    Projection(String),
    #[error("Invalid GeoJSON: {0}")]
    GeoJson(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Runtime error: {0}")]
    Runtime(String),
}

#[cfg(feature = "proj4rs")]
impl From<proj4rs::errors::Error> for Error {
    fn from(err: proj4rs::errors::Error) -> Self {
        Error::Projection(err.to_string())
    }
}

#[cfg(feature = "proj")]
impl From<proj::ProjError> for Error {
    fn from(err: proj::ProjError) -> Self {
        Error::Projection(err.to_string())
    }
}

#[cfg(feature = "proj")]
impl From<proj::ProjCreateError> for Error {
    fn from(err: proj::ProjCreateError) -> Self {
        Error::InvalidCrs(err.to_string())
    }
}
