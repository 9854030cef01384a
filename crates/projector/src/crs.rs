//! EPSG codes of commonly used coordinate reference systems.

use std::fmt;

/// An EPSG registry code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Epsg(u16);

impl Epsg {
    pub const fn new(code: u16) -> Self {
        Epsg(code)
    }

    pub const fn code(&self) -> u16 {
        self.0
    }
}

impl From<u16> for Epsg {
    fn from(code: u16) -> Self {
        Epsg(code)
    }
}

impl From<Epsg> for u16 {
    fn from(epsg: Epsg) -> Self {
        epsg.0
    }
}

impl fmt::Display for Epsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

pub mod epsg {
    use super::Epsg;

    pub const WGS84: Epsg = Epsg::new(4326);
    pub const WGS84_WEB_MERCATOR: Epsg = Epsg::new(3857);
    pub const BELGIAN_LAMBERT72: Epsg = Epsg::new(31370);
    pub const BELGE72_GEO: Epsg = Epsg::new(4313);
}
