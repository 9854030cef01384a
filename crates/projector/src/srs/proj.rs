use proj::Proj;

use crate::Point;
use crate::PointMapper;
use crate::Result;
use crate::crs::Epsg;

/// Coordinate transformer backed by the PROJ library.
///
/// Axis order follows the traditional GIS convention: x is the longitude for geographic systems.
pub struct CoordinateTransformer {
    transformer: Proj,
    source_srs: String,
    target_srs: String,
}

impl CoordinateTransformer {
    pub fn new(source_srs: &str, target_srs: &str) -> Result<Self> {
        let transformer = Proj::new_known_crs(source_srs, target_srs, None)?;
        log::debug!("Created PROJ transformer {source_srs} -> {target_srs}");
        Ok(CoordinateTransformer {
            transformer,
            source_srs: source_srs.into(),
            target_srs: target_srs.into(),
        })
    }

    pub fn from_epsg(source_epsg: Epsg, target_epsg: Epsg) -> Result<Self> {
        Self::new(&source_epsg.to_string(), &target_epsg.to_string())
    }

    pub fn transform_point(&self, point: Point) -> Result<Point> {
        Ok(self.transformer.convert(point)?)
    }

    pub fn transform_points_in_place(&self, points: &mut [Point]) -> Result<()> {
        self.transformer.convert_array(points)?;
        Ok(())
    }

    pub fn source_srs(&self) -> &str {
        &self.source_srs
    }

    pub fn target_srs(&self) -> &str {
        &self.target_srs
    }
}

impl PointMapper for CoordinateTransformer {
    fn map_point(&self, point: Point) -> Result<Point> {
        self.transform_point(point)
    }
}
