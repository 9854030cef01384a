use proj4rs::Proj;
use proj4rs::transform::transform;
use proj4wkt::wkt_to_projstring;

use crate::Error;
use crate::Point;
use crate::PointMapper;
use crate::Result;
use crate::crs::Epsg;

#[derive(Debug, Clone)]
pub struct SpatialReference {
    srs: Proj,
    epsg: Option<Epsg>,
    proj_str: String,
}

impl SpatialReference {
    pub fn from_proj(projection: &str) -> Result<Self> {
        if projection.trim().is_empty() {
            return Err(Error::InvalidCrs("empty projection string".into()));
        }

        Ok(Self {
            srs: Proj::from_proj_string(projection).map_err(|e| Error::InvalidCrs(format!("{projection}: {e}")))?,
            epsg: None,
            proj_str: projection.to_string(),
        })
    }

    pub fn from_epsg(epsg: Epsg) -> Result<Self> {
        let proj_str = crs_definitions::from_code(epsg.code())
            .map(|def| def.proj4.to_string())
            .ok_or_else(|| Error::InvalidCrs(format!("unknown EPSG code {epsg}")))?;

        Ok(Self {
            srs: Proj::from_proj_string(&proj_str).map_err(|e| Error::InvalidCrs(format!("{epsg}: {e}")))?,
            epsg: Some(epsg),
            proj_str,
        })
    }

    /// Accepts an EPSG code (`4326` or `EPSG:4326`), a WKT string or a PROJ string.
    pub fn from_definition(def: &str) -> Result<Self> {
        let def = def.trim();
        if let Some(epsg) = parse_epsg(def) {
            return Self::from_epsg(epsg);
        }

        if is_wkt_string(def) {
            let proj_str = wkt_to_projstring(def).map_err(|e| Error::InvalidCrs(format!("failed to parse WKT string ({e})")))?;
            return Self::from_proj(&proj_str);
        }

        if !def.starts_with('+') {
            return Err(Error::InvalidCrs(format!("unrecognized definition '{def}'")));
        }

        Self::from_proj(def)
    }

    pub fn to_proj(&self) -> &str {
        &self.proj_str
    }

    pub fn is_geographic(&self) -> bool {
        self.srs.is_latlong()
    }

    pub fn is_projected(&self) -> bool {
        !self.is_geographic()
    }

    pub fn epsg(&self) -> Option<Epsg> {
        self.epsg
    }

    fn proj(&self) -> &Proj {
        &self.srs
    }
}

const WKT_ROOTS: [&str; 7] = ["GEOGCS[", "PROJCS[", "GEOCCS[", "VERT_CS[", "LOCAL_CS[", "COMPD_CS[", "FITTED_C["];
const WKT2_ROOTS: [&str; 9] = [
    "GEODCRS[",
    "GEOGCRS[",
    "PROJCRS[",
    "VERTCRS[",
    "ENGCRS[",
    "COMPOUNDCRS[",
    "BOUNDCRS[",
    "PARAMETRICCRS[",
    "TIMECRS[",
];

fn is_wkt_string(s: &str) -> bool {
    WKT_ROOTS.iter().any(|&root| s.starts_with(root)) || WKT2_ROOTS.iter().any(|&root| s.starts_with(root))
}

fn parse_epsg(def: &str) -> Option<Epsg> {
    let code = match def.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("EPSG:") => &def[5..],
        _ => def,
    };

    code.parse::<u16>().ok().map(Epsg::from)
}

/// Transforms points between two spatial references.
///
/// Coordinates of geographic reference systems are in degrees, x is the longitude and y the latitude.
#[derive(Debug, Clone)]
pub struct CoordinateTransformer {
    source: SpatialReference,
    target: SpatialReference,
}

impl CoordinateTransformer {
    pub fn new(source_srs: &str, target_srs: &str) -> Result<Self> {
        Ok(Self::from_spatial_references(
            SpatialReference::from_definition(source_srs)?,
            SpatialReference::from_definition(target_srs)?,
        ))
    }

    pub fn from_epsg(source_epsg: Epsg, target_epsg: Epsg) -> Result<Self> {
        Ok(Self::from_spatial_references(
            SpatialReference::from_epsg(source_epsg)?,
            SpatialReference::from_epsg(target_epsg)?,
        ))
    }

    pub fn from_spatial_references(source: SpatialReference, target: SpatialReference) -> Self {
        CoordinateTransformer { source, target }
    }

    pub fn transform_point(&self, point: Point) -> Result<Point> {
        let mut p = if self.source.is_geographic() {
            (point.x().to_radians(), point.y().to_radians(), 0.0)
        } else {
            (point.x(), point.y(), 0.0)
        };

        transform(self.source.proj(), self.target.proj(), &mut p)?;

        if self.target.is_geographic() {
            // Convert back to degrees if the target is a geographic coordinate system
            Ok(Point::new(p.0.to_degrees(), p.1.to_degrees()))
        } else {
            Ok(Point::new(p.0, p.1))
        }
    }

    pub fn transform_points_in_place(&self, points: &mut [Point]) -> Result<()> {
        for point in points.iter_mut() {
            *point = self.transform_point(*point)?;
        }
        Ok(())
    }

    pub fn source(&self) -> &SpatialReference {
        &self.source
    }

    pub fn target(&self) -> &SpatialReference {
        &self.target
    }
}

impl PointMapper for CoordinateTransformer {
    fn map_point(&self, point: Point) -> Result<Point> {
        self.transform_point(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::crs;

    #[test]
    fn proj4rs_projection_point() {
        let trans = CoordinateTransformer::from_epsg(crs::epsg::WGS84, crs::epsg::BELGIAN_LAMBERT72).unwrap();
        let p = trans.transform_point(Point::new(3.5713882022278653, 51.04223683846715)).unwrap();
        assert_relative_eq!(p, Point::new(94079.44534873398, 192751.6060780408), epsilon = 1e-1);
    }

    #[test]
    fn proj4rs_projection_round_trip() {
        let forward = CoordinateTransformer::new("EPSG:4326", "EPSG:31370").unwrap();
        let backward = CoordinateTransformer::new("31370", "epsg:4326").unwrap();

        let mut points = vec![Point::new(3.5713882022278653, 51.04223683846715), Point::new(4.35, 50.85)];
        let original = points.clone();
        forward.transform_points_in_place(&mut points).unwrap();
        backward.transform_points_in_place(&mut points).unwrap();

        for (p, expected) in points.iter().zip(&original) {
            assert_relative_eq!(*p, *expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn epsg_import() {
        let srs = SpatialReference::from_epsg(31370.into()).unwrap();
        assert!(srs.is_projected());
        assert!(!srs.is_geographic());
        assert_eq!(srs.epsg(), Some(crs::epsg::BELGIAN_LAMBERT72));

        let srs = SpatialReference::from_definition(srs.to_proj()).unwrap();
        assert!(srs.is_projected());
        assert_eq!(srs.epsg(), None);

        let srs = SpatialReference::from_definition("EPSG:4326").unwrap();
        assert!(srs.is_geographic());
        assert_eq!(srs.epsg(), Some(crs::epsg::WGS84));

        let srs = SpatialReference::from_definition("+proj=longlat +datum=WGS84 +no_defs").unwrap();
        assert!(srs.is_geographic());
    }

    #[test]
    fn wkt_import() {
        let wkt = crs_definitions::from_code(crs::epsg::WGS84.code())
            .map(|def| def.wkt.to_string())
            .expect("Failed to get WKT for WGS84");

        let srs = SpatialReference::from_definition(&wkt).expect("Failed to parse wkt");
        assert!(srs.is_geographic());
        assert_eq!(srs.epsg(), None);
    }

    #[test]
    fn invalid_definitions() {
        assert!(matches!(SpatialReference::from_definition(""), Err(Error::InvalidCrs(_))));
        assert!(matches!(SpatialReference::from_definition("not a crs"), Err(Error::InvalidCrs(_))));
        assert!(matches!(SpatialReference::from_definition("EPSG:1"), Err(Error::InvalidCrs(_))));
        assert!(matches!(CoordinateTransformer::new("EPSG:4326", "bogus"), Err(Error::InvalidCrs(_))));
    }
}
