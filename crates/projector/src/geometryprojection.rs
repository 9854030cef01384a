//! Projection of `geo-types` geometries.

use geo_types::{
    Coord, Geometry, GeometryCollection, Line, LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon,
};

use crate::{Point, Projector, Result};

fn to_points(line: &LineString) -> Vec<Point> {
    line.points().collect()
}

fn to_line_string(points: Vec<Point>) -> LineString {
    LineString::new(points.into_iter().map(Coord::from).collect())
}

impl Projector {
    pub fn project_line_string(&self, line: &LineString, interpolation: usize) -> Result<LineString> {
        Ok(to_line_string(self.project_line(&to_points(line), interpolation)?))
    }

    pub fn project_geo_polygon(&self, polygon: &Polygon, interpolation: usize) -> Result<Polygon> {
        let project_ring = |ring: &LineString| -> Result<LineString> {
            Ok(to_line_string(self.project_polygon(&to_points(ring), interpolation, true)?))
        };

        let exterior = project_ring(polygon.exterior())?;
        let interiors = polygon.interiors().iter().map(project_ring).collect::<Result<Vec<_>>>()?;

        Ok(Polygon::new(exterior, interiors))
    }

    /// Projects any `geo-types` geometry, densifying lines and rings with `interpolation` points per segment.
    ///
    /// A `Line` with interpolation becomes a `LineString`, `Rect` and `Triangle` always become a `Polygon`
    /// since their shape is not preserved by a projection.
    pub fn project_geometry(&self, geometry: &Geometry, interpolation: usize) -> Result<Geometry> {
        Ok(match geometry {
            Geometry::Point(p) => Geometry::Point(self.project_point(*p)?),
            Geometry::Line(line) => {
                let points = [Point::from(line.start), Point::from(line.end)];
                let projected = self.project_line(&points, interpolation)?;
                if projected.len() == 2 {
                    Geometry::Line(Line::new(projected[0], projected[1]))
                } else {
                    Geometry::LineString(to_line_string(projected))
                }
            }
            Geometry::LineString(line) => Geometry::LineString(self.project_line_string(line, interpolation)?),
            Geometry::Polygon(polygon) => Geometry::Polygon(self.project_geo_polygon(polygon, interpolation)?),
            Geometry::MultiPoint(points) => Geometry::MultiPoint(MultiPoint::new(self.project_points(&points.0)?)),
            Geometry::MultiLineString(lines) => Geometry::MultiLineString(MultiLineString::new(
                lines
                    .iter()
                    .map(|line| self.project_line_string(line, interpolation))
                    .collect::<Result<_>>()?,
            )),
            Geometry::MultiPolygon(polygons) => Geometry::MultiPolygon(MultiPolygon::new(
                polygons
                    .iter()
                    .map(|polygon| self.project_geo_polygon(polygon, interpolation))
                    .collect::<Result<_>>()?,
            )),
            Geometry::GeometryCollection(collection) => Geometry::GeometryCollection(GeometryCollection(
                collection
                    .iter()
                    .map(|geometry| self.project_geometry(geometry, interpolation))
                    .collect::<Result<_>>()?,
            )),
            Geometry::Rect(rect) => Geometry::Polygon(self.project_geo_polygon(&rect.to_polygon(), interpolation)?),
            Geometry::Triangle(triangle) => Geometry::Polygon(self.project_geo_polygon(&triangle.to_polygon(), interpolation)?),
        })
    }
}
