//! Projection of GeoJSON objects.
//!
//! Members other than the coordinates are kept as is, except for `bbox` which no longer matches
//! the projected coordinates and is dropped.

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, PointType, PolygonType, Value};

use crate::{Error, Point, Projector, Result};

fn position_to_point(position: &[f64]) -> Result<Point> {
    match position {
        [x, y, ..] => Ok(Point::new(*x, *y)),
        _ => Err(Error::GeoJson(format!(
            "a position needs at least two ordinates, got {}",
            position.len()
        ))),
    }
}

/// Ordinates beyond x and y (e.g. elevation) are copied from `original`
fn point_to_position(point: Point, original: &[f64]) -> PointType {
    let mut position = vec![point.x(), point.y()];
    position.extend_from_slice(original.get(2..).unwrap_or_default());
    position
}

impl Projector {
    fn project_position(&self, position: &[f64]) -> Result<PointType> {
        let projected = self.project_point(position_to_point(position)?)?;
        Ok(point_to_position(projected, position))
    }

    /// Densified positions only carry x and y.
    fn project_positions(&self, positions: &[PointType], interpolation: usize, ring: bool) -> Result<Vec<PointType>> {
        if interpolation <= 1 {
            return positions.iter().map(|p| self.project_position(p)).collect();
        }

        let points = positions.iter().map(|p| position_to_point(p)).collect::<Result<Vec<_>>>()?;
        let projected = if ring {
            let self_closing = points.len() > 1 && points.first() == points.last();
            self.project_polygon(&points, interpolation, self_closing)?
        } else {
            self.project_line(&points, interpolation)?
        };

        Ok(projected.into_iter().map(|p| vec![p.x(), p.y()]).collect())
    }

    fn project_rings(&self, rings: &PolygonType, interpolation: usize) -> Result<PolygonType> {
        rings
            .iter()
            .map(|ring| self.project_positions(ring, interpolation, true))
            .collect()
    }

    /// Projects a GeoJSON geometry of any type, densifying lines and rings with `interpolation` points per segment.
    pub fn project_geojson_geometry(&self, geometry: &Geometry, interpolation: usize) -> Result<Geometry> {
        let value = match &geometry.value {
            Value::Point(position) => Value::Point(self.project_position(position)?),
            Value::MultiPoint(positions) => Value::MultiPoint(self.project_positions(positions, 0, false)?),
            Value::LineString(line) => Value::LineString(self.project_positions(line, interpolation, false)?),
            Value::MultiLineString(lines) => Value::MultiLineString(
                lines
                    .iter()
                    .map(|line| self.project_positions(line, interpolation, false))
                    .collect::<Result<_>>()?,
            ),
            Value::Polygon(rings) => Value::Polygon(self.project_rings(rings, interpolation)?),
            Value::MultiPolygon(polygons) => Value::MultiPolygon(
                polygons
                    .iter()
                    .map(|rings| self.project_rings(rings, interpolation))
                    .collect::<Result<_>>()?,
            ),
            Value::GeometryCollection(geometries) => Value::GeometryCollection(
                geometries
                    .iter()
                    .map(|geometry| self.project_geojson_geometry(geometry, interpolation))
                    .collect::<Result<_>>()?,
            ),
        };

        Ok(Geometry {
            bbox: None,
            value,
            foreign_members: geometry.foreign_members.clone(),
        })
    }

    pub fn project_geojson_feature(&self, feature: &Feature, interpolation: usize) -> Result<Feature> {
        Ok(Feature {
            bbox: None,
            geometry: feature
                .geometry
                .as_ref()
                .map(|geometry| self.project_geojson_geometry(geometry, interpolation))
                .transpose()?,
            id: feature.id.clone(),
            properties: feature.properties.clone(),
            foreign_members: feature.foreign_members.clone(),
        })
    }

    /// Projects a GeoJSON geometry, feature or feature collection.
    pub fn project_geojson(&self, geojson: &GeoJson, interpolation: usize) -> Result<GeoJson> {
        Ok(match geojson {
            GeoJson::Geometry(geometry) => GeoJson::Geometry(self.project_geojson_geometry(geometry, interpolation)?),
            GeoJson::Feature(feature) => GeoJson::Feature(self.project_geojson_feature(feature, interpolation)?),
            GeoJson::FeatureCollection(collection) => GeoJson::FeatureCollection(FeatureCollection {
                bbox: None,
                features: collection
                    .features
                    .iter()
                    .map(|feature| self.project_geojson_feature(feature, interpolation))
                    .collect::<Result<_>>()?,
                foreign_members: collection.foreign_members.clone(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Affine;

    fn shift() -> Projector {
        Projector::from_affine(Affine::translation(10.0, 20.0))
    }

    fn parse(json: &str) -> GeoJson {
        json.parse::<GeoJson>().expect("Invalid GeoJSON in test")
    }

    #[test]
    fn point_keeps_elevation_and_foreign_members() {
        let GeoJson::Geometry(geometry) = parse(r#"{"type": "Point", "coordinates": [1.0, 2.0, 30.0], "name": "top"}"#) else {
            panic!("Expected a geometry");
        };

        let projected = shift().project_geojson_geometry(&geometry, 0).unwrap();
        assert_eq!(projected.value, Value::Point(vec![11.0, 22.0, 30.0]));
        assert_eq!(projected.foreign_members, geometry.foreign_members);
        assert!(projected.foreign_members.is_some());
    }

    #[test]
    fn polygon_rings_are_densified_and_closed() {
        let geometry = Geometry::new(Value::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![4.0, 0.0],
            vec![4.0, 4.0],
            vec![0.0, 0.0],
        ]]));

        let projected = shift().project_geojson_geometry(&geometry, 2).unwrap();
        let Value::Polygon(rings) = projected.value else {
            panic!("Expected a polygon");
        };
        assert_eq!(
            rings[0],
            vec![
                vec![10.0, 20.0],
                vec![12.0, 20.0],
                vec![14.0, 20.0],
                vec![14.0, 22.0],
                vec![14.0, 24.0],
                vec![12.0, 22.0],
                vec![10.0, 20.0],
            ]
        );
    }

    #[test]
    fn multi_point_is_never_densified() {
        let geometry = Geometry::new(Value::MultiPoint(vec![vec![0.0, 0.0], vec![4.0, 0.0]]));
        let projected = shift().project_geojson_geometry(&geometry, 4).unwrap();
        assert_eq!(projected.value, Value::MultiPoint(vec![vec![10.0, 20.0], vec![14.0, 20.0]]));
    }

    #[test]
    fn line_strings() {
        let geometry = Geometry::new(Value::MultiLineString(vec![
            vec![vec![0.0, 0.0], vec![2.0, 0.0]],
            vec![vec![0.0, 0.0], vec![0.0, 2.0]],
        ]));
        let projected = shift().project_geojson_geometry(&geometry, 2).unwrap();
        assert_eq!(
            projected.value,
            Value::MultiLineString(vec![
                vec![vec![10.0, 20.0], vec![11.0, 20.0], vec![12.0, 20.0]],
                vec![vec![10.0, 20.0], vec![10.0, 21.0], vec![10.0, 22.0]],
            ])
        );
    }

    #[test]
    fn geometry_collection_recurses() {
        let geometry = Geometry::new(Value::GeometryCollection(vec![
            Geometry::new(Value::Point(vec![0.0, 0.0])),
            Geometry::new(Value::MultiPolygon(vec![vec![vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
                vec![0.0, 0.0],
            ]]])),
        ]));

        let projected = shift().project_geojson_geometry(&geometry, 0).unwrap();
        assert_eq!(
            projected.value,
            Value::GeometryCollection(vec![
                Geometry::new(Value::Point(vec![10.0, 20.0])),
                Geometry::new(Value::MultiPolygon(vec![vec![vec![
                    vec![10.0, 20.0],
                    vec![11.0, 20.0],
                    vec![11.0, 21.0],
                    vec![10.0, 20.0],
                ]]])),
            ])
        );
    }

    #[test]
    fn feature_collection_keeps_properties_and_drops_bbox() {
        let geojson = parse(
            r#"{
                "type": "FeatureCollection",
                "bbox": [0.0, 0.0, 1.0, 1.0],
                "features": [
                    {
                        "type": "Feature",
                        "id": "a",
                        "properties": {"name": "first"},
                        "geometry": {"type": "Point", "coordinates": [1.0, 1.0]}
                    },
                    {
                        "type": "Feature",
                        "properties": null,
                        "geometry": null
                    }
                ]
            }"#,
        );

        let GeoJson::FeatureCollection(projected) = shift().project_geojson(&geojson, 0).unwrap() else {
            panic!("Expected a feature collection");
        };
        let GeoJson::FeatureCollection(original) = geojson else {
            panic!("Expected a feature collection");
        };

        assert!(projected.bbox.is_none());
        assert_eq!(projected.features.len(), 2);
        assert_eq!(projected.features[0].id, original.features[0].id);
        assert_eq!(projected.features[0].properties, original.features[0].properties);
        assert_eq!(
            projected.features[0].geometry.as_ref().map(|g| g.value.clone()),
            Some(Value::Point(vec![11.0, 21.0]))
        );
        assert!(projected.features[1].geometry.is_none());
    }

    #[test]
    fn invalid_position() {
        let geometry = Geometry::new(Value::LineString(vec![vec![0.0, 0.0], vec![1.0]]));
        assert!(matches!(shift().project_geojson_geometry(&geometry, 0), Err(Error::GeoJson(_))));
        assert!(matches!(shift().project_geojson_geometry(&geometry, 3), Err(Error::GeoJson(_))));
    }
}
