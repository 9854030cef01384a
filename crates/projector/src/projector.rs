use crate::fit::approximate_transform;
use crate::interpolate::{interpolate_line, interpolate_polygon};
use crate::{Affine, FnMapper, GridSampling, Point, PointMapper, Result};

#[cfg(feature = "proj4rs")]
use crate::{CoordinateTransformer, crs::Epsg};

/// Projects points, shapes and affine transforms with a single [`PointMapper`].
///
/// The mapper is usually a transformation between two coordinate reference systems, but any
/// point mapping can be used.
pub struct Projector {
    mapper: Box<dyn PointMapper>,
}

impl Projector {
    /// Creates a projector between two CRS definitions (EPSG code, PROJ or WKT string).
    #[cfg(feature = "proj4rs")]
    pub fn new(crs_from: &str, crs_to: &str) -> Result<Self> {
        let transformer = CoordinateTransformer::new(crs_from, crs_to)?;
        log::debug!("Created projector {crs_from} -> {crs_to}");
        Ok(Self::from_transformer(transformer))
    }

    #[cfg(feature = "proj4rs")]
    pub fn from_epsg(epsg_from: Epsg, epsg_to: Epsg) -> Result<Self> {
        let transformer = CoordinateTransformer::from_epsg(epsg_from, epsg_to)?;
        log::debug!("Created projector {epsg_from} -> {epsg_to}");
        Ok(Self::from_transformer(transformer))
    }

    /// Creates a projector that uses an existing transformer (or any other point mapper).
    pub fn from_transformer(transformer: impl PointMapper + 'static) -> Self {
        Projector {
            mapper: Box::new(transformer),
        }
    }

    pub fn from_affine(transform: Affine) -> Self {
        Self::from_transformer(transform)
    }

    pub fn from_fn<F>(project_point: F) -> Self
    where
        F: Fn(Point) -> Point + 'static,
    {
        Self::from_transformer(FnMapper(project_point))
    }

    pub fn mapper(&self) -> &dyn PointMapper {
        self.mapper.as_ref()
    }

    pub fn set_mapper(&mut self, mapper: impl PointMapper + 'static) {
        self.mapper = Box::new(mapper);
    }

    pub fn project_point(&self, point: Point) -> Result<Point> {
        self.mapper.map_point(point)
    }

    pub fn project_points(&self, points: &[Point]) -> Result<Vec<Point>> {
        points.iter().map(|&p| self.mapper.map_point(p)).collect()
    }

    /// Projects a ring, optionally inserting `interpolation - 1` points in every edge first.
    ///
    /// `self_closing` indicates that the last point of the ring repeats the first one.
    pub fn project_polygon(&self, polygon: &[Point], interpolation: usize, self_closing: bool) -> Result<Vec<Point>> {
        if interpolation > 1 {
            self.project_points(&interpolate_polygon(polygon, interpolation, self_closing))
        } else {
            self.project_points(polygon)
        }
    }

    /// Projects an open line, optionally inserting `interpolation - 1` points in every segment first.
    pub fn project_line(&self, line: &[Point], interpolation: usize) -> Result<Vec<Point>> {
        if interpolation > 1 {
            self.project_points(&interpolate_line(line, interpolation))
        } else {
            self.project_points(line)
        }
    }

    /// Computes the affine transform that best maps `points_from` to the destination space.
    ///
    /// Every point is mapped with `transform` and then projected, the result is the least-squares
    /// fit between the original points and the projected ones.
    pub fn project_transform(&self, transform: &Affine, points_from: &[Point]) -> Result<Affine> {
        let points_to = points_from
            .iter()
            .map(|&p| self.mapper.map_point(*transform * p))
            .collect::<Result<Vec<Point>>>()?;

        approximate_transform(points_from, &points_to)
    }

    /// Computes the affine transform that best maps the cells of a grid to the destination space.
    ///
    /// Only one cell per block of the grid is used for the fit, see [`crate::generate_points`].
    pub fn project_transform_grid(&self, transform: &Affine, grid: &GridSampling) -> Result<Affine> {
        log::debug!(
            "Projecting transform over a {}x{} grid using {} samples",
            grid.x_range(),
            grid.y_range(),
            grid.sample_count()
        );

        self.project_transform(transform, &grid.points())
    }
}
