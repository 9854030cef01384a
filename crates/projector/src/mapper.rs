use crate::{Affine, Point, Result};

/// Maps a single point from the source to the destination coordinate space.
///
/// This is the only capability a [`crate::Projector`] needs, whether the mapping is a CRS
/// transformation, an affine transform or an arbitrary function.
pub trait PointMapper {
    fn map_point(&self, point: Point) -> Result<Point>;
}

impl PointMapper for Affine {
    fn map_point(&self, point: Point) -> Result<Point> {
        Ok(self.apply_to_point(point))
    }
}

impl<M: PointMapper + ?Sized> PointMapper for Box<M> {
    fn map_point(&self, point: Point) -> Result<Point> {
        (**self).map_point(point)
    }
}

impl<M: PointMapper + ?Sized> PointMapper for &M {
    fn map_point(&self, point: Point) -> Result<Point> {
        (**self).map_point(point)
    }
}

/// Adapts an infallible function to a [`PointMapper`].
#[derive(Clone, Copy)]
pub struct FnMapper<F>(pub F);

impl<F> PointMapper for FnMapper<F>
where
    F: Fn(Point) -> Point,
{
    fn map_point(&self, point: Point) -> Result<Point> {
        Ok((self.0)(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affine_mapper() {
        let mapper = Affine::new(2.0, 0.0, 1.0, 0.0, 3.0, -1.0);
        assert_eq!(mapper.map_point(Point::new(1.0, 1.0)).unwrap(), Point::new(3.0, 2.0));
    }

    #[test]
    fn fn_mapper() {
        let mapper = FnMapper(|p: Point| Point::new(p.y(), p.x()));
        assert_eq!(mapper.map_point(Point::new(1.0, 2.0)).unwrap(), Point::new(2.0, 1.0));

        let boxed: Box<dyn PointMapper> = Box::new(mapper);
        assert_eq!(boxed.map_point(Point::new(5.0, 6.0)).unwrap(), Point::new(6.0, 5.0));
    }
}
