use std::fmt::Debug;
use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};

use crate::{Error, Point, Result};

/// A 2D affine transformation `(x, y) -> (a * x + b * y + c, d * x + e * y + f)`.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affine([f64; 6]);

impl Affine {
    /// Creates a new `Affine` from the coefficients `(a, b, c, d, e, f)`.
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Affine([a, b, c, d, e, f])
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    pub const fn translation(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, x, 0.0, 1.0, y)
    }

    pub const fn scale(x: f64, y: f64) -> Self {
        Self::new(x, 0.0, 0.0, 0.0, y, 0.0)
    }

    /// Creates an `Affine` from a GDAL style geotransform.
    ///
    /// The GDAL coefficients are in the order: [top left x, pixel width, rotation, top left y, rotation, pixel height].
    pub const fn from_gdal(gt: [f64; 6]) -> Self {
        Self::new(gt[1], gt[2], gt[0], gt[4], gt[5], gt[3])
    }

    /// Returns the coefficients in GDAL geotransform order.
    pub const fn to_gdal(&self) -> [f64; 6] {
        let [a, b, c, d, e, f] = self.0;
        [c, a, b, f, d, e]
    }

    /// Returns the coefficients `(a, b, c, d, e, f)`.
    pub const fn coefficients(&self) -> [f64; 6] {
        self.0
    }

    pub fn apply(&self, x: f64, y: f64) -> Point {
        let [a, b, c, d, e, f] = self.0;
        Point::new(a * x + b * y + c, d * x + e * y + f)
    }

    pub fn apply_to_point(&self, point: Point) -> Point {
        self.apply(point.x(), point.y())
    }

    /// The translation part of the transform (the top left corner for raster transforms)
    pub fn origin(&self) -> Point {
        Point::new(self.0[2], self.0[5])
    }

    pub fn is_rectilinear(&self) -> bool {
        self.0[1] == 0.0 && self.0[3] == 0.0
    }

    pub fn determinant(&self) -> f64 {
        let [a, b, _, d, e, _] = self.0;
        a * e - b * d
    }

    pub fn invert(&self) -> Result<Self> {
        let [a, b, c, d, e, f] = self.0;

        if self.is_rectilinear() && a != 0.0 && e != 0.0 {
            // No rotation: avoid the determinant to keep full precision
            return Ok(Self::new(1.0 / a, 0.0, -c / a, 0.0, 1.0 / e, -f / e));
        }

        let det = self.determinant();
        let magnitude = f64::max(f64::max(a.abs(), b.abs()), f64::max(d.abs(), e.abs()));

        if det.abs() <= 1e-10 * magnitude * magnitude {
            return Err(Error::Runtime(
                "Affine::invert: Determinant is too small, cannot compute inverse.".to_string(),
            ));
        }

        let inv_det = 1.0 / det;
        let ia = e * inv_det;
        let ib = -b * inv_det;
        let id = -d * inv_det;
        let ie = a * inv_det;

        Ok(Self::new(ia, ib, -(ia * c + ib * f), id, ie, -(id * c + ie * f)))
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::identity()
    }
}

/// `lhs * rhs` applies `rhs` first, then `lhs`.
impl Mul for Affine {
    type Output = Affine;

    fn mul(self, rhs: Affine) -> Affine {
        let [a1, b1, c1, d1, e1, f1] = self.0;
        let [a2, b2, c2, d2, e2, f2] = rhs.0;

        Affine::new(
            a1 * a2 + b1 * d2,
            a1 * b2 + b1 * e2,
            a1 * c2 + b1 * f2 + c1,
            d1 * a2 + e1 * d2,
            d1 * b2 + e1 * e2,
            d1 * c2 + e1 * f2 + f1,
        )
    }
}

impl Mul<Point> for Affine {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        self.apply_to_point(rhs)
    }
}

impl From<[f64; 6]> for Affine {
    fn from(coefficients: [f64; 6]) -> Self {
        Affine(coefficients)
    }
}

impl From<Affine> for [f64; 6] {
    fn from(affine: Affine) -> [f64; 6] {
        affine.0
    }
}

impl Debug for Affine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d, e, ff] = self.0;
        write!(f, "Affine({a}, {b}, {c}, {d}, {e}, {ff})")
    }
}

impl AbsDiffEq for Affine {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Affine {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}
