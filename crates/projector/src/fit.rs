//! Least-squares estimation of an affine transform from point correspondences.

use nalgebra::DMatrix;

use crate::{Affine, Error, Point, Result};

/// Finds the affine transform that most closely maps `points_from` onto `points_to`.
///
/// The coefficients are the least-squares solution of
///
/// ```text
/// | x_1 y_1 1 |   | a d |   | x'_1 y'_1 |
/// | x_2 y_2 1 | . | b e | = | x'_2 y'_2 |
/// | ......... |   | c f |   | ......... |
/// ```
///
/// At least 3 non-collinear source points are needed for a unique solution. This is not
/// validated: for underdetermined or rank deficient systems the minimum-norm solution is
/// returned.
///
/// # Errors
/// Returns [`Error::PointCountMismatch`] when the inputs differ in length.
pub fn approximate_transform(points_from: &[Point], points_to: &[Point]) -> Result<Affine> {
    if points_from.len() != points_to.len() {
        return Err(Error::PointCountMismatch {
            from: points_from.len(),
            to: points_to.len(),
        });
    }

    let n = points_from.len();
    if n == 0 {
        return Ok(Affine::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
    }

    let a = DMatrix::<f64>::from_fn(n, 3, |row, col| match col {
        0 => points_from[row].x(),
        1 => points_from[row].y(),
        _ => 1.0,
    });

    let b = DMatrix::<f64>::from_fn(n, 2, |row, col| match col {
        0 => points_to[row].x(),
        _ => points_to[row].y(),
    });

    let svd = a.svd(true, true);
    // Same cut-off as LAPACK gelsd with the default rcond
    let tolerance = f64::EPSILON * n.max(3) as f64 * svd.singular_values.max();

    let rank = svd.rank(tolerance);
    if rank < 3 {
        log::warn!("Affine fit over {n} point pairs is rank deficient (rank {rank}), using the minimum-norm solution");
    } else {
        log::debug!("Fitting affine transform over {n} point pairs");
    }

    let x = svd.solve(&b, tolerance).map_err(|e| Error::Runtime(format!("Least squares solve failed: {e}")))?;

    Ok(Affine::new(x[(0, 0)], x[(1, 0)], x[(2, 0)], x[(0, 1)], x[(1, 1)], x[(2, 1)]))
}

/// Sum of the squared distances between the transformed `points_from` and `points_to`.
pub fn squared_residual(transform: &Affine, points_from: &[Point], points_to: &[Point]) -> f64 {
    points_from
        .iter()
        .zip(points_to)
        .map(|(&from, &to)| {
            let delta = *transform * from - to;
            delta.x() * delta.x() + delta.y() * delta.y()
        })
        .sum()
}
