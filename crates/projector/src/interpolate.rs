//! Densification of rings and lines before projection.
//!
//! A straight segment in the source CRS is generally curved in the destination CRS, inserting
//! extra vertices keeps the projected shape close to the true one.

use crate::Point;

fn push_segment(output: &mut Vec<Point>, start: Point, end: Point, interpolation: usize) {
    let step = (end - start) / interpolation as f64;
    output.extend((0..interpolation).map(|i| start + step * i as f64));
}

/// Inserts `interpolation - 1` evenly spaced points in every edge of the ring, including the edge
/// from the last vertex back to the first one.
///
/// When `self_closing` is set the last point of `polygon` is expected to repeat the first one,
/// the result is then closed in the same way.
/// An `interpolation` of 0 or 1 returns the ring unchanged.
pub fn interpolate_polygon(polygon: &[Point], interpolation: usize, self_closing: bool) -> Vec<Point> {
    let vertex_count = polygon.len().saturating_sub(usize::from(self_closing));
    if interpolation <= 1 || vertex_count == 0 {
        return polygon.to_vec();
    }

    let mut result = Vec::with_capacity(vertex_count * interpolation + 1);
    for idx in 0..vertex_count {
        push_segment(&mut result, polygon[idx], polygon[(idx + 1) % vertex_count], interpolation);
    }

    if self_closing {
        result.push(polygon[0]);
    }

    result
}

/// Inserts `interpolation - 1` evenly spaced points in every segment of an open line.
///
/// An `interpolation` of 0 or 1 returns the line unchanged.
pub fn interpolate_line(line: &[Point], interpolation: usize) -> Vec<Point> {
    if interpolation <= 1 || line.len() < 2 {
        return line.to_vec();
    }

    let mut result = Vec::with_capacity((line.len() - 1) * interpolation + 1);
    for segment in line.windows(2) {
        push_segment(&mut result, segment[0], segment[1], interpolation);
    }
    result.push(line[line.len() - 1]);

    result
}
