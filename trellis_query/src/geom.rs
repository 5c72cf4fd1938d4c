// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small affine and point-set helpers layered over Kurbo.
//!
//! Kurbo covers points, vectors and affine maps; the queries additionally need
//! to split an [`Affine`] into its linear and translation parts, apply the
//! linear part to directions, and measure rotated point sets.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::{Affine, Point, Rect, Vec2};

use crate::QueryError;

/// The same map with its translation removed.
#[inline]
pub fn strip_translation(t: Affine) -> Affine {
    t.with_translation(Vec2::ZERO)
}

/// Transpose of the linear 2x2 block of `t`, with translation dropped.
///
/// Kurbo stores `[a, b, c, d, e, f]` as the matrix `[[a, c, e], [b, d, f]]`,
/// so transposing swaps `b` and `c`.
#[inline]
pub fn transpose_linear(t: Affine) -> Affine {
    let [a, b, c, d, _, _] = t.as_coeffs();
    Affine::new([a, c, b, d, 0.0, 0.0])
}

/// Apply the linear part of `t` to a direction. Directions are never translated.
#[inline]
pub fn apply_linear(t: Affine, v: Vec2) -> Vec2 {
    let [a, b, c, d, _, _] = t.as_coeffs();
    Vec2::new(a * v.x + c * v.y, b * v.x + d * v.y)
}

/// Normalize `v`, returning the unit vector together with the original length.
///
/// Zero and non-finite lengths are rejected.
#[inline]
pub fn unit(v: Vec2) -> Result<(Vec2, f64), QueryError> {
    let len = v.length();
    if len > 0.0 && len.is_finite() {
        Ok((v / len, len))
    } else {
        Err(QueryError::ZeroDirection)
    }
}

/// The four corners of `rect`, counter-clockwise from `(x0, y0)`.
pub fn rect_corners(rect: Rect) -> [Point; 4] {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
}

/// Rotate `points` by `angle` radians about the origin and return the maximum x.
///
/// Returns negative infinity for an empty slice.
pub fn max_x_after_rotation(points: &[Point], angle: f64) -> f64 {
    let rotation = Affine::rotate(angle);
    points
        .iter()
        .map(|p| (rotation * *p).x)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Convex hull by Andrew's monotone chain.
///
/// The hull is counter-clockwise with duplicate points removed. Fewer than
/// three distinct points, or a collinear set, yield the extreme points only.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Positive when `o -> a -> b` turns counter-clockwise.
#[inline]
fn turn(o: Point, a: Point, b: Point) -> f64 {
    (a - o).cross(b - o)
}
