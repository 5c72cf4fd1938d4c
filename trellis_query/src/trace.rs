// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traces: every signed distance at which a ray crosses a boundary.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::iter::Sum;
use core::ops::Add;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Vec2};

use crate::QueryError;
use crate::geom::{apply_linear, rect_corners, unit};
use crate::log::{debug, trace};

/// A ray query against a boundary.
///
/// Evaluating a trace at a point `p` and direction `d` yields every parameter
/// `s` such that `p + s * d` lies on the boundary. Positive values are ahead of
/// `p`, negative values behind it. Results are neither sorted nor deduplicated.
///
/// Traces form a monoid under [`combine`](Self::combine) (concatenation of the
/// crossing lists) with [`Trace::empty`], which never reports a crossing, as
/// the identity.
///
/// Values are immutable and cheap to clone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trace {
    boundary: Option<Arc<Boundary>>,
}

/// Structural representation of a non-empty trace.
#[derive(Clone, Debug, PartialEq)]
enum Boundary {
    /// Circle of the given radius centered on the origin.
    Circle { radius: f64 },
    /// Outline of an axis-aligned box.
    Rect(Rect),
    /// Line segments through `points`, closed back to the first point if `closed`.
    Polyline { points: Vec<Point>, closed: bool },
    /// Crossings of `left` followed by crossings of `right`.
    Concat(Arc<Boundary>, Arc<Boundary>),
    /// The inner boundary placed by an affine map, stored as its inverse.
    Transformed {
        inner: Arc<Boundary>,
        inverse: Affine,
    },
    /// A boundary placed by a singular map. Reports no crossings.
    Collapsed,
}

impl Boundary {
    fn crossings(&self, p: Point, d: Vec2, out: &mut Vec<f64>) {
        match self {
            Self::Circle { radius } => circle_crossings(*radius, p, d, out),
            Self::Rect(rect) => {
                let [a, b, c, e] = rect_corners(*rect);
                for (s0, s1) in [(a, b), (b, c), (c, e), (e, a)] {
                    segment_crossing(s0, s1, p, d, out);
                }
            }
            Self::Polyline { points, closed } => {
                for pair in points.windows(2) {
                    segment_crossing(pair[0], pair[1], p, d, out);
                }
                if *closed && points.len() > 2 {
                    segment_crossing(points[points.len() - 1], points[0], p, d, out);
                }
            }
            Self::Concat(a, b) => {
                a.crossings(p, d, out);
                b.crossings(p, d, out);
            }
            Self::Transformed { inner, inverse } => {
                inner.crossings(*inverse * p, apply_linear(*inverse, d), out);
            }
            Self::Collapsed => {}
        }
    }

    fn is_collapsed(&self) -> bool {
        match self {
            Self::Collapsed => true,
            Self::Concat(a, b) => a.is_collapsed() || b.is_collapsed(),
            Self::Transformed { inner, .. } => inner.is_collapsed(),
            Self::Circle { .. } | Self::Rect(_) | Self::Polyline { .. } => false,
        }
    }
}

/// Roots of `|p + s d|^2 = r^2`. A tangent ray reports the double root twice.
fn circle_crossings(radius: f64, p: Point, d: Vec2, out: &mut Vec<f64>) {
    let pv = p.to_vec2();
    let a = d.hypot2();
    if a == 0.0 {
        return;
    }
    let b = 2.0 * pv.dot(d);
    let c = pv.hypot2() - radius * radius;
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return;
    }
    let root = disc.sqrt();
    out.push((-b - root) / (2.0 * a));
    out.push((-b + root) / (2.0 * a));
}

/// Parameter along `p + s d` where the ray meets segment `a..b`, endpoints included.
fn segment_crossing(a: Point, b: Point, p: Point, d: Vec2, out: &mut Vec<f64>) {
    let edge = b - a;
    let denom = d.cross(edge);
    if denom == 0.0 {
        // Parallel (or degenerate) segments never cross transversally.
        return;
    }
    let w = a - p;
    let s = w.cross(edge) / denom;
    let t = w.cross(d) / denom;
    if (0.0..=1.0).contains(&t) {
        out.push(s);
    }
}

impl Trace {
    /// The empty trace, identity of [`combine`](Self::combine).
    pub const fn empty() -> Self {
        Self { boundary: None }
    }

    fn from_boundary(boundary: Boundary) -> Self {
        Self {
            boundary: Some(Arc::new(boundary)),
        }
    }

    /// Trace of a circle of `radius` centered on the origin.
    pub fn from_circle(radius: f64) -> Self {
        Self::from_boundary(Boundary::Circle { radius })
    }

    /// Trace of the outline of `rect`.
    ///
    /// Edges include their endpoints, so a ray through a corner reports that
    /// crossing once per adjoining edge.
    pub fn from_rect(rect: Rect) -> Self {
        Self::from_boundary(Boundary::Rect(rect))
    }

    /// Trace of the segments joining consecutive `points`.
    ///
    /// When `closed` is set, the last point is joined back to the first.
    /// Fewer than two points give the empty trace. Segments include their
    /// endpoints, so a ray through a shared vertex reports it twice.
    pub fn from_polyline(points: &[Point], closed: bool) -> Self {
        if points.len() < 2 {
            return Self::empty();
        }
        Self::from_boundary(Boundary::Polyline {
            points: points.to_vec(),
            closed,
        })
    }

    /// All signed crossing distances of the ray from `point` along `direction`.
    ///
    /// Distances are measured in multiples of `direction`; callers usually pass
    /// a unit vector.
    pub fn eval(&self, point: Point, direction: Vec2) -> Vec<f64> {
        let mut out = Vec::new();
        if let Some(boundary) = &self.boundary {
            boundary.crossings(point, direction, &mut out);
        }
        out
    }

    /// Monoid append: the crossings of `self` followed by those of `other`.
    pub fn combine(&self, other: &Self) -> Self {
        match (&self.boundary, &other.boundary) {
            (None, _) => other.clone(),
            (_, None) => self.clone(),
            (Some(a), Some(b)) => Self::from_boundary(Boundary::Concat(a.clone(), b.clone())),
        }
    }

    /// Left fold of [`combine`](Self::combine) starting from the empty trace.
    pub fn concat<I>(traces: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        traces
            .into_iter()
            .fold(Self::empty(), |acc, t| acc.combine(&t))
    }

    /// Place the traced boundary by `t`.
    ///
    /// Queries are pulled back through `t⁻¹`: the point by the full inverse,
    /// the direction by its linear part only.
    ///
    /// A singular `t` collapses the boundary: [`eval`](Self::eval) reports no
    /// crossings for it, and [`trace_v`](Self::trace_v) and
    /// [`trace_p`](Self::trace_p) fail with [`QueryError::SingularTransform`].
    pub fn apply_transform(&self, t: Affine) -> Self {
        match &self.boundary {
            None => Self::empty(),
            Some(_) if t == Affine::IDENTITY => self.clone(),
            Some(inner) => {
                let inverse = t.inverse();
                if t.determinant() == 0.0 || !inverse.is_finite() {
                    debug!(?t, "trace collapsed by singular transform");
                    return Self::from_boundary(Boundary::Collapsed);
                }
                Self::from_boundary(Boundary::Transformed {
                    inner: inner.clone(),
                    inverse,
                })
            }
        }
    }

    /// Vector from `point` to the nearest crossing ahead of it along `direction`.
    ///
    /// `direction` is normalized first, so the result has the length of the
    /// true distance. Crossings behind `point` are ignored; `Ok(None)` means no
    /// hit, which is distinct from a hit at distance zero.
    pub fn trace_v(&self, point: Point, direction: Vec2) -> Result<Option<Vec2>, QueryError> {
        let (direction, _) = unit(direction)?;
        if self.boundary.as_ref().is_some_and(|b| b.is_collapsed()) {
            return Err(QueryError::SingularTransform);
        }
        let distances = self.eval(point, direction);
        let nearest = distances
            .iter()
            .copied()
            .filter(|s| *s >= 0.0)
            .fold(None, |best: Option<f64>, s| {
                Some(best.map_or(s, |b| b.min(s)))
            });
        trace!(crossings = distances.len(), ?nearest, "trace_v");
        Ok(nearest.map(|s| direction * s))
    }

    /// The nearest boundary point ahead of `point` along `direction`.
    pub fn trace_p(&self, point: Point, direction: Vec2) -> Result<Option<Point>, QueryError> {
        Ok(self.trace_v(point, direction)?.map(|hit| point + hit))
    }
}

impl Add for Trace {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}

impl Add<&Trace> for &Trace {
    type Output = Trace;

    fn add(self, rhs: &Trace) -> Trace {
        self.combine(rhs)
    }
}

impl Sum for Trace {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::concat(iter)
    }
}
