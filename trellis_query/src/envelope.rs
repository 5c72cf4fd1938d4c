// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Envelopes: directional support functions of convex bounding regions.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::f64::consts::PI;
use core::iter::Sum;
use core::ops::Add;

use kurbo::{Affine, Point, Rect, Vec2};

use crate::QueryError;
use crate::geom::{
    apply_linear, convex_hull, max_x_after_rotation, rect_corners, strip_translation,
    transpose_linear, unit,
};
use crate::log::debug;

/// Sampling step used by [`Envelope::to_path`], in degrees.
pub const DEFAULT_SAMPLE_STEP_DEGREES: u32 = 10;

/// A directional support function.
///
/// Evaluating an envelope at a direction `d` yields the signed distance from
/// the origin to the supporting line perpendicular to `d`, scaled so that
/// `eval(d) * d` is the boundary point. For unit directions this is the usual
/// support function of the bounded convex region.
///
/// Envelopes form a monoid under [`combine`](Self::combine) (pointwise maximum)
/// with [`Envelope::empty`] as the identity. The empty envelope has no support
/// in any direction: evaluating it is an error.
///
/// Values are immutable and cheap to clone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Envelope {
    support: Option<Arc<Support>>,
}

/// Structural representation of a non-empty envelope.
#[derive(Clone, Debug, PartialEq)]
enum Support {
    /// Circle of the given radius centered on the origin.
    Circle { radius: f64 },
    /// Axis-aligned box, measured exactly under rotation.
    Rect(Rect),
    /// Convex polygon (hull vertices).
    Hull(Vec<Point>),
    /// Pointwise maximum of two envelopes.
    Max(Arc<Support>, Arc<Support>),
    /// The inner envelope pushed forward through an affine map.
    Transformed {
        inner: Arc<Support>,
        transform: Affine,
    },
}

impl Support {
    /// Support distance along the unit direction `d`.
    fn eval(&self, d: Vec2) -> Result<f64, QueryError> {
        match self {
            Self::Circle { radius } => Ok(*radius),
            Self::Rect(rect) => Ok(max_x_after_rotation(&rect_corners(*rect), -d.angle())),
            Self::Hull(points) => Ok(max_x_after_rotation(points, -d.angle())),
            Self::Max(a, b) => Ok(a.eval(d)?.max(b.eval(d)?)),
            Self::Transformed { inner, transform } => {
                let t1 = transpose_linear(strip_translation(*transform));
                let (t1d_unit, scale) = unit(apply_linear(t1, d))?;
                Ok(inner.eval(t1d_unit)? * scale + transform.translation().dot(d))
            }
        }
    }
}

impl Envelope {
    /// The empty envelope, identity of [`combine`](Self::combine).
    pub const fn empty() -> Self {
        Self { support: None }
    }

    fn from_support(support: Support) -> Self {
        Self {
            support: Some(Arc::new(support)),
        }
    }

    /// Returns `true` for the empty envelope.
    pub fn is_empty(&self) -> bool {
        self.support.is_none()
    }

    /// Envelope of an axis-aligned box.
    ///
    /// The box is rotated so the query direction lies along +x, and the
    /// maximum x extent is read off, which is exact for any direction.
    pub fn from_bounding_box(rect: Rect) -> Self {
        Self::from_support(Support::Rect(rect))
    }

    /// Envelope of a circle of `radius` centered on the origin.
    pub fn from_circle(radius: f64) -> Self {
        Self::from_support(Support::Circle { radius })
    }

    /// Envelope of a point set.
    ///
    /// More than two points are reduced to their convex hull. One or two
    /// points fall back to the bounding box of the points. No points give the
    /// empty envelope.
    pub fn from_path(points: &[Point]) -> Self {
        match points {
            [] => Self::empty(),
            [p] => Self::from_bounding_box(Rect::from_points(*p, *p)),
            [p, q] => Self::from_bounding_box(Rect::from_points(*p, *q)),
            _ => {
                let hull = convex_hull(points);
                debug!(points = points.len(), hull = hull.len(), "convex hull envelope");
                Self::from_support(Support::Hull(hull))
            }
        }
    }

    /// Evaluate the support distance along `direction`.
    ///
    /// `direction` need not be normalized: the support distance along the unit
    /// direction is divided by its length, so `eval(d) * d` is always the
    /// boundary point. Fails with
    /// [`QueryError::EmptyEnvelope`] on the empty envelope and
    /// [`QueryError::ZeroDirection`] for a zero-length direction.
    pub fn eval(&self, direction: Vec2) -> Result<f64, QueryError> {
        let support = self.support.as_ref().ok_or(QueryError::EmptyEnvelope)?;
        let (d, len) = unit(direction)?;
        Ok(support.eval(d)? / len)
    }

    /// Monoid append: the smallest convex region containing both operands.
    ///
    /// If either side is empty the other is returned unchanged.
    pub fn combine(&self, other: &Self) -> Self {
        match (&self.support, &other.support) {
            (None, _) => other.clone(),
            (_, None) => self.clone(),
            (Some(a), Some(b)) => Self::from_support(Support::Max(a.clone(), b.clone())),
        }
    }

    /// Left fold of [`combine`](Self::combine) starting from the empty envelope.
    pub fn concat<I>(envelopes: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        envelopes
            .into_iter()
            .fold(Self::empty(), |acc, e| acc.combine(&e))
    }

    /// Push the envelope forward through `t`.
    ///
    /// Directions are mapped by the transpose of the linear part of `t`,
    /// rescaled by how much that map stretches them, and the translation is
    /// projected onto the query direction. The empty envelope maps to itself.
    pub fn apply_transform(&self, t: Affine) -> Self {
        match &self.support {
            None => Self::empty(),
            Some(_) if t == Affine::IDENTITY => self.clone(),
            Some(inner) => Self::from_support(Support::Transformed {
                inner: inner.clone(),
                transform: t,
            }),
        }
    }

    /// The boundary point along `v`, as a vector from the origin.
    ///
    /// The empty envelope has no boundary and yields [`Vec2::ZERO`] for any
    /// direction.
    pub fn envelope_v(&self, v: Vec2) -> Result<Vec2, QueryError> {
        let Some(support) = &self.support else {
            return Ok(Vec2::ZERO);
        };
        let (v, _) = unit(v)?;
        Ok(v * support.eval(v)?)
    }

    /// Center of the axis-aligned extent.
    pub fn center(&self) -> Result<Point, QueryError> {
        let [right, left, down, up] = self.axis_extents()?;
        Ok(Point::new((right - left) / 2.0, (down - up) / 2.0))
    }

    /// Extent along the x axis.
    pub fn width(&self) -> Result<f64, QueryError> {
        let [right, left, _, _] = self.axis_extents()?;
        Ok(right + left)
    }

    /// Extent along the y axis.
    pub fn height(&self) -> Result<f64, QueryError> {
        let [_, _, down, up] = self.axis_extents()?;
        Ok(down + up)
    }

    /// Support distances along `+x`, `-x`, `+y`, `-y`.
    fn axis_extents(&self) -> Result<[f64; 4], QueryError> {
        let support = self.support.as_ref().ok_or(QueryError::EmptyEnvelope)?;
        Ok([
            support.eval(Vec2::new(1.0, 0.0))?,
            support.eval(Vec2::new(-1.0, 0.0))?,
            support.eval(Vec2::new(0.0, 1.0))?,
            support.eval(Vec2::new(0.0, -1.0))?,
        ])
    }

    /// Sample the boundary every [`DEFAULT_SAMPLE_STEP_DEGREES`] from 0 to 360
    /// degrees inclusive.
    ///
    /// This is a debugging aid for drawing an envelope as a polygon.
    pub fn to_path(&self) -> Result<Vec<Point>, QueryError> {
        self.to_path_with_step(DEFAULT_SAMPLE_STEP_DEGREES)
    }

    /// Sample the boundary every `step_degrees` from 0 to 360 degrees inclusive.
    ///
    /// A step of zero is treated as one degree.
    pub fn to_path_with_step(&self, step_degrees: u32) -> Result<Vec<Point>, QueryError> {
        let support = self.support.as_ref().ok_or(QueryError::EmptyEnvelope)?;
        (0..=360_u32)
            .step_by(step_degrees.max(1) as usize)
            .map(|deg| {
                let v = Vec2::from_angle(f64::from(deg) * PI / 180.0);
                Ok((v * support.eval(v)?).to_point())
            })
            .collect()
    }
}

impl Add for Envelope {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}

impl Add<&Envelope> for &Envelope {
    type Output = Envelope;

    fn add(self, rhs: &Envelope) -> Envelope {
        self.combine(rhs)
    }
}

impl Sum for Envelope {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::concat(iter)
    }
}
