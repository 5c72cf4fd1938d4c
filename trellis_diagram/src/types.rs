// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive shapes and the opaque style payload.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Affine, Circle, Point, Rect};
use trellis_query::{Envelope, Trace};

/// Geometry a primitive shape supplies to the diagram traversal.
///
/// Both queries are expressed in the shape's own local, untransformed frame;
/// the traversal applies the accumulated transform on the shape's behalf.
pub trait Geometry: Debug + Send + Sync {
    /// Support function of the shape.
    fn envelope(&self) -> Envelope;

    /// Ray crossings of the shape's outline.
    fn trace(&self) -> Trace;
}

/// A circle may sit anywhere; its queries are built at the origin and moved.
impl Geometry for Circle {
    fn envelope(&self) -> Envelope {
        let at_center = Affine::translate(self.center.to_vec2());
        Envelope::from_circle(self.radius).apply_transform(at_center)
    }

    fn trace(&self) -> Trace {
        let at_center = Affine::translate(self.center.to_vec2());
        Trace::from_circle(self.radius).apply_transform(at_center)
    }
}

impl Geometry for Rect {
    fn envelope(&self) -> Envelope {
        Envelope::from_bounding_box(*self)
    }

    fn trace(&self) -> Trace {
        Trace::from_rect(*self)
    }
}

/// A sequence of line segments, optionally closed into a polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Join the last vertex back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Create a polyline through `points`.
    pub fn new(points: impl Into<Vec<Point>>, closed: bool) -> Self {
        Self {
            points: points.into(),
            closed,
        }
    }
}

impl Geometry for Polyline {
    fn envelope(&self) -> Envelope {
        Envelope::from_path(&self.points)
    }

    fn trace(&self) -> Trace {
        Trace::from_polyline(&self.points, self.closed)
    }
}

/// Invisible space: occupies a centered box in layout but has no outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacer {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Geometry for Spacer {
    fn envelope(&self) -> Envelope {
        Envelope::from_bounding_box(Rect::from_center_size(
            Point::ORIGIN,
            (self.width, self.height),
        ))
    }

    fn trace(&self) -> Trace {
        Trace::empty()
    }
}

/// Style attributes attached by [`Diagram::styled`](crate::Diagram::styled).
///
/// Geometry ignores styles; they are carried for renderers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    entries: Vec<(String, String)>,
}

impl Style {
    /// An empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing an earlier value for the same key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` when no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn offset_circle_queries_follow_center() {
        let c = Circle::new((2.0, 0.5), 1.0);
        let env = c.envelope();
        let center = env.center().unwrap();
        assert!(close(center.x, 2.0) && close(center.y, 0.5));
        let hit = c.trace().trace_p(Point::ORIGIN, Vec2::new(1.0, 0.0)).unwrap();
        assert!(hit.is_some(), "ray along +x passes through the circle");
    }

    #[test]
    fn spacer_has_extent_but_no_outline() {
        let s = Spacer {
            width: 4.0,
            height: 2.0,
        };
        assert!(close(s.envelope().width().unwrap(), 4.0));
        assert!(close(s.envelope().height().unwrap(), 2.0));
        assert_eq!(s.trace().trace_v(Point::ORIGIN, Vec2::new(1.0, 0.0)), Ok(None));
    }

    #[test]
    fn closed_polyline_triangle() {
        let tri = Polyline::new(
            [Point::new(-1.0, -1.0), Point::new(1.0, -1.0), Point::new(0.0, 1.0)],
            true,
        );
        assert!(close(tri.envelope().width().unwrap(), 2.0));
        let up = tri.trace().trace_v(Point::ORIGIN, Vec2::new(0.0, -1.0)).unwrap();
        assert!(close(up.unwrap().y, -1.0));
    }

    #[test]
    fn style_replaces_and_looks_up() {
        let s = Style::new()
            .with("stroke", "red")
            .with("fill", "none")
            .with("stroke", "blue");
        assert_eq!(s.get("stroke"), Some("blue"));
        assert_eq!(s.get("fill"), Some("none"));
        assert_eq!(s.get("width"), None);
        assert!(!s.is_empty());
        assert!(Style::new().is_empty());
    }
}
