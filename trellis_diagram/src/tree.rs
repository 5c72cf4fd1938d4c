// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The diagram tree, its traversal, and named-subdiagram lookup.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::f64::consts::{PI, TAU};

use kurbo::{Affine, Circle, Point, Rect, Vec2};
use trellis_query::{Envelope, Trace};

use crate::error::DiagramError;
use crate::log::{debug, trace};
use crate::types::{Geometry, Polyline, Spacer, Style};

/// An immutable diagram.
///
/// A diagram is a tree of [`Node`]s. Every combinator returns a new tree and
/// never mutates its inputs, so subtrees are shared freely and a `Diagram`
/// is cheap to clone.
#[derive(Clone, Debug)]
pub struct Diagram(Arc<Node>);

/// The closed set of node kinds.
#[derive(Clone, Debug)]
pub(crate) enum Node {
    /// A shape placed by its own local transform.
    Primitive {
        shape: Arc<dyn Geometry>,
        transform: Affine,
    },
    /// Nothing at all.
    Empty,
    /// `left` drawn under `right`, both in the parent frame.
    Compose { left: Diagram, right: Diagram },
    /// `child` placed by `transform`.
    ApplyTransform { child: Diagram, transform: Affine },
    /// `child` with style attributes attached.
    ApplyStyle { child: Diagram, style: Style },
    /// `child` registered under `name`.
    ApplyName { child: Diagram, name: String },
}

/// An algebra evaluated over a diagram tree.
///
/// [`Diagram::accept`] owns the traversal: it accumulates transforms from the
/// root down (`accumulated * node_transform`), passes style and name nodes
/// through, and asks the visitor only for leaf values and how to combine
/// siblings.
pub trait DiagramVisitor {
    /// Value produced for each subtree.
    type Output;

    /// Value of a primitive shape placed by `transform` (accumulated, root frame).
    fn visit_primitive(&mut self, shape: &dyn Geometry, transform: Affine) -> Self::Output;

    /// Value of the empty diagram; the identity of [`combine`](Self::combine).
    fn visit_empty(&mut self) -> Self::Output;

    /// Combine the values of two composed siblings, `left` first.
    fn combine(&mut self, left: Self::Output, right: Self::Output) -> Self::Output;
}

/// Builds the [`Envelope`] of a diagram.
#[derive(Clone, Copy, Debug, Default)]
pub struct GetEnvelope;

impl DiagramVisitor for GetEnvelope {
    type Output = Envelope;

    fn visit_primitive(&mut self, shape: &dyn Geometry, transform: Affine) -> Envelope {
        shape.envelope().apply_transform(transform)
    }

    fn visit_empty(&mut self) -> Envelope {
        Envelope::empty()
    }

    fn combine(&mut self, left: Envelope, right: Envelope) -> Envelope {
        left + right
    }
}

/// Builds the [`Trace`] of a diagram.
#[derive(Clone, Copy, Debug, Default)]
pub struct GetTrace;

impl DiagramVisitor for GetTrace {
    type Output = Trace;

    fn visit_primitive(&mut self, shape: &dyn Geometry, transform: Affine) -> Trace {
        shape.trace().apply_transform(transform)
    }

    fn visit_empty(&mut self) -> Trace {
        Trace::empty()
    }

    fn combine(&mut self, left: Trace, right: Trace) -> Trace {
        left + right
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::empty()
    }
}

impl Diagram {
    fn from_node(node: Node) -> Self {
        Self(Arc::new(node))
    }

    /// The empty diagram.
    pub fn empty() -> Self {
        Self::from_node(Node::Empty)
    }

    /// A primitive diagram from any shape, at the identity transform.
    pub fn from_shape(shape: impl Geometry + 'static) -> Self {
        Self::from_node(Node::Primitive {
            shape: Arc::new(shape),
            transform: Affine::IDENTITY,
        })
    }

    /// A circle of `radius` centered on the origin.
    pub fn circle(radius: f64) -> Self {
        Self::from_shape(Circle::new(Point::ORIGIN, radius))
    }

    /// A `width` by `height` rectangle centered on the origin.
    pub fn rect(width: f64, height: f64) -> Self {
        Self::from_shape(Rect::from_center_size(Point::ORIGIN, (width, height)))
    }

    /// Line segments through `points`, closed into a polygon if `closed`.
    pub fn polyline(points: impl Into<Vec<Point>>, closed: bool) -> Self {
        Self::from_shape(Polyline::new(points, closed))
    }

    /// Invisible `width` by `height` space centered on the origin.
    pub fn spacer(width: f64, height: f64) -> Self {
        Self::from_shape(Spacer { width, height })
    }

    /// Returns `true` if this node is the empty diagram.
    ///
    /// Compositions of empty diagrams are not collapsed, so this is a
    /// structural check only.
    pub fn is_empty(&self) -> bool {
        matches!(*self.0, Node::Empty)
    }

    /// Draw `other` on top of `self`, without moving either.
    pub fn atop(&self, other: &Self) -> Self {
        Self::from_node(Node::Compose {
            left: self.clone(),
            right: other.clone(),
        })
    }

    /// Place this diagram by `t`.
    ///
    /// The new transform wraps the existing one: `t` is applied after any
    /// transform already on the diagram. A primitive absorbs `t` into its own
    /// transform instead of gaining a wrapper node.
    pub fn apply_transform(&self, t: Affine) -> Self {
        match &*self.0 {
            Node::Primitive { shape, transform } => Self::from_node(Node::Primitive {
                shape: shape.clone(),
                transform: t * *transform,
            }),
            _ => Self::from_node(Node::ApplyTransform {
                child: self.clone(),
                transform: t,
            }),
        }
    }

    /// Attach style attributes. Geometry is unaffected.
    pub fn styled(&self, style: Style) -> Self {
        Self::from_node(Node::ApplyStyle {
            child: self.clone(),
            style,
        })
    }

    /// Register this diagram under `name` for [`get_subdiagram`](Self::get_subdiagram).
    pub fn named(&self, name: impl Into<String>) -> Self {
        Self::from_node(Node::ApplyName {
            child: self.clone(),
            name: name.into(),
        })
    }

    /// Translate by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        self.translate_by(Vec2::new(dx, dy))
    }

    /// Translate by `v`.
    pub fn translate_by(&self, v: Vec2) -> Self {
        self.apply_transform(Affine::translate(v))
    }

    /// Scale uniformly about the origin.
    pub fn scale(&self, s: f64) -> Self {
        self.apply_transform(Affine::scale(s))
    }

    /// Scale along x only.
    pub fn scale_x(&self, s: f64) -> Self {
        self.apply_transform(Affine::scale_non_uniform(s, 1.0))
    }

    /// Scale along y only.
    pub fn scale_y(&self, s: f64) -> Self {
        self.apply_transform(Affine::scale_non_uniform(1.0, s))
    }

    /// Rotate by `degrees`; positive angles turn +x toward +y.
    pub fn rotate_degrees(&self, degrees: f64) -> Self {
        self.rotate_rad(degrees * PI / 180.0)
    }

    /// Rotate by `radians`; positive angles turn +x toward +y.
    pub fn rotate_rad(&self, radians: f64) -> Self {
        self.apply_transform(Affine::rotate(radians))
    }

    /// Rotate by a fraction of a full turn.
    pub fn rotate_by(&self, turns: f64) -> Self {
        self.rotate_rad(turns * TAU)
    }

    /// Mirror across the y axis (negate x).
    pub fn reflect_x(&self) -> Self {
        self.apply_transform(Affine::FLIP_X)
    }

    /// Mirror across the x axis (negate y).
    pub fn reflect_y(&self) -> Self {
        self.apply_transform(Affine::FLIP_Y)
    }

    /// Shear along x: `x' = x + lambda * y`.
    pub fn shear_x(&self, lambda: f64) -> Self {
        self.apply_transform(Affine::new([1.0, 0.0, lambda, 1.0, 0.0, 0.0]))
    }

    /// Shear along y: `y' = y + lambda * x`.
    pub fn shear_y(&self, lambda: f64) -> Self {
        self.apply_transform(Affine::new([1.0, lambda, 0.0, 1.0, 0.0, 0.0]))
    }

    /// Evaluate `visitor` over the tree under the ambient transform `t`.
    ///
    /// | Node | Transform passed down | Result |
    /// |---|---|---|
    /// | primitive | (leaf) | `visit_primitive(shape, t * own)` |
    /// | empty | (leaf) | `visit_empty()` |
    /// | compose | `t` to both sides | `combine(left, right)` |
    /// | transform | `t * node_transform` | child's value |
    /// | style, name | `t` | child's value |
    ///
    /// Every call walks the whole tree; nothing is cached between queries.
    pub fn accept<V: DiagramVisitor + ?Sized>(&self, visitor: &mut V, t: Affine) -> V::Output {
        match &*self.0 {
            Node::Primitive { shape, transform } => {
                trace!("visit primitive");
                visitor.visit_primitive(shape.as_ref(), t * *transform)
            }
            Node::Empty => {
                trace!("visit empty");
                visitor.visit_empty()
            }
            Node::Compose { left, right } => {
                trace!("visit compose");
                let l = left.accept(visitor, t);
                let r = right.accept(visitor, t);
                visitor.combine(l, r)
            }
            Node::ApplyTransform { child, transform } => {
                trace!(?transform, "visit transform");
                child.accept(visitor, t * *transform)
            }
            Node::ApplyStyle { child, .. } | Node::ApplyName { child, .. } => {
                child.accept(visitor, t)
            }
        }
    }

    /// Envelope of the whole diagram in its own frame.
    pub fn envelope(&self) -> Envelope {
        self.envelope_at(Affine::IDENTITY)
    }

    /// Envelope of the diagram placed by the ambient transform `t`.
    pub fn envelope_at(&self, t: Affine) -> Envelope {
        self.accept(&mut GetEnvelope, t)
    }

    /// Trace of the whole diagram in its own frame.
    pub fn trace(&self) -> Trace {
        self.trace_at(Affine::IDENTITY)
    }

    /// Trace of the diagram placed by the ambient transform `t`.
    pub fn trace_at(&self, t: Affine) -> Trace {
        self.accept(&mut GetTrace, t)
    }

    /// The style attached directly to this node, if it is a style node.
    pub fn style(&self) -> Option<&Style> {
        match &*self.0 {
            Node::ApplyStyle { style, .. } => Some(style),
            _ => None,
        }
    }

    /// Find the subdiagram registered under `name`.
    ///
    /// Returns the named subtree together with the transform accumulated on
    /// the way down to it. The search is depth-first, left before right, and
    /// the outermost match wins.
    pub fn get_subdiagram(&self, name: &str) -> Option<(Self, Affine)> {
        let found = self.find_subdiagram(name, Affine::IDENTITY);
        debug!(subdiagram = name, found = found.is_some(), "subdiagram lookup");
        found
    }

    fn find_subdiagram(&self, name: &str, t: Affine) -> Option<(Self, Affine)> {
        match &*self.0 {
            Node::Primitive { .. } | Node::Empty => None,
            Node::Compose { left, right } => left
                .find_subdiagram(name, t)
                .or_else(|| right.find_subdiagram(name, t)),
            Node::ApplyTransform { child, transform } => {
                child.find_subdiagram(name, t * *transform)
            }
            Node::ApplyStyle { child, .. } => child.find_subdiagram(name, t),
            Node::ApplyName { child, name: own } => {
                if own == name {
                    Some((child.clone(), t))
                } else {
                    child.find_subdiagram(name, t)
                }
            }
        }
    }

    /// Envelope of the named subdiagram, placed where it sits in this diagram.
    pub fn get_subdiagram_envelope(&self, name: &str) -> Result<Envelope, DiagramError> {
        let (sub, t) = self.lookup(name)?;
        Ok(sub.envelope_at(t))
    }

    /// Trace of the named subdiagram, placed where it sits in this diagram.
    pub fn get_subdiagram_trace(&self, name: &str) -> Result<Trace, DiagramError> {
        let (sub, t) = self.lookup(name)?;
        Ok(sub.trace_at(t))
    }

    fn lookup(&self, name: &str) -> Result<(Self, Affine), DiagramError> {
        self.get_subdiagram(name)
            .ok_or_else(|| DiagramError::UnknownName { name: name.into() })
    }
}
