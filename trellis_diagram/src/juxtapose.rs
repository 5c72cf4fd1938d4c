// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement operators built on envelope and trace queries.

use core::ops::Add;

use kurbo::{Point, Vec2};

use crate::error::DiagramError;
use crate::log::debug;
use crate::tree::Diagram;

impl Add for Diagram {
    type Output = Self;

    /// Same as [`Diagram::atop`].
    fn add(self, rhs: Self) -> Self {
        self.atop(&rhs)
    }
}

impl Add<&Diagram> for &Diagram {
    type Output = Diagram;

    fn add(self, rhs: &Diagram) -> Diagram {
        self.atop(rhs)
    }
}

impl Diagram {
    /// Move `other` so that its envelope just touches this one along `direction`.
    ///
    /// Only the translated `other` is returned; `self` is not included. The
    /// offset is `self.envelope_v(d) - other.envelope_v(-d)`; an empty diagram
    /// contributes a zero vector to its side of the difference.
    pub fn juxtapose(&self, other: &Self, direction: Vec2) -> Result<Self, DiagramError> {
        let ahead = self.envelope().envelope_v(direction)?;
        let behind = other.envelope().envelope_v(-direction)?;
        Ok(other.translate_by(ahead - behind))
    }

    /// `other` placed next to `self` along `direction`, drawn on top.
    pub fn beside(&self, other: &Self, direction: Vec2) -> Result<Self, DiagramError> {
        Ok(self.atop(&self.juxtapose(other, direction)?))
    }

    /// `other` placed below `self` (y grows downward).
    pub fn above(&self, other: &Self) -> Result<Self, DiagramError> {
        self.beside(other, Vec2::new(0.0, 1.0))
    }

    /// `self` moved up until it rests on top of `other`.
    ///
    /// The mirror of [`above`](Self::above): `other` stays put and is drawn
    /// first, and `self` is placed toward -y against it.
    pub fn placed_above(&self, other: &Self) -> Result<Self, DiagramError> {
        other.beside(self, Vec2::new(0.0, -1.0))
    }

    /// `other` moved so its local origin sits on the center of `self`, drawn on top.
    ///
    /// Fails with [`QueryError::EmptyEnvelope`](trellis_query::QueryError::EmptyEnvelope)
    /// when `self` has no extent to center on.
    pub fn at_center(&self, other: &Self) -> Result<Self, DiagramError> {
        let center = self.envelope().center()?;
        Ok(self.atop(&other.translate_by(center.to_vec2())))
    }

    /// Move `other` so that its outline touches this one along `direction`.
    ///
    /// Like [`juxtapose`](Self::juxtapose) but measured with traces cast from
    /// the local origins, so concave or rounded outlines sit closer than their
    /// envelopes would allow. Both diagrams need a boundary crossing on their
    /// facing sides, otherwise [`DiagramError::NoTraceHit`] is returned.
    pub fn juxtapose_snug(&self, other: &Self, direction: Vec2) -> Result<Self, DiagramError> {
        let ahead = self
            .trace()
            .trace_v(Point::ORIGIN, direction)?
            .ok_or(DiagramError::NoTraceHit)?;
        let behind = other
            .trace()
            .trace_v(Point::ORIGIN, -direction)?
            .ok_or(DiagramError::NoTraceHit)?;
        let offset = ahead - behind;
        debug!(dx = offset.x, dy = offset.y, "snug placement");
        Ok(other.translate_by(offset))
    }

    /// `other` placed snugly next to `self` along `direction`, drawn on top.
    pub fn beside_snug(&self, other: &Self, direction: Vec2) -> Result<Self, DiagramError> {
        Ok(self.atop(&self.juxtapose_snug(other, direction)?))
    }
}
