// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by envelope and trace queries.

use thiserror::Error;

/// Precondition violations raised by the query algebras.
///
/// These are logic errors in the caller rather than recoverable runtime
/// conditions. They are reported as values so callers can surface them with
/// context instead of propagating `NaN` or infinities.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// An empty envelope was evaluated, or its `center`/`width`/`height` read.
    ///
    /// Check [`Envelope::is_empty`](crate::Envelope::is_empty) first, or let
    /// emptiness propagate through [`Envelope::combine`](crate::Envelope::combine).
    #[error("evaluated an empty envelope")]
    EmptyEnvelope,
    /// A direction had zero (or non-finite) length and cannot be normalized.
    ///
    /// Also raised when a singular transform collapses a query direction.
    #[error("direction vector has zero or non-finite length")]
    ZeroDirection,
    /// A ray query reached a trace placed by a non-invertible transform.
    ///
    /// Rays cannot be pulled back through a map that collapses the plane, so
    /// the crossings of the collapsed part are unknown.
    #[error("trace was placed by a singular transform")]
    SingularTransform,
}
