// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Query: compositional directional queries over 2D geometry.
//!
//! Two small algebras answer "where is the edge?" without ever rasterizing:
//!
//! - [`Envelope`]: a support function. Given a direction it returns the signed
//!   distance from the origin to the supporting line of a convex bounding
//!   region. Envelopes combine by pointwise maximum and drive layout:
//!   placement, alignment, padding.
//! - [`Trace`]: a ray query. Given a point and a direction it returns every
//!   signed distance at which the ray crosses a boundary. Traces combine by
//!   concatenation and drive snug placement and edge queries.
//!
//! Both are monoids with an empty identity, and both can be pushed through a
//! Kurbo [`Affine`](kurbo::Affine) so that a composite's query is built from
//! the queries of its parts without rebuilding geometry.
//!
//! ## Representation
//!
//! Envelopes and traces are plain data: a closed set of leaf generators
//! (circle, box, hull or polyline) plus combination and transform nodes,
//! evaluated by structural recursion. Values are immutable, shared through
//! `Arc`, and safe to query from many threads at once.
//!
//! ## Errors
//!
//! Evaluating the empty envelope and normalizing a zero-length direction are
//! precondition violations, reported as [`QueryError`].
//! [`Envelope::envelope_v`] is the one query that treats emptiness as an
//! answer (the zero vector).
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Affine, Point, Vec2};
//! use trellis_query::{Envelope, Trace};
//!
//! // Two unit circles, the second moved three units right.
//! let a = Envelope::from_circle(1.0);
//! let b = Envelope::from_circle(1.0).apply_transform(Affine::translate((3.0, 0.0)));
//! let both = a + b;
//! assert!((both.width().unwrap() - 5.0).abs() < 1e-9);
//! assert!((both.center().unwrap().x - 1.5).abs() < 1e-9);
//!
//! // Nearest boundary of a circle placed at x = 5, seen from the origin.
//! let t = Trace::from_circle(1.0).apply_transform(Affine::translate((5.0, 0.0)));
//! let hit = t.trace_p(Point::ORIGIN, Vec2::new(1.0, 0.0)).unwrap().unwrap();
//! assert!((hit.x - 4.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod envelope;
mod error;
pub mod geom;
mod log;
mod trace;

pub use envelope::{DEFAULT_SAMPLE_STEP_DEGREES, Envelope};
pub use error::QueryError;
pub use trace::Trace;
