// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Diagram: immutable diagram trees queried through envelopes and traces.
//!
//! A [`Diagram`] is a tree of primitive shapes, compositions, transforms,
//! styles and names. Layout never looks at shapes directly: it asks the tree
//! for its [`Envelope`](trellis_query::Envelope) or
//! [`Trace`](trellis_query::Trace), which the tree builds bottom-up by
//! accumulating transforms from the root down.
//!
//! - Build: [`Diagram::circle`], [`Diagram::rect`], [`Diagram::polyline`],
//!   [`Diagram::spacer`], or [`Diagram::from_shape`] with any [`Geometry`].
//! - Place: [`Diagram::translate`], [`Diagram::scale`], [`Diagram::rotate_degrees`]
//!   and the other transform helpers.
//! - Compose: [`Diagram::atop`] (also `+`), [`Diagram::beside`],
//!   [`Diagram::above`], and the trace-based [`Diagram::beside_snug`].
//! - Name and find: [`Diagram::named`], [`Diagram::get_subdiagram`].
//!
//! Custom algebras over the tree implement [`DiagramVisitor`];
//! [`GetEnvelope`] and [`GetTrace`] are the two built in.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use trellis_diagram::Diagram;
//!
//! let row = Diagram::circle(1.0)
//!     .beside(&Diagram::circle(1.0).named("second"), Vec2::new(1.0, 0.0))
//!     .unwrap();
//! assert!((row.envelope().width().unwrap() - 4.0).abs() < 1e-9);
//!
//! let second = row.get_subdiagram_envelope("second").unwrap();
//! assert!((second.center().unwrap().x - 2.0).abs() < 1e-9);
//!
//! // First boundary met walking right from just past the first circle.
//! let hit = row
//!     .trace()
//!     .trace_p(Point::new(1.5, 0.0), Vec2::new(1.0, 0.0))
//!     .unwrap()
//!     .unwrap();
//! assert!((hit.x - 3.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod juxtapose;
mod log;
mod tree;
mod types;

pub use error::DiagramError;
pub use tree::{Diagram, DiagramVisitor, GetEnvelope, GetTrace};
pub use types::{Geometry, Polyline, Spacer, Style};

#[cfg(test)]
mod scenarios;
