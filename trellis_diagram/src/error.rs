// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while placing diagrams or looking up subdiagrams.

use alloc::string::String;

use thiserror::Error;
use trellis_query::QueryError;

/// Failures of composition operators and named lookups.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    /// An envelope or trace query was given invalid input.
    #[error(transparent)]
    Query(#[from] QueryError),
    /// Snug placement found no boundary ahead of the origin.
    #[error("no trace hit along the placement direction")]
    NoTraceHit,
    /// No subdiagram carries the requested name.
    #[error("no subdiagram named `{name}`")]
    UnknownName {
        /// The name that was looked up.
        name: String,
    },
}
