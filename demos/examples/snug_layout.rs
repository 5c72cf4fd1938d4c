// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Envelope versus trace placement.
//!
//! Place shapes side by side with `beside` (envelope-based) and
//! `beside_snug` (trace-based), then compare the resulting extents.
//!
//! Run (set `RUST_LOG=debug` to see placement and lookup events):
//! - `cargo run -p trellis_demos --example snug_layout`

use kurbo::{Point, Vec2};
use trellis_diagram::{Diagram, DiagramError};

fn main() -> Result<(), DiagramError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let wedge = Diagram::polyline(
        [
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(-1.0, 1.0),
        ],
        true,
    );
    let mirrored = wedge.reflect_x().reflect_y();
    let right = Vec2::new(1.0, 0.0);

    let loose = wedge.beside(&mirrored, right)?;
    let snug = wedge.beside_snug(&mirrored, right)?;
    println!("beside:      width {:.3}", loose.envelope().width()?);
    println!("beside_snug: width {:.3}", snug.envelope().width()?);

    // A stack of circles, each one below the previous.
    let mut stack = Diagram::circle(1.0);
    for r in [0.5, 1.5, 0.75] {
        stack = stack.above(&Diagram::circle(r))?;
    }
    println!("stack height {:.3}", stack.envelope().height()?);

    // First boundary met walking down the stack's axis from the top.
    let hit = stack
        .trace()
        .trace_p(Point::new(0.0, -10.0), Vec2::new(0.0, 1.0))?;
    println!("first hit from above: {hit:?}");
    Ok(())
}
