// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Envelope basics.
//!
//! Build envelopes from shapes, move and combine them, and read extents.
//!
//! Run:
//! - `cargo run -p trellis_demos --example envelope_basics`

use kurbo::{Affine, Point, Rect, Vec2};
use trellis_query::{Envelope, QueryError};

fn main() -> Result<(), QueryError> {
    let circle = Envelope::from_circle(1.0);
    let boxed = Envelope::from_bounding_box(Rect::new(0.0, 0.0, 2.0, 1.0))
        .apply_transform(Affine::translate((3.0, 0.0)));
    let triangle = Envelope::from_path(&[
        Point::new(0.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(-1.0, 2.0),
    ])
    .apply_transform(Affine::rotate(0.3));

    let all: Envelope = [circle.clone(), boxed, triangle].into_iter().sum();
    println!("width = {:.3}, height = {:.3}", all.width()?, all.height()?);
    println!("center = {:?}", all.center()?);

    for d in [Vec2::new(1.0, 0.0), Vec2::new(0.0, -1.0), Vec2::new(1.0, 1.0)] {
        println!("support along {d:?}: {:?}", all.envelope_v(d)?);
    }

    // Supporting polygon of the unit circle, sampled every 45 degrees.
    let outline = circle.to_path_with_step(45)?;
    println!("circle outline: {} samples", outline.len());

    // Empty envelopes have no extent.
    match Envelope::empty().width() {
        Err(e) => println!("empty width: {e}"),
        Ok(w) => println!("empty width: {w}"),
    }
    Ok(())
}
