// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named subdiagrams.
//!
//! Tag parts of a diagram, transform the whole, and find where the parts
//! ended up.
//!
//! Run (set `RUST_LOG=debug` to see placement and lookup events):
//! - `cargo run -p trellis_demos --example named_subdiagrams`

use kurbo::Vec2;
use trellis_diagram::{Diagram, DiagramError, Style};

fn main() -> Result<(), DiagramError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let node = |label: &str| {
        Diagram::circle(1.0)
            .styled(Style::new().with("fill", "white"))
            .named(label)
    };
    let row = node("a")
        .beside(&Diagram::spacer(1.0, 0.0), Vec2::new(1.0, 0.0))?
        .beside(&node("b"), Vec2::new(1.0, 0.0))?;
    let scene = row.rotate_degrees(30.0).translate(10.0, 5.0);

    for name in ["a", "b"] {
        let Some((_, t)) = scene.get_subdiagram(name) else {
            continue;
        };
        let env = scene.get_subdiagram_envelope(name)?;
        println!("{name}: center {:?}, placed by {:?}", env.center()?, t);
    }

    // Cast a ray from `a` toward `b` and report where it enters `b`.
    let a = scene.get_subdiagram_envelope("a")?.center()?;
    let b = scene.get_subdiagram_envelope("b")?.center()?;
    let entry = scene.get_subdiagram_trace("b")?.trace_p(a, b - a)?;
    println!("ray from a enters b at {entry:?}");

    match scene.get_subdiagram_envelope("c") {
        Err(e) => println!("lookup of c: {e}"),
        Ok(_) => println!("lookup of c unexpectedly succeeded"),
    }
    Ok(())
}
