// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end checks through the public API: tree, traversal and placement together.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Affine, Circle, Point, Vec2};
use trellis_query::{Envelope, Trace};

use crate::{Diagram, DiagramError, Polyline, Style};

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn directions() -> Vec<Vec2> {
    (0..16)
        .map(|i| Vec2::from_angle(f64::from(i) * core::f64::consts::TAU / 16.0))
        .collect()
}

fn sample_diagrams() -> Vec<Diagram> {
    vec![
        Diagram::circle(1.0).translate(2.0, -1.0),
        Diagram::rect(3.0, 1.0).rotate_degrees(30.0),
        Diagram::polyline(
            [Point::new(0.0, 0.0), Point::new(2.0, 0.5), Point::new(1.0, 2.0)],
            true,
        )
        .scale(1.5),
    ]
}

fn same_envelope(a: &Envelope, b: &Envelope) -> bool {
    directions()
        .into_iter()
        .all(|d| close(a.eval(d).unwrap(), b.eval(d).unwrap()))
}

fn sorted(mut v: Vec<f64>) -> Vec<f64> {
    v.sort_by(f64::total_cmp);
    v
}

fn same_trace(a: &Trace, b: &Trace) -> bool {
    let probes = [Point::new(-4.0, 0.3), Point::new(0.5, -3.0)];
    probes.iter().all(|&p| {
        directions().into_iter().all(|d| {
            let (x, y) = (sorted(a.eval(p, d)), sorted(b.eval(p, d)));
            x.len() == y.len() && x.iter().zip(&y).all(|(s, t)| close(*s, *t))
        })
    })
}

#[test]
fn two_circles_measure_together() {
    let d = Diagram::circle(1.0) + Diagram::circle(1.0).translate(3.0, 0.0);
    let env = d.envelope();
    assert!(close(env.width().unwrap(), 5.0));
    assert!(close(env.center().unwrap().x, 1.5));
    assert!(close(env.center().unwrap().y, 0.0));
}

#[test]
fn translated_trace_is_shifted() {
    let own = Diagram::rect(2.0, 2.0);
    let moved = own.translate(5.0, 0.0);
    let probe = Point::new(-10.0, 0.0);
    let d = Vec2::new(1.0, 0.0);
    let min_positive = |t: Trace| {
        t.eval(probe, d)
            .into_iter()
            .filter(|s| *s > 0.0)
            .fold(f64::INFINITY, f64::min)
    };
    assert!(close(min_positive(moved.trace()), min_positive(own.trace()) + 5.0));

    // Seen from the origin: a circle ahead of it at distance 1 ends up at 6.
    let ahead = Diagram::from_shape(Circle::new((2.0, 0.0), 1.0));
    let from_origin = |t: Trace| {
        t.eval(Point::ORIGIN, d)
            .into_iter()
            .filter(|s| *s > 0.0)
            .fold(f64::INFINITY, f64::min)
    };
    assert!(close(from_origin(ahead.trace()), 1.0));
    assert!(close(from_origin(ahead.translate(5.0, 0.0).trace()), 6.0));
}

#[test]
fn empty_is_the_identity_of_atop() {
    for d in sample_diagrams() {
        let e = Diagram::empty();
        assert!(same_envelope(&d.envelope(), &e.atop(&d).envelope()));
        assert!(same_envelope(&d.envelope(), &d.atop(&e).envelope()));
        assert!(same_trace(&d.trace(), &(&e + &d).trace()));
        assert!(same_trace(&d.trace(), &(&d + &e).trace()));
    }
}

#[test]
fn atop_is_associative_for_queries() {
    let [a, b, c]: [Diagram; 3] = sample_diagrams().try_into().unwrap();
    let left = a.atop(&b).atop(&c);
    let right = a.atop(&b.atop(&c));
    assert!(same_envelope(&left.envelope(), &right.envelope()));
    let p = Point::new(-5.0, 0.0);
    let d = Vec2::new(1.0, 0.1);
    // Concatenation order is part of the trace value.
    assert_eq!(left.trace().eval(p, d), right.trace().eval(p, d));
}

#[test]
fn ambient_transform_equals_wrapping() {
    let t = Affine::translate((1.0, 2.0))
        * Affine::rotate(0.4)
        * Affine::scale_non_uniform(2.0, 0.5);
    for d in sample_diagrams() {
        let wrapped = d.named("w").apply_transform(t);
        assert!(same_envelope(&d.envelope_at(t), &wrapped.envelope()));
        assert!(same_trace(&d.trace_at(t), &wrapped.trace()));
        assert!(same_envelope(&d.envelope_at(t), &d.envelope().apply_transform(t)));
    }
}

#[test]
fn transforms_compose_inner_first() {
    let d = Diagram::rect(2.0, 1.0).styled(Style::new());
    let stepwise = d.translate(3.0, 0.0).rotate_degrees(90.0);
    let quarter = Affine::rotate(core::f64::consts::FRAC_PI_2);
    let at_once = d.apply_transform(quarter * Affine::translate((3.0, 0.0)));
    assert!(same_envelope(&stepwise.envelope(), &at_once.envelope()));
    let c = stepwise.envelope().center().unwrap();
    assert!(close(c.x, 0.0) && close(c.y, 3.0));
}

#[test]
fn identity_transform_changes_nothing() {
    for d in sample_diagrams() {
        let same = d.named("n").apply_transform(Affine::IDENTITY);
        assert!(same_envelope(&d.envelope(), &same.envelope()));
        assert!(same_trace(&d.trace(), &same.trace()));
    }
}

#[test]
fn row_of_circles_by_beside() {
    let unit = Diagram::circle(1.0);
    let x = Vec2::new(1.0, 0.0);
    let row = [1, 2, 3]
        .iter()
        .try_fold(unit.clone(), |acc, i| acc.beside(&unit.named(format!("c{i}")), x))
        .unwrap();
    assert!(close(row.envelope().width().unwrap(), 8.0));
    for (i, expected) in [(1, 2.0), (2, 4.0), (3, 6.0)] {
        let name = format!("c{i}");
        let env = row.get_subdiagram_envelope(&name).unwrap();
        assert!(close(env.center().unwrap().x, expected), "{name} misplaced");
    }
}

#[test]
fn snug_triangles_touch() {
    let tri = Diagram::from_shape(Polyline::new(
        [Point::new(-1.0, -1.0), Point::new(1.0, -1.0), Point::new(-1.0, 1.0)],
        true,
    ));
    let flipped = tri.reflect_x().reflect_y();
    let d = Vec2::new(1.0, 0.0);
    let snug = tri.beside_snug(&flipped, d).unwrap();
    let loose = tri.beside(&flipped, d).unwrap();
    // Both hypotenuses pass through the origin, so snug placement closes the
    // gap the envelopes leave and the pair forms a square.
    assert!(close(snug.envelope().width().unwrap(), 2.0));
    assert!(close(loose.envelope().width().unwrap(), 4.0));
}

#[test]
fn named_lookup_reports_placement() {
    let marker = Diagram::circle(0.5).named("marker");
    let scene = Diagram::rect(10.0, 10.0)
        .atop(&marker.translate(3.0, -2.0))
        .styled(Style::new().with("stroke", "black"));
    let (sub, t) = scene.get_subdiagram("marker").unwrap();
    assert_eq!(t, Affine::translate((3.0, -2.0)));
    assert!(close(sub.envelope().width().unwrap(), 1.0));
    let hit = scene
        .get_subdiagram_trace("marker")
        .unwrap()
        .trace_p(Point::new(0.0, -2.0), Vec2::new(1.0, 0.0))
        .unwrap()
        .unwrap();
    assert!(close(hit.x, 2.5) && close(hit.y, -2.0));
    assert_eq!(
        scene.get_subdiagram_envelope("missing").unwrap_err(),
        DiagramError::UnknownName {
            name: "missing".into()
        }
    );
}

#[test]
fn rect_trace_from_center_hits_half_width() {
    let r = Diagram::rect(6.0, 2.0);
    let hit = r.trace().trace_v(Point::ORIGIN, Vec2::new(1.0, 0.0)).unwrap().unwrap();
    assert!(close(hit.x, 3.0));
}

#[test]
fn diagrams_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Diagram>();
    assert_send_sync::<Envelope>();
    assert_send_sync::<Trace>();
}
