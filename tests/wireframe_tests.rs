// Host-side tests for the wireframe cube projection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod paint {
    include!("../src/core/paint.rs");
}
mod wireframe {
    include!("../src/core/wireframe.rs");
}

use glam::{DVec2, DVec3};
use paint::{Painter, Rgba};
use std::f64::consts::FRAC_PI_2;
use wireframe::*;

fn approx(a: DVec3, b: DVec3) -> bool {
    (a - b).length() < 1e-9
}

#[derive(Default)]
struct Recorder {
    clears: usize,
    lines: Vec<(DVec2, DVec2)>,
}

impl Painter for Recorder {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.clears += 1;
    }
    fn fill_circle(&mut self, _center: DVec2, _radius: f64, _color: Rgba) {}
    fn stroke_line(&mut self, from: DVec2, to: DVec2, _color: Rgba, _line_width: f64) {
        self.lines.push((from, to));
    }
}

#[test]
fn cube_edges_touch_every_vertex_three_times() {
    let cube = Wireframe::cube(50.0, DVec2::ZERO);
    let mut degree = [0usize; 8];
    for [a, b] in cube.edges {
        assert_ne!(a, b);
        degree[a] += 1;
        degree[b] += 1;
        assert!(((cube.vertices[a] - cube.vertices[b]).length() - 100.0).abs() < 1e-9);
    }
    assert_eq!(degree, [3; 8]);
}

#[test]
fn pointer_at_viewport_center_leaves_cube_unrotated() {
    let mut cube = Wireframe::cube(50.0, DVec2::ZERO);
    cube.follow_pointer(DVec2::new(400.0, 300.0), DVec2::new(800.0, 600.0));
    assert_eq!(cube.rotation, DVec3::ZERO);
}

#[test]
fn pointer_at_corners_maps_to_quarter_turns() {
    let mut cube = Wireframe::cube(50.0, DVec2::ZERO);
    let viewport = DVec2::new(800.0, 600.0);

    cube.follow_pointer(viewport, viewport);
    assert!((cube.rotation.x - FRAC_PI_2).abs() < 1e-12);
    assert!((cube.rotation.y - FRAC_PI_2).abs() < 1e-12);

    cube.follow_pointer(DVec2::ZERO, viewport);
    assert!((cube.rotation.x + FRAC_PI_2).abs() < 1e-12);
    assert!((cube.rotation.y + FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn empty_viewport_keeps_previous_rotation() {
    let mut cube = Wireframe::cube(50.0, DVec2::ZERO);
    cube.rotation = DVec3::new(0.3, 0.2, 0.0);
    cube.follow_pointer(DVec2::new(10.0, 10.0), DVec2::ZERO);
    assert_eq!(cube.rotation, DVec3::new(0.3, 0.2, 0.0));
}

#[test]
fn quarter_turn_about_y_moves_vertices_as_expected() {
    let mut cube = Wireframe::cube(50.0, DVec2::ZERO);
    cube.rotation.y = FRAC_PI_2;
    let v = cube.transformed_vertices();
    assert!(approx(v[1], DVec3::new(-50.0, -50.0, -50.0)));
    assert!(approx(v[0], DVec3::new(-50.0, -50.0, 50.0)));
}

#[test]
fn rotation_preserves_edge_lengths() {
    let mut cube = Wireframe::cube(50.0, DVec2::ZERO);
    cube.rotation = DVec3::new(0.7, -1.1, 0.25);
    let v = cube.transformed_vertices();
    for [a, b] in cube.edges {
        assert!(((v[a] - v[b]).length() - 100.0).abs() < 1e-9);
    }
}

#[test]
fn unrotated_projection_scales_by_depth() {
    let center = DVec2::new(320.0, 240.0);
    let cube = Wireframe::cube(50.0, center);
    let p = cube.project(400.0);

    // Near face (z = -50) appears larger than the far face (z = +50).
    let near = 400.0 / 350.0;
    let far = 400.0 / 450.0;
    assert!((p[0] - (center + DVec2::new(-50.0, -50.0) * near)).length() < 1e-9);
    assert!((p[6] - (center + DVec2::new(50.0, 50.0) * far)).length() < 1e-9);
}

#[test]
fn render_clears_then_strokes_all_edges() {
    let cube = Wireframe::cube(50.0, DVec2::new(100.0, 100.0));
    let mut rec = Recorder::default();
    cube.render(
        &mut rec,
        DVec2::new(200.0, 200.0),
        400.0,
        Rgba::new(0, 188, 212, 0.8),
        1.0,
    );
    assert_eq!(rec.clears, 1);
    assert_eq!(rec.lines.len(), 12);
    let points = cube.project(400.0);
    assert_eq!(rec.lines[0], (points[0], points[1]));
}
