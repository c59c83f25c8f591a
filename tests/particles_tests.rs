// Host-side tests for the header particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod paint {
    include!("../src/core/paint.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use glam::DVec2;
use paint::{Painter, Rgba};
use particles::*;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Clear(f64, f64),
    Circle(DVec2, f64),
    Line(DVec2, DVec2, f64),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Painter for Recorder {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(Op::Clear(width, height));
    }
    fn fill_circle(&mut self, center: DVec2, radius: f64, _color: Rgba) {
        self.ops.push(Op::Circle(center, radius));
    }
    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgba, _line_width: f64) {
        self.ops.push(Op::Line(from, to, color.a));
    }
}

fn still(x: f64, y: f64) -> Particle {
    Particle::new(
        DVec2::new(x, y),
        DVec2::ZERO,
        1.0,
        Rgba::new(0, 188, 212, 0.5),
    )
}

// p0-p1 are 50 apart, p1-p3 99.9 apart, p0-p2 exactly 100 apart.
fn scripted_field() -> ParticleField {
    let particles = vec![
        still(10.0, 10.0),
        still(60.0, 10.0),
        still(10.0, 110.0),
        still(159.9, 10.0),
    ];
    ParticleField::from_particles(FieldParams::default(), particles, 400.0, 300.0)
}

#[test]
fn new_field_respects_default_ranges() {
    let field = ParticleField::new(FieldParams::default(), 800.0, 200.0, 7);
    assert_eq!(field.particles().len(), 50);
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 200.0);
        assert!(p.radius >= 1.0 && p.radius < 3.0);
        assert!(p.vel.x >= -0.5 && p.vel.x < 0.5);
        assert!(p.vel.y >= -0.5 && p.vel.y < 0.5);
        assert!(p.color.a >= 0.25 && p.color.a < 0.75);
        assert_eq!((p.color.r, p.color.g, p.color.b), (0, 188, 212));
        assert!(p.connected.is_empty());
    }
}

#[test]
fn same_seed_gives_same_field() {
    let a = ParticleField::new(FieldParams::default(), 640.0, 480.0, 42);
    let b = ParticleField::new(FieldParams::default(), 640.0, 480.0, 42);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.vel, pb.vel);
        assert_eq!(pa.radius, pb.radius);
    }
}

#[test]
fn particles_stay_within_one_frame_of_bounds() {
    let (w, h) = (300.0, 120.0);
    let eps = constants::PARTICLE_SPEED_MAX;
    let mut field = ParticleField::new(FieldParams::default(), w, h, 3);
    for _ in 0..5_000 {
        field.tick();
        for p in field.particles() {
            assert!(p.pos.x >= -eps && p.pos.x <= w + eps, "x={} escaped", p.pos.x);
            assert!(p.pos.y >= -eps && p.pos.y <= h + eps, "y={} escaped", p.pos.y);
        }
    }
}

#[test]
fn crossing_an_edge_reflects_the_velocity() {
    let p = Particle::new(
        DVec2::new(0.2, 50.0),
        DVec2::new(-0.5, 0.0),
        1.0,
        Rgba::new(0, 188, 212, 0.5),
    );
    let mut field =
        ParticleField::from_particles(FieldParams::default(), vec![p], 100.0, 100.0);

    field.tick();
    let p = &field.particles()[0];
    assert!((p.pos.x - -0.3).abs() < 1e-12);
    assert_eq!(p.vel.x, 0.5);

    field.tick();
    let p = &field.particles()[0];
    assert!((p.pos.x - 0.2).abs() < 1e-12);
    assert_eq!(p.vel.x, 0.5);
}

#[test]
fn connection_opacity_falls_off_linearly() {
    let params = FieldParams::default();
    assert!((params.connection_opacity(0.0) - 0.2).abs() < 1e-12);
    assert!((params.connection_opacity(50.0) - 0.1).abs() < 1e-12);
    assert!((params.connection_opacity(75.0) - 0.05).abs() < 1e-12);
    assert_eq!(params.connection_opacity(100.0), 0.0);
    assert_eq!(params.connection_opacity(250.0), 0.0);
}

#[test]
fn connects_only_under_threshold() {
    let mut field = scripted_field();
    field.tick();
    let ps = field.particles();
    assert_eq!(ps[0].connected.as_slice(), &[1]);
    assert_eq!(ps[1].connected.as_slice(), &[3]);
    assert!(ps[2].connected.is_empty());
    assert!(ps[3].connected.is_empty());
    assert_eq!(field.connection_count(), 2);
}

#[test]
fn render_clears_then_draws_each_node_with_its_forward_lines() {
    let mut field = scripted_field();
    let mut rec = Recorder::default();
    field.frame(&mut rec);

    let p = |x: f64, y: f64| DVec2::new(x, y);
    let ops = &rec.ops;
    assert_eq!(ops.len(), 7);
    assert_eq!(ops[0], Op::Clear(400.0, 300.0));
    assert_eq!(ops[1], Op::Circle(p(10.0, 10.0), 1.0));
    match ops[2] {
        Op::Line(a, b, alpha) => {
            assert_eq!((a, b), (p(10.0, 10.0), p(60.0, 10.0)));
            assert!((alpha - 0.1).abs() < 1e-12);
        }
        ref other => panic!("expected line, got {:?}", other),
    }
    assert_eq!(ops[3], Op::Circle(p(60.0, 10.0), 1.0));
    match ops[4] {
        Op::Line(a, b, alpha) => {
            assert_eq!((a, b), (p(60.0, 10.0), p(159.9, 10.0)));
            assert!(alpha > 0.0 && alpha < 0.001);
        }
        ref other => panic!("expected line, got {:?}", other),
    }
    assert_eq!(ops[5], Op::Circle(p(10.0, 110.0), 1.0));
    assert_eq!(ops[6], Op::Circle(p(159.9, 10.0), 1.0));
}

#[test]
fn every_drawn_line_is_shorter_than_the_threshold() {
    let mut field = ParticleField::new(FieldParams::default(), 400.0, 300.0, 11);
    for _ in 0..50 {
        let mut rec = Recorder::default();
        field.frame(&mut rec);
        let lines: Vec<_> = rec
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(a, b, alpha) => Some((*a, *b, *alpha)),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), field.connection_count());
        for (a, b, alpha) in lines {
            let d = a.distance(b);
            assert!(d < 100.0);
            assert!((alpha - 0.2 * (1.0 - d / 100.0)).abs() < 1e-12);
        }
    }
}

#[test]
fn resize_changes_bounds_but_not_positions() {
    let mut field = ParticleField::new(FieldParams::default(), 400.0, 400.0, 5);
    let before: Vec<DVec2> = field.particles().iter().map(|p| p.pos).collect();

    assert!(field.resize_if_needed(100.0, 80.0));
    assert!(!field.resize_if_needed(100.0, 80.0));
    assert_eq!(field.size(), DVec2::new(100.0, 80.0));
    let after: Vec<DVec2> = field.particles().iter().map(|p| p.pos).collect();
    assert_eq!(before, after);
}

#[test]
fn particles_outside_after_shrink_head_back_in() {
    let mut field = ParticleField::new(FieldParams::default(), 400.0, 400.0, 9);
    field.resize(100.0, 80.0);
    field.tick();
    for p in field.particles() {
        if p.pos.x > 100.0 {
            assert!(p.vel.x <= 0.0);
        }
        if p.pos.y > 80.0 {
            assert!(p.vel.y <= 0.0);
        }
    }
}
