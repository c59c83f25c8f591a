use super::paint::{Painter, Rgba};
use glam::{DMat3, DVec2, DVec3};
use std::f64::consts::PI;

pub const CUBE_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// A cube drawn as 12 edges, rotated to follow the pointer.
#[derive(Clone, Debug)]
pub struct Wireframe {
    pub vertices: [DVec3; 8],
    pub edges: [[usize; 2]; 12],
    /// Rotation about x, y and z in radians.
    pub rotation: DVec3,
    /// Screen-space position of the object origin.
    pub position: DVec2,
}

impl Wireframe {
    pub fn cube(half_extent: f64, position: DVec2) -> Self {
        let h = half_extent;
        Self {
            vertices: [
                DVec3::new(-h, -h, -h),
                DVec3::new(h, -h, -h),
                DVec3::new(h, h, -h),
                DVec3::new(-h, h, -h),
                DVec3::new(-h, -h, h),
                DVec3::new(h, -h, h),
                DVec3::new(h, h, h),
                DVec3::new(-h, h, h),
            ],
            edges: CUBE_EDGES,
            rotation: DVec3::ZERO,
            position,
        }
    }

    /// Map a window-space pointer to a rotation of up to ±90° on x and y.
    ///
    /// The pointer is normalised against the whole viewport, not the canvas.
    pub fn follow_pointer(&mut self, pointer: DVec2, viewport: DVec2) {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        self.rotation.y = (pointer.x / viewport.x - 0.5) * PI;
        self.rotation.x = (pointer.y / viewport.y - 0.5) * PI;
    }

    pub fn rotation_matrix(&self) -> DMat3 {
        DMat3::from_rotation_z(self.rotation.z)
            * DMat3::from_rotation_y(self.rotation.y)
            * DMat3::from_rotation_x(self.rotation.x)
    }

    /// Object-space vertices after rotation (x first, then y, then z).
    pub fn transformed_vertices(&self) -> [DVec3; 8] {
        let m = self.rotation_matrix();
        self.vertices.map(|v| m * v)
    }

    /// Perspective-project the rotated vertices to screen space.
    pub fn project(&self, focal_length: f64) -> [DVec2; 8] {
        let position = self.position;
        self.transformed_vertices().map(|v| {
            let depth = focal_length + v.z;
            let scale = if depth > f64::EPSILON {
                focal_length / depth
            } else {
                0.0
            };
            position + DVec2::new(v.x, v.y) * scale
        })
    }

    pub fn render<P: Painter>(
        &self,
        painter: &mut P,
        surface: DVec2,
        focal_length: f64,
        color: Rgba,
        line_width: f64,
    ) {
        painter.clear(surface.x, surface.y);
        let points = self.project(focal_length);
        for [a, b] in self.edges {
            painter.stroke_line(points[a], points[b], color, line_width);
        }
    }
}
