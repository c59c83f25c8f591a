use super::paint::{Painter, Rgba};
use crate::constants::*;
use glam::DVec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// Construction and drawing parameters for a [`ParticleField`].
///
/// `Default` uses the header tuning from `constants.rs`.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub radius_min: f64,
    pub radius_span: f64,
    pub speed_max: f64,
    pub alpha_min: f64,
    pub alpha_span: f64,
    pub rgb: [u8; 3],
    pub connect_distance: f64,
    pub connect_max_opacity: f64,
    pub line_width: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_span: PARTICLE_RADIUS_SPAN,
            speed_max: PARTICLE_SPEED_MAX,
            alpha_min: PARTICLE_ALPHA_MIN,
            alpha_span: PARTICLE_ALPHA_SPAN,
            rgb: PARTICLE_RGB,
            connect_distance: CONNECT_DISTANCE,
            connect_max_opacity: CONNECT_MAX_OPACITY,
            line_width: CONNECT_LINE_WIDTH,
        }
    }
}

impl FieldParams {
    /// Line opacity for two particles `distance` apart.
    ///
    /// Falls off linearly from `connect_max_opacity` at 0 to 0 at
    /// `connect_distance`; never negative.
    pub fn connection_opacity(&self, distance: f64) -> f64 {
        if self.connect_distance <= 0.0 {
            return 0.0;
        }
        (self.connect_max_opacity * (1.0 - distance / self.connect_distance))
            .clamp(0.0, self.connect_max_opacity)
    }

    #[inline]
    pub fn connects(&self, distance: f64) -> bool {
        distance < self.connect_distance
    }
}

/// One point of the header background.
///
/// `connected` holds indices of higher-indexed neighbours within range as of
/// the last tick; it is rebuilt every tick.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub color: Rgba,
    pub connected: SmallVec<[usize; 8]>,
}

impl Particle {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: Rgba) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            connected: SmallVec::new(),
        }
    }

    /// Integrate one frame and reflect off the surface edges.
    ///
    /// Positions are not clamped, so a particle may sit up to one frame of
    /// velocity outside the bounds before it heads back in.
    fn step(&mut self, bounds: DVec2) {
        self.pos += self.vel;
        if self.pos.x < 0.0 {
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x > bounds.x {
            self.vel.x = -self.vel.x.abs();
        }
        if self.pos.y < 0.0 {
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y > bounds.y {
            self.vel.y = -self.vel.y.abs();
        }
    }
}

/// Fixed-size set of drifting particles bound to one canvas surface.
pub struct ParticleField {
    params: FieldParams,
    particles: Vec<Particle>,
    size: DVec2,
}

impl ParticleField {
    pub fn new(params: FieldParams, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..params.count)
            .map(|_| {
                let pos = DVec2::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height);
                let vel = DVec2::new(
                    (rng.gen::<f64>() * 2.0 - 1.0) * params.speed_max,
                    (rng.gen::<f64>() * 2.0 - 1.0) * params.speed_max,
                );
                let radius = params.radius_min + rng.gen::<f64>() * params.radius_span;
                let alpha = params.alpha_min + rng.gen::<f64>() * params.alpha_span;
                let [r, g, b] = params.rgb;
                Particle::new(pos, vel, radius, Rgba::new(r, g, b, alpha))
            })
            .collect();
        Self {
            params,
            particles,
            size: DVec2::new(width, height),
        }
    }

    /// Build a field from explicit particles (used for scripted scenes).
    pub fn from_particles(
        params: FieldParams,
        particles: Vec<Particle>,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            params,
            particles,
            size: DVec2::new(width, height),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// Adopt new surface bounds. Existing positions are left untouched.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = DVec2::new(width, height);
    }

    /// Adopt the surface size only when it changed; returns whether it did.
    pub fn resize_if_needed(&mut self, width: f64, height: f64) -> bool {
        if self.size.x == width && self.size.y == height {
            return false;
        }
        log::debug!(
            "[particles] resize {}x{} -> {}x{}",
            self.size.x,
            self.size.y,
            width,
            height
        );
        self.resize(width, height);
        true
    }

    /// Move every particle, then rebuild the forward connection lists.
    pub fn tick(&mut self) {
        let bounds = self.size;
        for p in &mut self.particles {
            p.step(bounds);
        }

        let n = self.particles.len();
        for i in 0..n {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let p = &mut head[i];
            p.connected.clear();
            for (k, other) in tail.iter().enumerate() {
                if self.params.connects(p.pos.distance(other.pos)) {
                    p.connected.push(i + 1 + k);
                }
            }
        }
    }

    /// Draw the current state: clear, then each node followed by its forward lines.
    pub fn render<P: Painter>(&self, painter: &mut P) {
        painter.clear(self.size.x, self.size.y);
        let [r, g, b] = self.params.rgb;
        let line = Rgba::new(r, g, b, 0.0);
        for p in &self.particles {
            painter.fill_circle(p.pos, p.radius, p.color);
            for &j in &p.connected {
                let other = &self.particles[j];
                let opacity = self.params.connection_opacity(p.pos.distance(other.pos));
                painter.stroke_line(
                    p.pos,
                    other.pos,
                    line.with_alpha(opacity),
                    self.params.line_width,
                );
            }
        }
    }

    /// One animation frame: [`tick`](Self::tick) then [`render`](Self::render).
    pub fn frame<P: Painter>(&mut self, painter: &mut P) {
        self.tick();
        self.render(painter);
    }

    /// Total number of lines the next render will stroke.
    pub fn connection_count(&self) -> usize {
        self.particles.iter().map(|p| p.connected.len()).sum()
    }
}
