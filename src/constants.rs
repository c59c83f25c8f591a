/// Presentation tuning constants.
///
/// These values are visual tuning only. They are kept as named constants so
/// that the particle field, card tilt and wireframe demo share one source of
/// truth and the host tests can check their relationships.
// Particle field
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_RADIUS_MIN: f64 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f64 = 2.0; // radius in [min, min + span)
pub const PARTICLE_SPEED_MAX: f64 = 0.5; // per-axis, canvas px per frame
pub const PARTICLE_ALPHA_MIN: f64 = 0.25;
pub const PARTICLE_ALPHA_SPAN: f64 = 0.5;
pub const PARTICLE_RGB: [u8; 3] = [0, 188, 212];

// Connections between nearby particles
pub const CONNECT_DISTANCE: f64 = 100.0; // canvas px, exclusive
pub const CONNECT_MAX_OPACITY: f64 = 0.2; // opacity at distance 0
pub const CONNECT_LINE_WIDTH: f64 = 0.5;

// Card tilt
pub const TILT_MAX_DEG: f64 = 10.0;
pub const TILT_LEAVE_TRANSITION_MS: u64 = 500;
pub const TILT_LEAVE_TRANSITION: &str =
    "transform 0.5s ease, box-shadow 0.5s ease, background-image 0.5s ease";
pub const CARD_PERSPECTIVE: &str = "1000px";
pub const CARD_CONTENT_DEPTH: &str = "translateZ(20px)";

// Wireframe cube demo
pub const CUBE_HALF_EXTENT: f64 = 50.0;
pub const CUBE_FOCAL_LENGTH: f64 = 400.0;
pub const CUBE_LINE_WIDTH: f64 = 1.0;
pub const CUBE_RGB: [u8; 3] = [0, 188, 212];
pub const CUBE_ALPHA: f64 = 0.8;

// Roadmap timeline and header
pub const ACCENT_COLOR: &str = "#00bcd4";
pub const MILESTONE_COLOR: &str = "#ffe082";
pub const CURRENT_DATE_LABEL: &str = "Current";
pub const PARALLAX_BASE_PERCENT: f64 = 50.0;
pub const PARALLAX_FACTOR: f64 = 0.1; // percent per scrolled px
