use crate::constants::{TILT_LEAVE_TRANSITION, TILT_LEAVE_TRANSITION_MS, TILT_MAX_DEG};
use glam::DVec2;
use instant::Instant;
use smallvec::SmallVec;
use std::time::Duration;

/// Rotation angles in degrees for a pointer at `local` inside a box of `size`.
///
/// Returns `(rotate_x, rotate_y)`. The horizontal offset from centre maps to a
/// Y-axis rotation, the vertical offset to an X-axis rotation with inverted
/// sign so that the top edge comes toward the viewer when the pointer is high.
pub fn tilt_angles(local: DVec2, size: DVec2) -> (f64, f64) {
    let center = size * 0.5;
    let rotate_y = if center.x > 0.0 {
        (local.x - center.x) / center.x * TILT_MAX_DEG
    } else {
        0.0
    };
    let rotate_x = if center.y > 0.0 {
        (center.y - local.y) / center.y * TILT_MAX_DEG
    } else {
        0.0
    };
    (rotate_x, rotate_y)
}

/// Visual state of one card, updated by pointer events.
///
/// [`card_style`] is the only place that turns it into CSS.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardVisual {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    /// Centre of the radial highlight in card-local px.
    pub highlight: Option<DVec2>,
    /// Whether the eased leave transition is active.
    pub transition: bool,
}

/// CSS property values for one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardStyle {
    pub transform: String,
    pub background_image: String,
    pub transition: String,
}

pub fn card_style(v: &CardVisual) -> CardStyle {
    let transform = format!(
        "rotateX({}deg) rotateY({}deg)",
        v.rotate_x_deg, v.rotate_y_deg
    );
    let background_image = match v.highlight {
        Some(p) => format!(
            "radial-gradient(circle at {}px {}px, rgba(255,255,255,0.2) 0%, rgba(255,255,255,0) 60%)",
            p.x, p.y
        ),
        None => "none".to_string(),
    };
    let transition = if v.transition {
        TILT_LEAVE_TRANSITION.to_string()
    } else {
        String::new()
    };
    CardStyle {
        transform,
        background_image,
        transition,
    }
}

/// Per-card tilt state machine.
///
/// Leaving the card starts the eased reset and schedules a cleanup that
/// removes the transition again. Cleanups are never cancelled: one scheduled
/// by an earlier leave still clears the transition when it comes due.
#[derive(Clone, Debug, Default)]
pub struct CardTilt {
    visual: CardVisual,
    pending_cleanups: SmallVec<[Instant; 2]>,
}

impl CardTilt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visual(&self) -> &CardVisual {
        &self.visual
    }

    pub fn style(&self) -> CardStyle {
        card_style(&self.visual)
    }

    pub fn pending_cleanups(&self) -> usize {
        self.pending_cleanups.len()
    }

    pub fn pointer_move(&mut self, local: DVec2, size: DVec2) {
        let (rx, ry) = tilt_angles(local, size);
        self.visual.rotate_x_deg = rx;
        self.visual.rotate_y_deg = ry;
        self.visual.highlight = Some(local);
    }

    /// Reset the tilt with the eased transition and return when its cleanup is due.
    pub fn pointer_leave(&mut self, now: Instant) -> Instant {
        self.visual.rotate_x_deg = 0.0;
        self.visual.rotate_y_deg = 0.0;
        self.visual.highlight = None;
        self.visual.transition = true;
        let due = now + Duration::from_millis(TILT_LEAVE_TRANSITION_MS);
        self.pending_cleanups.push(due);
        due
    }

    /// Fire every cleanup due at or before `now`. Returns true if the visual changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let before = self.pending_cleanups.len();
        self.pending_cleanups.retain(|due| *due > now);
        if self.pending_cleanups.len() == before {
            return false;
        }
        let changed = self.visual.transition;
        self.visual.transition = false;
        changed
    }
}
