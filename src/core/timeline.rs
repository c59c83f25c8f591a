use crate::constants::{CURRENT_DATE_LABEL, PARALLAX_BASE_PERCENT, PARALLAX_FACTOR};

/// One entry of the development roadmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub date: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl Milestone {
    /// The milestone the project is working on right now.
    #[inline]
    pub fn is_current(&self) -> bool {
        self.date == CURRENT_DATE_LABEL
    }
}

pub const ROADMAP: [Milestone; 7] = [
    Milestone {
        date: "Q1 2024",
        title: "Concept & Design",
        description: "Initial concept development and component selection. Established core design principles and technical requirements.",
    },
    Milestone {
        date: "Q2 2024",
        title: "Prototype Development",
        description: "First hardware prototypes and optics integration. Basic software framework established.",
    },
    Milestone {
        date: "Q3 2024",
        title: "Integration",
        description: "Hardware and software integration. Initial user testing and feedback collection.",
    },
    Milestone {
        date: "Q4 2024",
        title: "Refinement",
        description: "System optimization based on testing. Design refinements and improvements.",
    },
    Milestone {
        date: "Current",
        title: "Advanced Development",
        description: "Final hardware revisions. Advanced software features and content development.",
    },
    Milestone {
        date: "Q3 2025",
        title: "Pre-Launch",
        description: "Final testing and quality assurance. Preparing educational content and demos.",
    },
    Milestone {
        date: "Fall 2025",
        title: "Public Showcase",
        description: "Official public demonstration of the ARmed headset with educational simulations.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelSide {
    Above,
    Below,
}

impl LabelSide {
    /// Labels alternate sides so neighbours do not overlap.
    #[inline]
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            LabelSide::Above
        } else {
            LabelSide::Below
        }
    }
}

/// Horizontal position of point `index` as a percentage of the line width.
#[inline]
pub fn point_left_percent(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 50.0;
    }
    index as f64 / (count - 1) as f64 * 100.0
}

/// How far the timeline box has scrolled through the viewport, in [0, 1].
///
/// `None` while the box is entirely off screen.
pub fn reveal_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> Option<f64> {
    let rect_bottom = rect_top + rect_height;
    let in_view = rect_top < viewport_height && rect_bottom >= 0.0;
    if !in_view {
        return None;
    }
    let span = viewport_height + rect_height;
    if span <= 0.0 {
        return Some(0.0);
    }
    Some(((viewport_height - rect_top) / span).clamp(0.0, 1.0))
}

/// Points reveal one after another as `progress` crosses `(index + 1) / count`.
#[inline]
pub fn point_revealed(index: usize, count: usize, progress: f64) -> bool {
    if count == 0 {
        return false;
    }
    progress >= (index + 1) as f64 / count as f64
}

/// Vertical background position of the header for a page scroll offset.
#[inline]
pub fn header_parallax_y_percent(scroll_y: f64) -> f64 {
    PARALLAX_BASE_PERCENT + scroll_y * PARALLAX_FACTOR
}
