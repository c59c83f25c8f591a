pub mod pointer;
pub mod scroll;

pub use pointer::{wire_card_tilt, wire_window_pointer};
pub use scroll::{wire_header_parallax, wire_roadmap_reveal};
