use crate::core::{header_parallax_y_percent, point_revealed, reveal_progress};
use crate::dom;
use crate::input;
use crate::roadmap::RoadmapView;
use web_sys as web;

/// Reveal roadmap points one by one as the timeline scrolls into view.
pub fn wire_roadmap_reveal(window: &web::Window, view: RoadmapView) {
    let wnd = window.clone();
    dom::add_listener(window, "scroll", move |_ev: web::Event| {
        let rect = view.timeline.get_bounding_client_rect();
        let vh = input::viewport_size(&wnd).y;
        let Some(progress) = reveal_progress(rect.top(), rect.height(), vh) else {
            return;
        };
        let n = view.points.len();
        for (i, p) in view.points.iter().enumerate() {
            let (scale, opacity) = if point_revealed(i, n, progress) {
                ("scale(1) translateY(-50%)", "1")
            } else {
                ("scale(0.5) translateY(-50%)", "0.5")
            };
            dom::set_style(&p.dot, "transform", scale);
            dom::set_style(&p.point, "opacity", opacity);
        }
    });
}

/// Shift the header background as the page scrolls.
pub fn wire_header_parallax(window: &web::Window, header: web::HtmlElement) {
    let wnd = window.clone();
    dom::add_listener(window, "scroll", move |_ev: web::Event| {
        let scroll_y = wnd.scroll_y().unwrap_or(0.0);
        let y = header_parallax_y_percent(scroll_y);
        dom::set_style(&header, "background-position", &format!("50% {}%", y));
    });
}
