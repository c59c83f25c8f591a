use glam::DVec2;
use web_sys as web;

/// Last known pointer position in window (client) coordinates.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub client: DVec2,
}

/// Pointer position relative to `el`'s bounding box, plus the box size.
#[inline]
pub fn pointer_local_px(ev: &web::MouseEvent, el: &web::Element) -> (DVec2, DVec2) {
    let rect = el.get_bounding_client_rect();
    let local = DVec2::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    );
    (local, DVec2::new(rect.width(), rect.height()))
}

#[inline]
pub fn pointer_client_px(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Size of the browser viewport in CSS px.
pub fn viewport_size(window: &web::Window) -> DVec2 {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    DVec2::new(w, h)
}
