use crate::canvas::CanvasPainter;
use crate::constants::{
    CUBE_ALPHA, CUBE_FOCAL_LENGTH, CUBE_HALF_EXTENT, CUBE_LINE_WIDTH, CUBE_RGB,
};
use crate::core::{Rgba, Wireframe};
use crate::{dom, events, frame, input};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use web_sys as web;

const CANVAS_ID: &str = "ar-demo-canvas";

struct WireframeFrame {
    cube: Wireframe,
    canvas: web::HtmlCanvasElement,
    painter: CanvasPainter,
    mouse: Rc<RefCell<input::MouseState>>,
    window: web::Window,
    color: Rgba,
}

impl WireframeFrame {
    fn frame(&mut self) {
        let surface = DVec2::new(self.canvas.width() as f64, self.canvas.height() as f64);
        self.cube.position = surface * 0.5;
        let viewport = input::viewport_size(&self.window);
        let pointer = self.mouse.borrow().client;
        self.cube.follow_pointer(pointer, viewport);
        self.cube.render(
            &mut self.painter,
            surface,
            CUBE_FOCAL_LENGTH,
            self.color,
            CUBE_LINE_WIDTH,
        );
    }
}

/// Mount the wireframe cube over the page header and start its frame loop.
///
/// Later calls do nothing.
pub fn start(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::debug!("[wireframe] already running");
        return Ok(());
    }

    let Some(header) = document.query_selector(crate::HEADER_SELECTOR).ok().flatten() else {
        log::debug!("[wireframe] no header; demo skipped");
        return Ok(());
    };

    let canvas = crate::create_overlay_canvas(document, CANVAS_ID)?;
    dom::set_style(&canvas, "z-index", "1");
    header
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append demo canvas: {:?}", e))?;
    crate::wire_canvas_resize(&canvas);

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_window_pointer(window, mouse.clone());

    let [r, g, b] = CUBE_RGB;
    let mut ctx = WireframeFrame {
        cube: Wireframe::cube(CUBE_HALF_EXTENT, DVec2::ZERO),
        painter: CanvasPainter::for_canvas(&canvas)?,
        canvas,
        mouse,
        window: window.clone(),
        color: Rgba::new(r, g, b, CUBE_ALPHA),
    };
    frame::start_loop(move || ctx.frame());
    log::info!("[wireframe] demo started");
    Ok(())
}
