use crate::canvas::CanvasPainter;
use crate::core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the header particle loop touches per frame.
pub struct ParticleFrame {
    pub field: ParticleField,
    pub canvas: web::HtmlCanvasElement,
    pub painter: CanvasPainter,
}

impl ParticleFrame {
    pub fn frame(&mut self) {
        // The resize listener already synced the backing buffer; pick up its size here.
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.field.resize_if_needed(w, h);
        self.field.frame(&mut self.painter);
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Call `step` once per display refresh, forever.
pub fn start_loop(mut step: impl FnMut() + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        step();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
