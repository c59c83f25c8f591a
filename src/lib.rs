#![cfg(target_arch = "wasm32")]
use crate::core::{FieldParams, ParticleField};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod demo;
mod dom;
mod events;
mod frame;
mod input;
mod roadmap;

pub(crate) const HEADER_SELECTOR: &str = "article#main > header";
const PARTICLE_CANVAS_ID: &str = "particle-canvas";

// Keep the canvas backing buffer equal to its CSS size
pub(crate) fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// A full-size, click-through canvas meant to sit on top of the header.
pub(crate) fn create_overlay_canvas(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = dom::create_html(document, "canvas")?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(id);
    dom::set_styles(
        &canvas,
        &[
            ("position", "absolute"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("pointer-events", "none"),
        ],
    );
    Ok(canvas)
}

fn mount_particle_header(
    document: &web::Document,
    header: &web::HtmlElement,
) -> anyhow::Result<()> {
    dom::set_styles(header, &[("position", "relative"), ("overflow", "hidden")]);
    let canvas = create_overlay_canvas(document, PARTICLE_CANVAS_ID)?;
    let first = header.first_child();
    header
        .insert_before(&canvas, first.as_ref())
        .map_err(|e| anyhow::anyhow!("insert particle canvas: {:?}", e))?;
    wire_canvas_resize(&canvas);

    let field = ParticleField::new(
        FieldParams::default(),
        canvas.width() as f64,
        canvas.height() as f64,
        rand::random(),
    );
    log::info!(
        "[particles] {} particles on {}x{}",
        field.particles().len(),
        canvas.width(),
        canvas.height()
    );
    let mut ctx = frame::ParticleFrame {
        painter: canvas::CanvasPainter::for_canvas(&canvas)?,
        field,
        canvas,
    };
    frame::start_loop(move || ctx.frame());
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("header-fx starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let closure = Closure::once(move || {
            if let Err(e) = init() {
                log::error!("init error: {:?}", e);
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
    } else if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Start the optional wireframe cube over the header. Not part of page init;
/// the host page calls this explicitly.
#[wasm_bindgen]
pub fn start_wireframe_demo() -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    demo::start(&window, &document).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Each feature is independent; a missing anchor only disables that feature.
    match document
        .query_selector(HEADER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
    {
        Some(header) => {
            if let Err(e) = mount_particle_header(&document, &header) {
                log::warn!("[particles] disabled: {:?}", e);
            }
            events::wire_header_parallax(&window, header);
        }
        None => log::debug!("[particles] no header; particle background skipped"),
    }

    events::wire_card_tilt(&document);

    match roadmap::mount(&document) {
        Ok(Some(view)) => events::wire_roadmap_reveal(&window, view),
        Ok(None) => {}
        Err(e) => log::warn!("[roadmap] disabled: {:?}", e),
    }

    Ok(())
}
