use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Every element matching `selector` that is an `HtmlElement`.
pub fn query_all_html(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let list = match root.query_selector_all(selector) {
        Ok(l) => l,
        Err(e) => {
            log::warn!("querySelectorAll({}) failed: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn query_html(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

/// Set inline style properties; individual failures are ignored.
pub fn set_styles(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

pub fn create_html(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create_element({}): {:?}", tag, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{} is not an HtmlElement: {:?}", tag, e))
}

/// Attach a listener for the page lifetime.
pub fn add_listener<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("addEventListener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

/// Match the canvas backing buffer to its displayed size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let w_px = canvas.offset_width().max(0) as u32;
    let h_px = canvas.offset_height().max(0) as u32;
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    ) {
        log::warn!("setTimeout failed: {:?}", e);
    }
    closure.forget();
}
