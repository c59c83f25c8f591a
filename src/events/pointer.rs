use crate::constants::{CARD_CONTENT_DEPTH, CARD_PERSPECTIVE, TILT_LEAVE_TRANSITION_MS};
use crate::core::{CardStyle, CardTilt};
use crate::dom;
use crate::input;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn apply_card_style(card: &web::HtmlElement, style: &CardStyle) {
    dom::set_styles(
        card,
        &[
            ("transform", style.transform.as_str()),
            ("background-image", style.background_image.as_str()),
            ("transition", style.transition.as_str()),
        ],
    );
}

/// Give every `.status-card` its 3D tilt and pointer highlight.
pub fn wire_card_tilt(document: &web::Document) {
    let cards = dom::query_all_html(document, ".status-card");
    if cards.is_empty() {
        log::debug!("[cards] no .status-card elements; tilt disabled");
        return;
    }
    for card in &cards {
        wire_one_card(card);
    }
    log::info!("[cards] tilt wired on {} cards", cards.len());
}

fn wire_one_card(card: &web::HtmlElement) {
    dom::set_styles(
        card,
        &[
            ("perspective", CARD_PERSPECTIVE),
            ("transform-style", "preserve-3d"),
        ],
    );
    if let Some(content) = dom::query_html(card, ".status-content") {
        dom::set_styles(
            &content,
            &[
                ("transform", CARD_CONTENT_DEPTH),
                ("transform-style", "preserve-3d"),
            ],
        );
    }

    let tilt = Rc::new(RefCell::new(CardTilt::new()));

    {
        let tilt = tilt.clone();
        let card_el = card.clone();
        dom::add_listener(card, "mousemove", move |ev: web::MouseEvent| {
            let (local, size) = input::pointer_local_px(&ev, &card_el);
            let style = {
                let mut t = tilt.borrow_mut();
                t.pointer_move(local, size);
                t.style()
            };
            apply_card_style(&card_el, &style);
        });
    }

    {
        let tilt = tilt.clone();
        let card_el = card.clone();
        dom::add_listener(card, "mouseleave", move |_ev: web::MouseEvent| {
            let (due, style) = {
                let mut t = tilt.borrow_mut();
                let due = t.pointer_leave(Instant::now());
                (due, t.style())
            };
            apply_card_style(&card_el, &style);
            schedule_cleanup(tilt.clone(), card_el.clone(), due);
        });
    }
}

fn schedule_cleanup(tilt: Rc<RefCell<CardTilt>>, card: web::HtmlElement, due: Instant) {
    dom::set_timeout(TILT_LEAVE_TRANSITION_MS as i32, move || {
        let changed = tilt.borrow_mut().advance(due);
        if changed {
            dom::set_style(&card, "transition", "");
        }
    });
}

/// Track the pointer over the whole window into `mouse`.
pub fn wire_window_pointer(window: &web::Window, mouse: Rc<RefCell<input::MouseState>>) {
    dom::add_listener(window, "mousemove", move |ev: web::MouseEvent| {
        mouse.borrow_mut().client = input::pointer_client_px(&ev);
    });
}
