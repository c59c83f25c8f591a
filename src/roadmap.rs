use crate::constants::{ACCENT_COLOR, MILESTONE_COLOR};
use crate::core::{point_left_percent, LabelSide, Milestone, ROADMAP};
use crate::dom;
use web_sys as web;

pub const TIMELINE_ID: &str = "interactive-timeline";

/// A rendered roadmap point and the dot the scroll reveal scales.
pub struct PointView {
    pub point: web::HtmlElement,
    pub dot: web::HtmlElement,
}

pub struct RoadmapView {
    pub timeline: web::HtmlElement,
    pub points: Vec<PointView>,
}

const SECTION_HTML: &str = r#"
    <div class="inner">
      <header>
        <h2>Development Roadmap</h2>
        <p>Our path from concept to reality</p>
      </header>
      <div id="interactive-timeline" style="position: relative; margin: 100px 0; height: 300px;">
        <div class="timeline-line" style="position: absolute; width: 100%; height: 4px; background-color: rgba(0, 188, 212, 0.3); top: 50%; transform: translateY(-50%);"></div>
      </div>
    </div>
"#;

/// Insert the roadmap section before `#footer`. Returns `None` when the page
/// has no footer/wrapper to anchor it.
pub fn mount(document: &web::Document) -> anyhow::Result<Option<RoadmapView>> {
    let (Some(footer), Some(wrapper)) = (
        document.query_selector("#footer").ok().flatten(),
        document.query_selector("#page-wrapper").ok().flatten(),
    ) else {
        log::debug!("[roadmap] #footer or #page-wrapper missing; roadmap skipped");
        return Ok(None);
    };

    let section = dom::create_html(document, "section")?;
    section.set_class_name("wrapper style5");
    section.set_inner_html(SECTION_HTML);
    let footer: &web::Node = &footer;
    wrapper
        .insert_before(&section, Some(footer))
        .map_err(|e| anyhow::anyhow!("insert roadmap: {:?}", e))?;

    let timeline = dom::query_html(&section, &format!("#{}", TIMELINE_ID))
        .ok_or_else(|| anyhow::anyhow!("roadmap markup lost #{}", TIMELINE_ID))?;

    let mut points = Vec::with_capacity(ROADMAP.len());
    for (i, m) in ROADMAP.iter().enumerate() {
        points.push(build_point(document, &timeline, i, ROADMAP.len(), m)?);
    }
    log::info!("[roadmap] mounted {} milestones", points.len());
    Ok(Some(RoadmapView { timeline, points }))
}

fn build_point(
    document: &web::Document,
    timeline: &web::HtmlElement,
    index: usize,
    count: usize,
    m: &Milestone,
) -> anyhow::Result<PointView> {
    let current = m.is_current();
    let color = if current { ACCENT_COLOR } else { MILESTONE_COLOR };
    let left = format!("{}%", point_left_percent(index, count));

    let point = dom::create_html(document, "div")?;
    point.set_class_name("timeline-point");
    dom::set_styles(
        &point,
        &[
            ("position", "absolute"),
            ("top", "50%"),
            ("left", left.as_str()),
            ("transform", "translate(-50%, -50%)"),
            ("cursor", "pointer"),
        ],
    );

    let dot_size = if current { "24px" } else { "16px" };
    let dot = dom::create_html(document, "div")?;
    dom::set_styles(
        &dot,
        &[
            ("width", dot_size),
            ("height", dot_size),
            ("border-radius", "50%"),
            ("background-color", color),
            (
                "box-shadow",
                if current {
                    "0 0 15px rgba(0, 188, 212, 0.8)"
                } else {
                    "none"
                },
            ),
            ("transform", "translateY(-50%)"),
            ("transition", "all 0.3s ease"),
            ("z-index", "2"),
        ],
    );

    let side = LabelSide::for_index(index);
    let label = dom::create_html(document, "div")?;
    dom::set_styles(
        &label,
        &[
            ("position", "absolute"),
            ("width", "150px"),
            ("text-align", "center"),
            ("left", "50%"),
            ("transform", "translateX(-50%)"),
            ("color", color),
            ("font-weight", if current { "bold" } else { "normal" }),
            ("transition", "all 0.3s ease"),
        ],
    );
    match side {
        LabelSide::Above => dom::set_style(&label, "bottom", "30px"),
        LabelSide::Below => dom::set_style(&label, "top", "30px"),
    }
    label.set_text_content(Some(m.date));

    let card = dom::create_html(document, "div")?;
    card.set_class_name("timeline-info-card");
    dom::set_styles(
        &card,
        &[
            ("position", "absolute"),
            ("width", "250px"),
            ("background-color", "#1a1f2b"),
            ("border-radius", "8px"),
            ("padding", "15px"),
            ("box-shadow", "0 10px 25px rgba(0,0,0,0.5)"),
            ("z-index", "10"),
            ("left", "50%"),
            ("margin-left", "-125px"),
            ("transition", "all 0.3s ease"),
        ],
    );
    match side {
        LabelSide::Above => dom::set_style(&card, "bottom", "60px"),
        LabelSide::Below => dom::set_style(&card, "top", "60px"),
    }
    set_info_card_visible(&card, false);
    let title = dom::create_html(document, "h4")?;
    dom::set_styles(&title, &[("margin-top", "0"), ("color", MILESTONE_COLOR)]);
    title.set_text_content(Some(m.title));
    let body = dom::create_html(document, "p")?;
    dom::set_style(&body, "margin-bottom", "0");
    body.set_text_content(Some(m.description));
    append(&card, &title)?;
    append(&card, &body)?;

    append(&point, &dot)?;
    append(&point, &label)?;
    append(&point, &card)?;
    append(timeline, &point)?;

    wire_hover(&point, &dot, &label, &card, current);
    Ok(PointView { point, dot })
}

fn append(parent: &web::HtmlElement, child: &web::HtmlElement) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

fn set_info_card_visible(card: &web::HtmlElement, visible: bool) {
    let (opacity, visibility, transform) = if visible {
        ("1", "visible", "translateY(0)")
    } else {
        ("0", "hidden", "translateY(20px)")
    };
    dom::set_styles(
        card,
        &[
            ("opacity", opacity),
            ("visibility", visibility),
            ("transform", transform),
        ],
    );
}

fn wire_hover(
    point: &web::HtmlElement,
    dot: &web::HtmlElement,
    label: &web::HtmlElement,
    card: &web::HtmlElement,
    current: bool,
) {
    {
        let (dot, label, card) = (dot.clone(), label.clone(), card.clone());
        dom::add_listener(point, "mouseenter", move |_ev: web::MouseEvent| {
            set_info_card_visible(&card, true);
            dom::set_style(&dot, "transform", "scale(1.2) translateY(-50%)");
            dom::set_style(&label, "font-weight", "bold");
        });
    }
    {
        let (dot, label, card) = (dot.clone(), label.clone(), card.clone());
        dom::add_listener(point, "mouseleave", move |_ev: web::MouseEvent| {
            set_info_card_visible(&card, false);
            // The current milestone stays emphasised.
            if !current {
                dom::set_style(&dot, "transform", "scale(1) translateY(-50%)");
                dom::set_style(&label, "font-weight", "normal");
            }
        });
    }
}
