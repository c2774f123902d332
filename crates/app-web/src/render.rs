//! Renders the current selection snapshot into the static DOM shell.
//!
//! One function, called after every state transition, writes everything
//! that can have changed; the DOM is never the source of truth.

use app_core::{
    model_sprite_offset_x, zones_for_view, BodyType, BodyView, Catalog, Gender, SelectionState,
    TattooSize, STYLE_FILTERS, TATTOO_BASE_SIZE,
};
use web_sys as web;

use crate::{dom, overlay, App};

pub fn render_all(app: &App) {
    let state = app.state.borrow();
    let doc = &app.document;
    render_stage(doc, &state, &app.catalog);
    render_controls(doc, &state);
    render_panel(doc, &state, &app.catalog);
    render_price(doc, &state, &app.catalog);
    render_gallery(doc, &state, &app.catalog);
}

/// Silhouette sprite, zone polygons and the tattoo overlay. The stage is
/// an SVG with the 100-by-133.33 stage viewBox, so positions are written
/// in stage units directly.
fn render_stage(doc: &web::Document, state: &SelectionState, catalog: &Catalog) {
    dom::set_attr(
        doc,
        "model-img",
        "href",
        &format!("assets/models/{}.png", state.model_ref()),
    );
    dom::set_attr(
        doc,
        "model-img",
        "x",
        &format!("{}", model_sprite_offset_x(state.view)),
    );

    let mut layer = String::new();
    for zone in zones_for_view(state.view) {
        let mut points = String::new();
        for (i, p) in zone.outline.iter().enumerate() {
            if i > 0 {
                points.push(' ');
            }
            points.push_str(&format!("{},{}", p.x, p.y));
        }
        let active = if zone.body_part == state.selected_body_part {
            " active"
        } else {
            ""
        };
        layer.push_str(&format!(
            r#"<polygon points="{points}" class="zone-hit{active}" data-zone="{}"/>"#,
            zone.id
        ));
    }
    if let Some(el) = doc.get_element_by_id("zone-layer") {
        el.set_inner_html(&layer);
    }

    let tattoo = state.selected_tattoo(catalog);
    let side = TATTOO_BASE_SIZE * state.overlay_scale();
    let anchor = state.anchor();
    dom::set_attr(
        doc,
        "tattoo-overlay",
        "href",
        &format!("assets/tattoos/{}.png", tattoo.id),
    );
    dom::set_attr(doc, "tattoo-overlay", "x", &format!("{}", anchor.x - side / 2.0));
    dom::set_attr(doc, "tattoo-overlay", "y", &format!("{}", anchor.y - side / 2.0));
    dom::set_attr(doc, "tattoo-overlay", "width", &format!("{side}"));
    dom::set_attr(doc, "tattoo-overlay", "height", &format!("{side}"));
}

fn render_controls(doc: &web::Document, state: &SelectionState) {
    for gender in Gender::ALL {
        dom::set_class_if(
            doc,
            &format!("gender-{}", gender.as_str()),
            "active",
            state.gender == gender,
        );
    }
    for body_type in BodyType::ALL {
        dom::set_class_if(
            doc,
            &format!("body-{}", body_type.as_str()),
            "active",
            state.body_type == body_type,
        );
    }
    for view in BodyView::ALL {
        dom::set_class_if(
            doc,
            &format!("view-{}", view.as_str()),
            "active",
            state.view == view,
        );
    }
    for size in TattooSize::ALL {
        dom::set_class_if(
            doc,
            &format!("size-{}", size.as_str()),
            "active",
            state.size == size,
        );
    }
}

fn render_panel(doc: &web::Document, state: &SelectionState, catalog: &Catalog) {
    let tattoo = state.selected_tattoo(catalog);
    dom::set_attr(
        doc,
        "tattoo-thumb",
        "src",
        &format!("assets/tattoos/{}.png", tattoo.id),
    );
    dom::set_attr(doc, "tattoo-thumb", "alt", tattoo.name);
    dom::set_text(doc, "tattoo-name", tattoo.name);
    dom::set_text(doc, "tattoo-style", tattoo.style.as_str());
    dom::set_text(
        doc,
        "body-part-label",
        &format!("Зона: {}", state.selected_body_part),
    );
}

fn render_price(doc: &web::Document, state: &SelectionState, catalog: &Catalog) {
    dom::set_text(doc, "price-value", &app_core::format_rub(state.price(catalog)));
}

fn render_gallery(doc: &web::Document, state: &SelectionState, catalog: &Catalog) {
    if state.gallery_open {
        overlay::show(doc);
    } else {
        overlay::hide(doc);
    }

    for (filter, _label) in STYLE_FILTERS {
        dom::set_class_if(
            doc,
            &format!("style-{}", filter.token()),
            "active",
            state.style_filter == filter,
        );
    }

    let items = state.filtered(catalog);
    dom::set_attr(
        doc,
        "gallery-empty",
        "style",
        if items.is_empty() { "" } else { "display:none" },
    );

    let selected_id = state.selected_tattoo(catalog).id;
    let mut grid = String::new();
    for design in &items {
        let active = if design.id == selected_id { " active" } else { "" };
        grid.push_str(&format!(
            r#"<button type="button" class="gallery-item{active}" data-id="{id}"><img src="assets/tattoos/{id}.png" alt="{name}"><span>{name}</span></button>"#,
            id = design.id,
            name = design.name
        ));
    }
    if let Some(el) = doc.get_element_by_id("gallery-grid") {
        el.set_inner_html(&grid);
    }
}
