//! Event wiring. Every handler mutates the shared selection state and
//! then re-renders, so each interaction is observed as one snapshot.

use app_core::{hit_test, BodyType, BodyView, Gender, StyleFilter, TattooSize};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{coords, dom, render, App};

pub fn wire_all(app: &App) -> anyhow::Result<()> {
    wire_segmented_controls(app)?;
    wire_stage(app)?;
    wire_gallery(app)?;
    wire_escape(app);
    Ok(())
}

/// Fixed segmented controls; each button id carries its token
/// (`gender-m`, `body-std`, `view-front`, `size-s`).
fn wire_segmented_controls(app: &App) -> anyhow::Result<()> {
    for gender in Gender::ALL {
        let el = dom::require(&app.document, &format!("gender-{}", gender.as_str()))?;
        let app_c = app.clone();
        dom::add_click_listener(&el, move || {
            app_c.state.borrow_mut().set_gender(gender);
            render::render_all(&app_c);
        });
    }
    for body_type in BodyType::ALL {
        let el = dom::require(&app.document, &format!("body-{}", body_type.as_str()))?;
        let app_c = app.clone();
        dom::add_click_listener(&el, move || {
            app_c.state.borrow_mut().set_body_type(body_type);
            render::render_all(&app_c);
        });
    }
    for view in BodyView::ALL {
        let el = dom::require(&app.document, &format!("view-{}", view.as_str()))?;
        let app_c = app.clone();
        dom::add_click_listener(&el, move || {
            app_c.state.borrow_mut().set_view(view);
            render::render_all(&app_c);
        });
    }
    for size in TattooSize::ALL {
        let el = dom::require(&app.document, &format!("size-{}", size.as_str()))?;
        let app_c = app.clone();
        dom::add_click_listener(&el, move || {
            app_c.state.borrow_mut().set_size(size);
            render::render_all(&app_c);
        });
    }
    Ok(())
}

/// Stage pointerdown: client px -> stage units -> zone hit-test.
fn wire_stage(app: &App) -> anyhow::Result<()> {
    let stage = dom::require(&app.document, "stage")?;
    let app_c = app.clone();
    let stage_t = stage.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = stage_t.get_bounding_client_rect();
        let Some(point) = coords::client_to_stage(
            ev.client_x() as f32,
            ev.client_y() as f32,
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ) else {
            return;
        };
        let view = app_c.state.borrow().view;
        if let Some(part) = hit_test(view, point) {
            log::info!("[stage] hit {} at ({:.1},{:.1})", part, point.x, point.y);
            app_c.state.borrow_mut().select_body_part(part);
            render::render_all(&app_c);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = stage.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}

fn wire_gallery(app: &App) -> anyhow::Result<()> {
    {
        let el = dom::require(&app.document, "open-gallery")?;
        let app_c = app.clone();
        dom::add_click_listener(&el, move || {
            app_c.state.borrow_mut().open_gallery();
            render::render_all(&app_c);
        });
    }

    // Close button and backdrop share one path with the Escape key.
    for id in ["gallery-close", "gallery-backdrop"] {
        let el = dom::require(&app.document, id)?;
        let app_c = app.clone();
        dom::add_click_listener(&el, move || {
            app_c.state.borrow_mut().close_gallery();
            render::render_all(&app_c);
        });
    }

    {
        let el = dom::require(&app.document, "gallery-search")?;
        let app_c = app.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            let Some(target) = ev.target() else { return };
            let Ok(input) = target.dyn_into::<web::HtmlInputElement>() else {
                return;
            };
            app_c.state.borrow_mut().set_search(input.value());
            render::render_all(&app_c);
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Style chips: delegation on the row, tokens parsed by app-core.
    {
        let el = dom::require(&app.document, "style-chips")?;
        let app_c = app.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            let Some(token) = dom::delegated_attr(&ev, "data-style") else {
                return;
            };
            match StyleFilter::from_token(&token) {
                Ok(filter) => {
                    app_c.state.borrow_mut().set_style_filter(filter);
                    render::render_all(&app_c);
                }
                Err(e) => log::warn!("[gallery] {e}"),
            }
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Grid items are rebuilt on every render, so clicks are delegated.
    {
        let el = dom::require(&app.document, "gallery-grid")?;
        let app_c = app.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            let Some(id) = dom::delegated_attr(&ev, "data-id") else {
                return;
            };
            log::info!("[gallery] select {id}");
            app_c.state.borrow_mut().select_tattoo(&id);
            render::render_all(&app_c);
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    Ok(())
}

/// Window-level Escape closes the gallery, equivalent to the close button.
fn wire_escape(app: &App) {
    if let Some(window) = web::window() {
        let app_c = app.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if ev.key() != "Escape" {
                    return;
                }
                let open = app_c.state.borrow().gallery_open;
                if open {
                    app_c.state.borrow_mut().close_gallery();
                    render::render_all(&app_c);
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
