use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up a required element by id; a missing element is an init error.
pub fn require(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_attr(document: &web::Document, id: &str, name: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.set_attribute(name, value);
    }
}

/// Add or remove a class on an element, by id.
pub fn set_class_if(document: &web::Document, id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let list = el.class_list();
        let _ = if on {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
    }
}

/// Nearest ancestor (or self) of an event's target carrying `attr`, and
/// that attribute's value. Used for click delegation on rebuilt lists.
pub fn delegated_attr(ev: &web::Event, attr: &str) -> Option<String> {
    let target = ev.target()?;
    let el = target.dyn_into::<web::Element>().ok()?;
    let hit = el.closest(&format!("[{attr}]")).ok().flatten()?;
    hit.get_attribute(attr)
}
