//! Gallery sheet visibility. The sheet lives in the static DOM shell;
//! opening toggles inline display plus a scroll lock on `<body>`.

use web_sys as web;

const SHEET_ID: &str = "gallery-sheet";
const SCROLL_LOCK_CLASS: &str = "scroll-locked";

pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SHEET_ID) {
        let _ = el.set_attribute("style", "");
    }
    set_scroll_lock(document, true);
}

pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SHEET_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
    set_scroll_lock(document, false);
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(SHEET_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

fn set_scroll_lock(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        let list = body.class_list();
        let _ = if locked {
            list.add_1(SCROLL_LOCK_CLASS)
        } else {
            list.remove_1(SCROLL_LOCK_CLASS)
        };
    }
}
