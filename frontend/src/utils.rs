use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

/// First element among `ids` present on the page. Pages name their
/// containers inconsistently, so every guarded block accepts a few aliases.
pub fn first_by_id(ids: &[&str]) -> Option<Element> {
    ids.iter().find_map(|id| by_id(id))
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_display(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", value);
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn is_desktop() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media("(min-width:1025px)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(true)
}
