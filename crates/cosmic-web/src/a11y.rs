//! Screen-reader announcements via a visually hidden polite live region.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

const REGION_ID: &str = "sr-live-region";

fn ensure_region(document: &Document) -> Option<Element> {
    if let Some(existing) = document.get_element_by_id(REGION_ID) {
        return Some(existing);
    }
    let region = document.create_element("div").ok()?;
    region.set_id(REGION_ID);
    region.set_attribute("aria-live", "polite").ok()?;
    region.set_attribute("aria-atomic", "true").ok()?;
    if let Some(element) = region.dyn_ref::<HtmlElement>() {
        let style = element.style();
        // Off-screen but still read by assistive tech.
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("width", "1px");
        let _ = style.set_property("height", "1px");
        let _ = style.set_property("margin", "-1px");
        let _ = style.set_property("overflow", "hidden");
        let _ = style.set_property("clip", "rect(0, 0, 0, 0)");
        let _ = style.set_property("white-space", "nowrap");
    }
    document.body()?.append_child(&region).ok()?;
    Some(region)
}

/// Post `message` to the live region, creating it on first use.
pub fn announce(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if let Some(region) = ensure_region(&document) {
        region.set_text_content(Some(message));
    }
}
