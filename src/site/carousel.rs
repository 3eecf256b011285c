use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::dom::query_one;

/// Doubles the client logo strip so the CSS marquee can loop without a gap.
pub fn init_logo_carousel(document: &Document) {
    let Some(track) = query_one(document, ".logos-track") else {
        return;
    };

    let children = track.children();
    let slides: Vec<Element> = (0..children.length())
        .filter_map(|i| children.item(i))
        .collect();

    for slide in &slides {
        let Ok(clone) = slide.clone_node_with_deep(true) else {
            continue;
        };
        if let Some(element) = clone.dyn_ref::<Element>() {
            let _ = element.set_attribute("aria-hidden", "true");
        }
        let _ = track.append_child(&clone);
    }
    log::debug!("Cloned {} client logos", slides.len());
}
