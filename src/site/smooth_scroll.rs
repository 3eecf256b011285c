use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::dom::query_all;

pub fn scroll_into_view(element: &Element, block: Option<ScrollLogicalPosition>) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    if let Some(block) = block {
        options.set_block(block);
    }
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Element id an in-page link points at. A bare `#` points nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn init_smooth_scroll(document: &Document) {
    for anchor in query_all(document, "a[href^=\"#\"]") {
        let document = document.clone();
        let link = anchor.clone();
        let on_click = Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            if let Some(target) = anchor_target(&href).and_then(|id| document.get_element_by_id(id)) {
                scroll_into_view(&target, None);
            }
        }) as Box<dyn FnMut(Event)>);

        let _ = anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_target_strips_hash() {
        assert_eq!(anchor_target("#contato"), Some("contato"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("pagina.html#x"), None);
    }
}
