use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use super::dom::query_one;
use crate::config::HEADER_SCROLL_THRESHOLD;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Keeps the `scrolled` class on `<header>` in sync with the page offset.
/// Updates are batched into animation frames.
pub fn init_header_scroll(window: &Window, document: &Document) {
    let Some(header) = query_one(document, "header") else {
        return;
    };

    let update = {
        let window = window.clone();
        move || {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let classes = header.class_list();
            let _ = if is_scrolled(scroll_y) {
                classes.add_1("scrolled")
            } else {
                classes.remove_1("scrolled")
            };
        }
    };

    let schedule = {
        let window = window.clone();
        move || {
            let frame = Closure::once_into_js(update.clone());
            let _ = window.request_animation_frame(frame.unchecked_ref());
        }
    };

    // Initial position, e.g. after a reload halfway down the page
    schedule();

    let on_scroll = Closure::wrap(Box::new(schedule) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(100.0));
    }
}
