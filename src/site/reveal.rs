use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use super::dom::query_all;
use crate::config::REVEAL_THRESHOLD;

/// Hides every `.js-scroll` element until it first enters the viewport.
pub fn init_scroll_reveal(window: &Window, document: &Document) {
    let supported = Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    if !supported {
        warn!("IntersectionObserver not supported, scroll reveal disabled");
        return;
    }

    let elements = query_all(document, ".js-scroll");
    if elements.is_empty() {
        return;
    }

    let on_intersect = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                let _ = target.class_list().add_1("scrolled");
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer = match IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("Could not create IntersectionObserver: {:?}", e);
            return;
        }
    };
    on_intersect.forget();

    for element in &elements {
        let _ = element.class_list().add_1("is-hidden");
        observer.observe(element);
    }
    log::debug!("Watching {} elements for scroll reveal", elements.len());
}
