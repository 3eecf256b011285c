use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use super::dom::{query_all, query_one};

pub fn init_mobile_menu(document: &Document) {
    let Some(menu) = query_one(document, ".mobile-menu-overlay") else {
        return;
    };

    let mut triggers: Vec<_> = [".mobile-toggle", ".close-menu"]
        .iter()
        .filter_map(|selector| query_one(document, selector))
        .collect();
    // Following a menu link closes the overlay too
    triggers.extend(query_all(document, ".mobile-menu-overlay nav a"));

    let toggle = Closure::wrap(Box::new(move || {
        let _ = menu.class_list().toggle("active");
    }) as Box<dyn FnMut()>);

    for trigger in &triggers {
        let _ = trigger.add_event_listener_with_callback("click", toggle.as_ref().unchecked_ref());
    }
    toggle.forget();
}
