use log::info;
use web_sys::window;

mod config;
mod blog {
    pub mod feed;
    pub mod paginator;
    pub mod post;
    pub mod state;
    pub mod store;
}
mod site {
    pub mod carousel;
    pub mod contact;
    pub mod dom;
    pub mod header;
    pub mod menu;
    pub mod reveal;
    pub mod smooth_scroll;
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting FJOGO site scripts");

    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    site::menu::init_mobile_menu(&document);
    site::header::init_header_scroll(&window, &document);
    site::smooth_scroll::init_smooth_scroll(&document);
    site::carousel::init_logo_carousel(&document);

    // Islands: each one mounts only if its host element is on the page
    blog::feed::mount_feeds(&document);
    site::contact::mount_contact_form(&document);

    site::reveal::init_scroll_reveal(&window, &document);
}
