use log::Level;
use web_sys::Element;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub const POSTS_CONTAINER_ID: &str = "posts-container";
pub const PAGINATION_CONTAINER_ID: &str = "pagination-container";
pub const TEASER_CONTAINER_ID: &str = "blog-posts-container";
pub const CONTACT_FORM_ID: &str = "contact-form";

pub const POSTS_URL: &str = "blog_posts.json";
pub const POSTS_PER_PAGE: usize = 5;

// The teaser list lives one directory below the site root.
pub const TEASER_POSTS_URL: &str = "../blog_posts.json";
pub const TEASER_BASE_PATH: &str = "..";

pub const WHATSAPP_NUMBER: &str = "5511999999999";

pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Settings for one mounted blog feed, after applying `data-*` overrides
/// from the host container.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedSettings {
    pub source: String,
    pub base_path: String,
    /// `None` renders every post on a single page.
    pub page_size: Option<usize>,
}

impl FeedSettings {
    pub fn main_feed() -> Self {
        Self {
            source: POSTS_URL.to_string(),
            base_path: String::new(),
            page_size: Some(POSTS_PER_PAGE),
        }
    }

    pub fn teaser_feed() -> Self {
        Self {
            source: TEASER_POSTS_URL.to_string(),
            base_path: TEASER_BASE_PATH.to_string(),
            page_size: None,
        }
    }

    pub fn with_overrides(
        mut self,
        source: Option<String>,
        base_path: Option<String>,
        page_size: Option<String>,
    ) -> Self {
        if let Some(source) = source.filter(|s| !s.trim().is_empty()) {
            self.source = source.trim().to_string();
        }
        if let Some(base_path) = base_path {
            self.base_path = base_path.trim().to_string();
        }
        if self.page_size.is_some() {
            if let Some(size) = page_size.as_deref().and_then(parse_page_size) {
                self.page_size = Some(size);
            }
        }
        self
    }

    pub fn overridden_by(self, element: &Element) -> Self {
        self.with_overrides(
            element.get_attribute("data-source"),
            element.get_attribute("data-base-path"),
            element.get_attribute("data-page-size"),
        )
    }
}

pub fn parse_page_size(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|size| *size > 0)
}

/// Keeps only the digits of a phone number, the form wa.me expects.
pub fn normalize_whatsapp_number(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
