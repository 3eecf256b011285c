use std::rc::Rc;

use yew::prelude::*;

use super::paginator::{page_controls, paginate, Page, PageControl};
use super::post::Post;

#[derive(Clone, Debug, PartialEq)]
pub enum FeedPhase {
    Loading,
    Failed,
    Ready {
        posts: Rc<[Post]>,
        current_page: usize,
    },
}

/// State of one blog feed. Posts are set once and never touched again; page
/// changes swap in a fresh state value.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedState {
    pub page_size: usize,
    pub phase: FeedPhase,
}

pub enum FeedAction {
    Loaded(Vec<Post>),
    Failed,
    Select(usize),
}

impl FeedState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            phase: FeedPhase::Loading,
        }
    }

    pub fn current_page(&self) -> Option<usize> {
        match &self.phase {
            FeedPhase::Ready { current_page, .. } => Some(*current_page),
            _ => None,
        }
    }

    /// Visible posts for the current page, `None` until posts are loaded.
    pub fn page(&self) -> Option<Page<'_>> {
        match &self.phase {
            FeedPhase::Ready { posts, current_page } => {
                Some(paginate(posts, self.page_size, *current_page))
            }
            _ => None,
        }
    }

    pub fn controls(&self) -> Vec<PageControl> {
        match (self.page(), self.current_page()) {
            (Some(page), Some(current)) => page_controls(page.page_count, current),
            _ => Vec::new(),
        }
    }

    fn next(self: Rc<Self>, action: FeedAction) -> Rc<Self> {
        let phase = match action {
            FeedAction::Loaded(posts) => FeedPhase::Ready {
                posts: posts.into(),
                current_page: 1,
            },
            FeedAction::Failed => FeedPhase::Failed,
            FeedAction::Select(page) => match self.select(page) {
                Some(phase) => phase,
                None => return self,
            },
        };

        Rc::new(FeedState {
            page_size: self.page_size,
            phase,
        })
    }

    fn select(&self, page: usize) -> Option<FeedPhase> {
        match &self.phase {
            FeedPhase::Ready { posts, current_page } => {
                let count = paginate(posts, self.page_size, 1).page_count;
                if page == *current_page || page == 0 || page > count.max(1) {
                    return None;
                }
                Some(FeedPhase::Ready {
                    posts: Rc::clone(posts),
                    current_page: page,
                })
            }
            _ => {
                log::debug!("Ignoring page {} selection before posts loaded", page);
                None
            }
        }
    }
}

impl Reducible for FeedState {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        self.next(action)
    }
}
