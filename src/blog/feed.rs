use std::rc::Rc;

use log::{debug, error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, MouseEvent, ScrollLogicalPosition};
use yew::create_portal;
use yew::prelude::*;

use super::paginator::{ControlKind, PageControl};
use super::post::{CardFields, CardTemplate};
use super::state::{FeedAction, FeedPhase, FeedState};
use super::store::load_posts;
use crate::config::{self, FeedSettings};
use crate::site::smooth_scroll::scroll_into_view;

pub const FETCH_FAILED_MESSAGE: &str = "Não foi possível carregar os posts do blog no momento.";

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub fields: CardFields,
    pub template: CardTemplate,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let PostCardProps { fields, template } = props;

    match template {
        CardTemplate::PostCard => html! {
            <article class="post-card">
                <div class="post-image-wrapper">
                    <img src={fields.image.clone()} alt={fields.title.clone()} loading="lazy" />
                </div>
                <div class="post-card-content">
                    <span class="category-label">{&fields.category}</span>
                    <h3><a href={fields.link.clone()}>{&fields.title}</a></h3>
                    <p>{&fields.summary}</p>
                    <span class="post-date">{&fields.date}</span>
                    <a href={fields.link.clone()} class="read-more">{template.read_more_label()}</a>
                </div>
            </article>
        },
        CardTemplate::BlogCard => html! {
            <article class="blog-card">
                <div class="blog-img">
                    <img src={fields.image.clone()} alt={fields.title.clone()} loading="lazy" />
                </div>
                <div class="blog-info">
                    <span class="category-label">{&fields.category}</span>
                    <h3>{&fields.title}</h3>
                    <p>{&fields.summary}</p>
                    <a href={fields.link.clone()} class="read-more">{template.read_more_label()}</a>
                </div>
            </article>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub controls: Vec<PageControl>,
    pub on_select: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    html! {
        <>
            { for props.controls.iter().map(|control| {
                let on_select = props.on_select.clone();
                let target = control.target;
                let direction = match control.kind {
                    ControlKind::Previous => Some("prev"),
                    ControlKind::Next => Some("next"),
                    ControlKind::Number => None,
                };
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_select.emit(target);
                });
                html! {
                    <a
                        key={control.label.clone()}
                        href="#"
                        class={classes!("pagination-button", direction, control.active.then(|| "active"))}
                        onclick={onclick}
                    >
                        {&control.label}
                    </a>
                }
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogFeedProps {
    /// Element the feed is mounted into, scrolled to on page changes.
    pub container: Element,
    /// Separate element for the page controls. Without one they follow the cards.
    pub pagination_host: Option<Element>,
    pub settings: FeedSettings,
    pub template: CardTemplate,
}

#[function_component(BlogFeed)]
pub fn blog_feed(props: &BlogFeedProps) -> Html {
    let page_size = props.settings.page_size.unwrap_or(usize::MAX);
    let state = use_reducer(move || FeedState::new(page_size));

    // Fetch once on mount
    {
        let state = state.clone();
        use_effect_with_deps(
            move |source: &String| {
                let source = source.clone();
                spawn_local(async move {
                    match load_posts(&source).await {
                        Ok(posts) => {
                            info!("Loaded {} blog posts from {}", posts.len(), source);
                            state.dispatch(FeedAction::Loaded(posts));
                        }
                        Err(e) => {
                            error!("Failed to load blog posts from {}: {}", source, e);
                            state.dispatch(FeedAction::Failed);
                        }
                    }
                });
                || ()
            },
            props.settings.source.clone(),
        );
    }

    let on_select = {
        let state = state.clone();
        let container = props.container.clone();
        Callback::from(move |page: usize| {
            scroll_into_view(&container, Some(ScrollLogicalPosition::Start));
            state.dispatch(FeedAction::Select(page));
        })
    };

    html! {
        <FeedView
            state={Rc::new((*state).clone())}
            template={props.template}
            base_path={props.settings.base_path.clone()}
            pagination_host={props.pagination_host.clone()}
            on_select={on_select}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct FeedViewProps {
    pub state: Rc<FeedState>,
    pub template: CardTemplate,
    pub base_path: String,
    pub pagination_host: Option<Element>,
    pub on_select: Callback<usize>,
}

/// Cards plus page controls for one snapshot of the feed state.
#[function_component(FeedView)]
pub fn feed_view(props: &FeedViewProps) -> Html {
    let state = &props.state;

    let cards = match &state.phase {
        FeedPhase::Loading => html! {},
        FeedPhase::Failed => html! {
            <p class="text-center">{FETCH_FAILED_MESSAGE}</p>
        },
        FeedPhase::Ready { .. } => state
            .page()
            .map(|page| {
                page.visible
                    .iter()
                    .map(|post| {
                        let fields = CardFields::new(post, props.template, &props.base_path);
                        html! { <PostCard fields={fields} template={props.template} /> }
                    })
                    .collect::<Html>()
            })
            .unwrap_or_else(|| html! {}),
    };

    let controls = state.controls();
    let controls = if controls.is_empty() {
        html! {}
    } else {
        let bar = html! { <Pagination controls={controls} on_select={props.on_select.clone()} /> };
        match &props.pagination_host {
            Some(host) => create_portal(bar, host.clone()),
            None => html! { <nav class="pagination">{bar}</nav> },
        }
    };

    html! {
        <>
            {cards}
            {controls}
        </>
    }
}

fn mount_feed(
    container: Element,
    pagination_host: Option<Element>,
    defaults: FeedSettings,
    template: CardTemplate,
) {
    let settings = defaults.overridden_by(&container);
    info!("Mounting blog feed #{} from {}", container.id(), settings.source);

    // Both containers are fully owned by the feed from here on
    container.set_inner_html("");
    if let Some(host) = &pagination_host {
        host.set_inner_html("");
    }

    let props = BlogFeedProps {
        container: container.clone(),
        pagination_host,
        settings,
        template,
    };
    yew::Renderer::<BlogFeed>::with_root_and_props(container, props).render();
}

/// Mounts the paginated blog and the teaser list wherever their host
/// containers exist on the current page.
pub fn mount_feeds(document: &Document) {
    match document.get_element_by_id(config::POSTS_CONTAINER_ID) {
        Some(container) => {
            let pagination_host = document.get_element_by_id(config::PAGINATION_CONTAINER_ID);
            mount_feed(
                container,
                pagination_host,
                FeedSettings::main_feed(),
                CardTemplate::PostCard,
            );
        }
        None => debug!("No #{} on this page", config::POSTS_CONTAINER_ID),
    }

    match document.get_element_by_id(config::TEASER_CONTAINER_ID) {
        Some(container) => {
            mount_feed(container, None, FeedSettings::teaser_feed(), CardTemplate::BlogCard);
        }
        None => debug!("No #{} on this page", config::TEASER_CONTAINER_ID),
    }
}
