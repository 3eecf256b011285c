use serde::Deserialize;

pub const DEFAULT_SUMMARY: &str = "Clique para ler mais sobre este assunto jurídico.";
pub const DEFAULT_CATEGORY: &str = "Artigo";
pub const FALLBACK_LINK: &str = "#";

/// One entry of `blog_posts.json`. The data file uses Portuguese keys, the
/// English names are accepted too. Nothing is required at parse time.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Post {
    #[serde(alias = "titulo")]
    pub title: Option<String>,
    #[serde(alias = "resumo")]
    pub summary: Option<String>,
    #[serde(alias = "imagem")]
    pub image: Option<String>,
    #[serde(alias = "categoria")]
    pub category: Option<String>,
    #[serde(alias = "data")]
    pub date: Option<String>,
    pub link: Option<String>,
}

/// Markup variant used for a post block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTemplate {
    /// Paginated blog page: `article.post-card`.
    PostCard,
    /// Teaser list on inner pages: `article.blog-card`.
    BlogCard,
}

impl CardTemplate {
    pub fn default_image(&self) -> &'static str {
        match self {
            CardTemplate::PostCard => "assets/default.jpg",
            CardTemplate::BlogCard => "assets/blog/default.jpg",
        }
    }

    pub fn read_more_label(&self) -> &'static str {
        match self {
            CardTemplate::PostCard => "Ler mais →",
            CardTemplate::BlogCard => "Ler Artigo →",
        }
    }
}

/// Display-ready values for one post, with defaults applied and paths
/// resolved against the feed's base path.
#[derive(Clone, Debug, PartialEq)]
pub struct CardFields {
    pub title: String,
    pub summary: String,
    pub image: String,
    pub category: String,
    pub date: String,
    pub link: String,
}

impl CardFields {
    pub fn new(post: &Post, template: CardTemplate, base_path: &str) -> Self {
        let image = present(&post.image).unwrap_or(template.default_image());
        let link = present(&post.link)
            .map(safe_href)
            .unwrap_or(FALLBACK_LINK);

        CardFields {
            title: present(&post.title).unwrap_or_default().to_string(),
            summary: present(&post.summary).unwrap_or(DEFAULT_SUMMARY).to_string(),
            image: join_base_path(base_path, image),
            category: present(&post.category).unwrap_or(DEFAULT_CATEGORY).to_string(),
            date: present(&post.date).unwrap_or_default().to_string(),
            link: join_base_path(base_path, link),
        }
    }
}

// Empty strings count as missing, same as an absent key.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Lowercased scheme of `link`, read the way browsers parse URLs: leading and
/// trailing C0 controls and spaces are ignored, tabs and newlines are dropped
/// everywhere. `None` for relative references.
fn url_scheme(link: &str) -> Option<String> {
    let cleaned: String = link
        .trim_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    let (scheme, _) = cleaned.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then(|| scheme.to_ascii_lowercase())
}

// Only relative links and a handful of schemes make it into `href`.
fn safe_href(link: &str) -> &str {
    match url_scheme(link).as_deref() {
        None | Some("http" | "https" | "mailto" | "tel") => link,
        Some(_) => FALLBACK_LINK,
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || path.starts_with('#') || url_scheme(path).is_some()
}

/// Prefixes a relative path with the site base path.
pub fn join_base_path(base_path: &str, path: &str) -> String {
    let base = base_path.trim_end_matches('/');
    if base.is_empty() || is_absolute(path) {
        return path.to_string();
    }
    format!("{}/{}", base, path.trim_start_matches("./"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_post() -> Post {
        Post {
            title: Some("Direito do consumidor".to_string()),
            summary: Some("Seus direitos em compras online".to_string()),
            image: Some("assets/blog/consumidor.jpg".to_string()),
            category: Some("Consumidor".to_string()),
            date: Some("12/03/2025".to_string()),
            link: Some("blog/consumidor.html".to_string()),
        }
    }

    #[test]
    fn deserializes_portuguese_keys() {
        let json = r#"{
            "titulo": "Herança",
            "resumo": "Como funciona o inventário",
            "imagem": "assets/heranca.jpg",
            "categoria": "Família",
            "data": "2025-01-01",
            "link": "blog/heranca.html"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.title.as_deref(), Some("Herança"));
        assert_eq!(post.summary.as_deref(), Some("Como funciona o inventário"));
        assert_eq!(post.category.as_deref(), Some("Família"));
        assert_eq!(post.date.as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn deserializes_english_keys_and_missing_fields() {
        let post: Post = serde_json::from_str(r#"{"title": "Only a title"}"#).unwrap();
        assert_eq!(post.title.as_deref(), Some("Only a title"));
        assert_eq!(post.link, None);
        assert_eq!(post.image, None);
    }

    #[test]
    fn defaults_apply_per_template() {
        let post = Post {
            title: Some("Sem extras".to_string()),
            summary: Some("   ".to_string()),
            ..Default::default()
        };

        let card = CardFields::new(&post, CardTemplate::PostCard, "");
        assert_eq!(card.summary, DEFAULT_SUMMARY);
        assert_eq!(card.category, DEFAULT_CATEGORY);
        assert_eq!(card.image, "assets/default.jpg");
        assert_eq!(card.link, "#");

        let card = CardFields::new(&post, CardTemplate::BlogCard, "..");
        assert_eq!(card.image, "../assets/blog/default.jpg");
        assert_eq!(card.link, "#");
    }

    #[test]
    fn base_path_joins_relative_paths_only() {
        let card = CardFields::new(&full_post(), CardTemplate::BlogCard, "..");
        assert_eq!(card.image, "../assets/blog/consumidor.jpg");
        assert_eq!(card.link, "../blog/consumidor.html");

        assert_eq!(join_base_path("/site/", "./a.html"), "/site/a.html");
        assert_eq!(join_base_path("..", "/abs.html"), "/abs.html");
        assert_eq!(join_base_path("..", "https://example.com/x"), "https://example.com/x");
        assert_eq!(join_base_path("", "a.html"), "a.html");
    }

    #[test]
    fn script_links_are_neutralized() {
        for link in [
            "  JavaScript:alert(1)",
            "java\tscript:alert(1)",
            "java\nscript:alert(1)",
            "jav\ras\ncript:alert(1)",
            "\u{1}javascript:alert(1)",
            "\u{0}\u{1f} javascript:alert(1)",
            "VBScript:msgbox(1)",
            "data:text/html,<script>alert(1)</script>",
        ] {
            let post = Post {
                link: Some(link.to_string()),
                ..full_post()
            };
            let card = CardFields::new(&post, CardTemplate::PostCard, "");
            assert_eq!(card.link, "#", "link {:?} should be neutralized", link);
        }
    }

    #[test]
    fn allowed_links_pass_through() {
        for link in [
            "https://example.com/artigo",
            "HTTP://example.com",
            "MAILTO:contato@fjogo.adv.br",
            "tel:+5511999999999",
            "blog/artigo.html",
            "#contato",
        ] {
            let post = Post {
                link: Some(link.to_string()),
                ..full_post()
            };
            let card = CardFields::new(&post, CardTemplate::PostCard, "");
            assert_eq!(card.link, link);
        }
    }

    #[test]
    fn scheme_check_ignores_case_when_joining() {
        assert_eq!(join_base_path("..", "MAILTO:x@y.com"), "MAILTO:x@y.com");
        assert_eq!(join_base_path("..", "Tel:+551100000000"), "Tel:+551100000000");
        assert_eq!(join_base_path("..", "DATA:image/png;base64,AAAA"), "DATA:image/png;base64,AAAA");
        assert_eq!(join_base_path("..", "img/a:b.jpg"), "../img/a:b.jpg");
    }

    #[test]
    fn markup_in_fields_is_kept_as_text() {
        let post = Post {
            title: Some("<script>alert(1)</script>".to_string()),
            ..full_post()
        };
        let card = CardFields::new(&post, CardTemplate::PostCard, "");
        assert_eq!(card.title, "<script>alert(1)</script>");
    }
}
