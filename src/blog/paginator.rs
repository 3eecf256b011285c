use super::post::Post;

/// Read-only window over the post list.
#[derive(Debug, PartialEq)]
pub struct Page<'a> {
    pub visible: &'a [Post],
    pub page_count: usize,
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Slice of `posts` shown on `page` (1-based). Pages outside
/// `1..=page_count` give an empty slice.
pub fn paginate(posts: &[Post], page_size: usize, page: usize) -> Page<'_> {
    let page_size = page_size.max(1);
    let page_count = page_count(posts.len(), page_size);

    let visible = if page == 0 || page > page_count {
        &posts[0..0]
    } else {
        let start = (page - 1) * page_size;
        let end = start.saturating_add(page_size).min(posts.len());
        &posts[start..end]
    };

    Page { visible, page_count }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    Previous,
    Number,
    Next,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageControl {
    pub kind: ControlKind,
    pub label: String,
    pub target: usize,
    pub active: bool,
}

pub const PREVIOUS_LABEL: &str = "← Anterior";
pub const NEXT_LABEL: &str = "Próximo →";

/// Ordered controls for the pagination bar. A single page (or none) gets
/// no controls at all.
pub fn page_controls(page_count: usize, current_page: usize) -> Vec<PageControl> {
    if page_count <= 1 {
        return Vec::new();
    }

    let mut controls = Vec::with_capacity(page_count + 2);
    if current_page > 1 {
        controls.push(PageControl {
            kind: ControlKind::Previous,
            label: PREVIOUS_LABEL.to_string(),
            target: current_page - 1,
            active: false,
        });
    }
    for page in 1..=page_count {
        controls.push(PageControl {
            kind: ControlKind::Number,
            label: page.to_string(),
            target: page,
            active: page == current_page,
        });
    }
    if current_page < page_count {
        controls.push(PageControl {
            kind: ControlKind::Next,
            label: NEXT_LABEL.to_string(),
            target: current_page + 1,
            active: false,
        });
    }
    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(n: usize) -> Vec<Post> {
        (1..=n)
            .map(|i| Post {
                title: Some(format!("Post {}", i)),
                link: Some(format!("post-{}.html", i)),
                ..Default::default()
            })
            .collect()
    }

    fn numbered(controls: &[PageControl]) -> usize {
        controls.iter().filter(|c| c.kind == ControlKind::Number).count()
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(7, 5), 2);
        assert_eq!(page_count(11, 5), 3);
        assert_eq!(page_count(3, 0), 3);
    }

    #[test]
    fn pages_reconstruct_the_list() {
        for total in [0usize, 1, 4, 5, 6, 10, 23] {
            for page_size in [1usize, 2, 5, 7] {
                let all = posts(total);
                let count = paginate(&all, page_size, 1).page_count;
                assert_eq!(count, total.div_ceil(page_size));

                let rebuilt: Vec<Post> = (1..=count)
                    .flat_map(|p| paginate(&all, page_size, p).visible.to_vec())
                    .collect();
                assert_eq!(rebuilt, all, "total={} size={}", total, page_size);
            }
        }
    }

    #[test]
    fn last_page_is_partial() {
        let all = posts(7);
        let page = paginate(&all, 5, 2);
        assert_eq!(page.visible.len(), 2);
        assert_eq!(page.visible[0].title.as_deref(), Some("Post 6"));
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let all = posts(7);
        assert!(paginate(&all, 5, 0).visible.is_empty());
        assert!(paginate(&all, 5, 3).visible.is_empty());
        assert!(paginate(&all, 5, usize::MAX).visible.is_empty());
        assert_eq!(paginate(&all, 5, 3).page_count, 2);
        assert!(paginate(&[], 5, 1).visible.is_empty());
    }

    #[test]
    fn paginate_is_deterministic() {
        let all = posts(12);
        assert_eq!(paginate(&all, 5, 2), paginate(&all, 5, 2));
    }

    #[test]
    fn two_pages_controls() {
        let first = page_controls(2, 1);
        assert_eq!(numbered(&first), 2);
        assert!(first.iter().all(|c| c.kind != ControlKind::Previous));
        let next = first.last().unwrap();
        assert_eq!((next.kind, next.target), (ControlKind::Next, 2));
        assert!(first[0].active);

        let second = page_controls(2, 2);
        assert_eq!(numbered(&second), 2);
        assert!(second.iter().all(|c| c.kind != ControlKind::Next));
        assert_eq!((second[0].kind, second[0].target), (ControlKind::Previous, 1));
        assert!(second[2].active);
    }

    #[test]
    fn middle_page_has_both_arrows() {
        let controls = page_controls(3, 2);
        let labels: Vec<&str> = controls.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec![PREVIOUS_LABEL, "1", "2", "3", NEXT_LABEL]);
        assert_eq!(controls.iter().filter(|c| c.active).count(), 1);
    }

    #[test]
    fn single_page_has_no_controls() {
        assert!(page_controls(0, 1).is_empty());
        assert!(page_controls(1, 1).is_empty());
    }
}
