//! Route dispatch
//!
//! A fixed three-way dispatch table. Pure: selecting a view has no state and
//! no side effects; the server decides what each selection means.

/// The view a request path selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSelector {
    /// Blog index listing
    Home,
    /// Single-post view; the identifier may be absent
    Show { slug: Option<String> },
    /// Static about page
    About,
    /// Unmatched route, rendered with HTTP 404
    NotFound,
}

/// Map a URL path to a view selector.
///
/// Leading and trailing slashes are stripped before splitting on `/`. Only
/// the first segment picks the view; `posts` carries the second segment as
/// the post identifier (an empty or absent segment means no identifier, which
/// the show view resolves itself). Everything unmatched, including the `/404`
/// redirect target, lands on [`ViewSelector::NotFound`].
pub fn dispatch(path: &str) -> ViewSelector {
    let mut segments = path.trim_matches('/').split('/');

    match segments.next().unwrap_or("") {
        "" => ViewSelector::Home,
        "posts" => ViewSelector::Show {
            slug: segments
                .next()
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        },
        "about" => ViewSelector::About,
        _ => ViewSelector::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_dispatches_home() {
        assert_eq!(dispatch("/"), ViewSelector::Home);
        assert_eq!(dispatch(""), ViewSelector::Home);
    }

    #[test]
    fn test_posts_with_identifier_dispatches_show() {
        assert_eq!(
            dispatch("/posts/hello-world"),
            ViewSelector::Show {
                slug: Some("hello-world".to_string())
            }
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        assert_eq!(
            dispatch("/posts/hello-world/"),
            ViewSelector::Show {
                slug: Some("hello-world".to_string())
            }
        );
    }

    #[test]
    fn test_posts_without_identifier_has_no_slug() {
        assert_eq!(dispatch("/posts"), ViewSelector::Show { slug: None });
        assert_eq!(dispatch("/posts/"), ViewSelector::Show { slug: None });
        assert_eq!(dispatch("/posts//extra"), ViewSelector::Show { slug: None });
    }

    #[test]
    fn test_about_dispatches_about() {
        assert_eq!(dispatch("/about"), ViewSelector::About);
    }

    #[test]
    fn test_unknown_route_is_not_found() {
        assert_eq!(dispatch("/archive"), ViewSelector::NotFound);
        assert_eq!(dispatch("/posts-archive"), ViewSelector::NotFound);
    }

    #[test]
    fn test_not_found_redirect_target_is_not_found_view() {
        assert_eq!(dispatch("/404"), ViewSelector::NotFound);
    }
}
