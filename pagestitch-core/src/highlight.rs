// Active navigation link selection

use crate::dom::{Document, NodeId};
use crate::navigation::{ACTIVE_CLASS, NAV_LINK_CLASS};

pub const HOME_PAGE: &str = "index.html";
pub const BLOG_PAGE: &str = "blog.html";

/// Last segment of a location path, or the home page when that segment is empty
pub fn current_page_name(location_path: &str) -> &str {
    match location_path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => HOME_PAGE,
    }
}

/// Whether a link with `href` corresponds to the page at `location_path`.
///
/// Posts live under `blog/`, so any such path selects the blog index link.
pub fn link_matches(href: &str, location_path: &str) -> bool {
    href == current_page_name(location_path)
        || (location_path.contains("blog/") && href == BLOG_PAGE)
}

/// Clear every `.nav-link` marker, then mark the matching link.
///
/// When several links match, the last one in document order wins. Returns the
/// marked link, if any.
pub fn set_active_navigation_link(document: &mut Document, location_path: &str) -> Option<NodeId> {
    let mut active = None;

    for link in document.query_all_by_class(NAV_LINK_CLASS) {
        document.remove_class(link, ACTIVE_CLASS);
        if let Some(href) = document.attribute(link, "href")
            && link_matches(href, location_path)
        {
            active = Some(link);
        }
    }

    if let Some(link) = active {
        document.add_class(link, ACTIVE_CLASS);
    }

    active
}
