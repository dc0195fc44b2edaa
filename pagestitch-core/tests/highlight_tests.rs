// Tests for active navigation link selection

use pagestitch_core::dom::Document;
use pagestitch_core::fallback::{Component, load_fallback_component};
use pagestitch_core::highlight::{current_page_name, link_matches, set_active_navigation_link};

fn page_with_navbar() -> Document {
    let mut doc = Document::parse(r#"<html><body><div id="header-component"></div></body></html>"#);
    load_fallback_component(&mut doc, Component::Header.element_id());
    doc
}

fn active_hrefs(doc: &Document) -> Vec<String> {
    doc.query_all_by_class("nav-link")
        .into_iter()
        .filter(|&link| doc.has_class(link, "active"))
        .map(|link| doc.attribute(link, "href").unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// Current page name
// ============================================================================

#[test]
fn test_current_page_name_empty_path() {
    assert_eq!(current_page_name(""), "index.html");
}

#[test]
fn test_current_page_name_root() {
    assert_eq!(current_page_name("/"), "index.html");
}

#[test]
fn test_current_page_name_trailing_slash() {
    assert_eq!(current_page_name("/blog/"), "index.html");
}

#[test]
fn test_current_page_name_simple() {
    assert_eq!(current_page_name("/about.html"), "about.html");
}

#[test]
fn test_current_page_name_nested() {
    assert_eq!(current_page_name("/site/blog/my-post.html"), "my-post.html");
}

#[test]
fn test_current_page_name_without_leading_slash() {
    assert_eq!(current_page_name("projects.html"), "projects.html");
}

// ============================================================================
// Matching rules
// ============================================================================

#[test]
fn test_link_matches_exact_page() {
    assert!(link_matches("about.html", "/about.html"));
    assert!(!link_matches("about.html", "/projects.html"));
}

#[test]
fn test_link_matches_blog_posts() {
    assert!(link_matches("blog.html", "blog/post1.html"));
    assert!(link_matches("blog.html", "/blog/2024/deep/post.html"));
    assert!(!link_matches("index.html", "/blog/post1.html"));
}

#[test]
fn test_link_matches_blog_requires_directory() {
    assert!(!link_matches("blog.html", "/weblog.html"));
    assert!(!link_matches("blog.html", "/blogroll.html"));
}

// ============================================================================
// Marking links
// ============================================================================

#[test]
fn test_each_known_page_marks_exactly_its_link() {
    for page in ["index.html", "blog.html", "projects.html", "about.html"] {
        let mut doc = page_with_navbar();
        let active = set_active_navigation_link(&mut doc, &format!("/{}", page));

        assert!(active.is_some(), "no link marked for {}", page);
        assert_eq!(active_hrefs(&doc), vec![page.to_string()]);
    }
}

#[test]
fn test_empty_path_marks_home() {
    let mut doc = page_with_navbar();
    set_active_navigation_link(&mut doc, "");
    assert_eq!(active_hrefs(&doc), vec!["index.html"]);
}

#[test]
fn test_blog_post_marks_blog_link() {
    let mut doc = page_with_navbar();
    set_active_navigation_link(&mut doc, "blog/my-post.html");
    assert_eq!(active_hrefs(&doc), vec!["blog.html"]);
}

#[test]
fn test_unknown_page_marks_nothing() {
    let mut doc = page_with_navbar();
    let active = set_active_navigation_link(&mut doc, "/contact.html");
    assert!(active.is_none());
    assert!(active_hrefs(&doc).is_empty());
}

#[test]
fn test_previous_marker_is_cleared() {
    let mut doc = page_with_navbar();
    set_active_navigation_link(&mut doc, "/about.html");
    set_active_navigation_link(&mut doc, "/projects.html");
    assert_eq!(active_hrefs(&doc), vec!["projects.html"]);
}

#[test]
fn test_stale_markup_marker_is_cleared() {
    let mut doc = Document::parse(
        r#"<ul><li><a class="nav-link active" href="about.html">A</a></li><li><a class="nav-link" href="index.html">H</a></li></ul>"#,
    );
    set_active_navigation_link(&mut doc, "/");
    assert_eq!(active_hrefs(&doc), vec!["index.html"]);
}

#[test]
fn test_duplicate_hrefs_last_one_wins() {
    let mut doc = Document::parse(
        r#"<nav><a id="top" class="nav-link" href="about.html">About</a><a id="bottom" class="nav-link" href="about.html">About us</a></nav>"#,
    );
    let active = set_active_navigation_link(&mut doc, "/about.html").unwrap();

    assert_eq!(doc.attribute(active, "id"), Some("bottom"));
    assert_eq!(active_hrefs(&doc).len(), 1);
}

#[test]
fn test_link_without_href_is_ignored() {
    let mut doc = Document::parse(r#"<nav><a class="nav-link">Home</a></nav>"#);
    assert!(set_active_navigation_link(&mut doc, "").is_none());
}
