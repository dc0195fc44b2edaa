// Tests for the built-in fragments

use pagestitch_core::dom::Document;
use pagestitch_core::fallback::{Component, load_fallback_component};

const PAGE: &str = r#"<html><body><div id="header-component"></div><div id="footer-component"></div></body></html>"#;

#[test]
fn test_component_element_ids() {
    assert_eq!(Component::Header.element_id(), "header-component");
    assert_eq!(Component::Footer.element_id(), "footer-component");
}

#[test]
fn test_component_file_names() {
    assert_eq!(Component::Header.file_name(), "header.html");
    assert_eq!(Component::Footer.file_name(), "footer.html");
}

#[test]
fn test_from_element_id() {
    assert_eq!(Component::from_element_id("header-component"), Some(Component::Header));
    assert_eq!(Component::from_element_id("footer-component"), Some(Component::Footer));
    assert_eq!(Component::from_element_id("sidebar-component"), None);
}

#[test]
fn test_from_name_accepts_short_and_element_names() {
    assert_eq!(Component::from_name("header"), Some(Component::Header));
    assert_eq!(Component::from_name("FOOTER"), Some(Component::Footer));
    assert_eq!(Component::from_name("footer-component"), Some(Component::Footer));
    assert_eq!(Component::from_name("nav"), None);
}

#[test]
fn test_header_fallback_content() {
    let markup = Component::Header.fallback_markup();
    assert!(markup.contains("Akshay Naik"));
    for href in ["index.html", "blog.html", "projects.html", "about.html"] {
        assert!(markup.contains(&format!(r#"<a href="{}" class="nav-link">"#, href)));
    }
    assert!(markup.contains(r#"class="hamburger""#));
}

#[test]
fn test_footer_fallback_content() {
    let markup = Component::Footer.fallback_markup();
    assert!(markup.contains("mailto:inbox.akshaynaik@gmail.com"));
    assert!(markup.contains("https://github.com/nakshay"));
    assert_eq!(markup.matches("social-link\"").count(), 4);
}

#[test]
fn test_fallback_markup_survives_injection_unchanged() {
    for component in Component::ALL {
        let markup = component.fallback_markup();
        assert_eq!(Document::normalize_fragment(markup), markup);
    }
}

#[test]
fn test_load_fallback_component_injects_markup() {
    let mut doc = Document::parse(PAGE);

    assert!(load_fallback_component(&mut doc, "header-component"));
    assert!(load_fallback_component(&mut doc, "footer-component"));

    let header = doc.get_element_by_id("header-component").unwrap();
    let footer = doc.get_element_by_id("footer-component").unwrap();
    assert!(doc.text_content(header).contains("Akshay Naik"));
    assert_eq!(doc.query_all_by_class("nav-link").len(), 4);
    assert_eq!(
        doc.inner_html(footer),
        Document::normalize_fragment(Component::Footer.fallback_markup())
    );
}

#[test]
fn test_load_fallback_component_unknown_id_has_no_effect() {
    let mut doc = Document::parse(PAGE);
    let before = doc.to_html();

    assert!(!load_fallback_component(&mut doc, "sidebar-component"));
    assert_eq!(doc.to_html(), before);
}

#[test]
fn test_load_fallback_component_missing_placeholder() {
    let mut doc = Document::parse("<html><body><p>no placeholders</p></body></html>");
    assert!(!load_fallback_component(&mut doc, "header-component"));
    assert!(doc.query_by_class("navbar").is_none());
}
