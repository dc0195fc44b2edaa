// Built-in header and footer markup, used whenever a fragment cannot be fetched

use crate::dom::Document;
use serde::{Deserialize, Serialize};
use std::fmt;

const HEADER_FALLBACK: &str = r#"<nav class="navbar">
    <div class="nav-container">
        <div class="nav-logo">
            <a href="index.html">Akshay Naik</a>
        </div>
        <ul class="nav-menu">
            <li><a href="index.html" class="nav-link">Home</a></li>
            <li><a href="blog.html" class="nav-link">Blog</a></li>
            <li><a href="projects.html" class="nav-link">Projects</a></li>
            <li><a href="about.html" class="nav-link">About</a></li>
        </ul>
        <div class="hamburger">
            <span class="bar"></span>
            <span class="bar"></span>
            <span class="bar"></span>
        </div>
    </div>
</nav>"#;

const FOOTER_FALLBACK: &str = r#"<footer class="footer">
    <div class="container">
        <div class="footer-content">
            <div class="social-links">
                <a href="mailto:inbox.akshaynaik@gmail.com" class="social-link">
                    <i class="fas fa-envelope"></i>
                </a>
                <a href="https://twitter.com/_akshaynaik" target="_blank" class="social-link">
                    <i class="fab fa-twitter"></i>
                </a>
                <a href="https://linkedin.com/in/akshayrajendranaik" target="_blank" class="social-link">
                    <i class="fab fa-linkedin"></i>
                </a>
                <a href="https://github.com/nakshay" target="_blank" class="social-link">
                    <i class="fab fa-github"></i>
                </a>
            </div>
        </div>
    </div>
</footer>"#;

/// A shared page fragment and the placeholder it is injected into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Header,
    Footer,
}

impl Component {
    pub const ALL: [Component; 2] = [Component::Header, Component::Footer];

    /// Id of the placeholder element
    pub fn element_id(self) -> &'static str {
        match self {
            Component::Header => "header-component",
            Component::Footer => "footer-component",
        }
    }

    /// File name appended to a candidate base path
    pub fn file_name(self) -> &'static str {
        match self {
            Component::Header => "header.html",
            Component::Footer => "footer.html",
        }
    }

    pub fn fallback_markup(self) -> &'static str {
        match self {
            Component::Header => HEADER_FALLBACK,
            Component::Footer => FOOTER_FALLBACK,
        }
    }

    pub fn from_element_id(element_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|component| component.element_id() == element_id)
    }

    /// Accepts the short name (`header`) or the element id (`header-component`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "header" => Some(Component::Header),
            "footer" => Some(Component::Footer),
            other => Self::from_element_id(other),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Header => write!(f, "header"),
            Component::Footer => write!(f, "footer"),
        }
    }
}

/// Inject the built-in markup for `element_id`.
///
/// Unknown ids and missing placeholders are ignored; the return value says whether
/// anything was written.
pub fn load_fallback_component(document: &mut Document, element_id: &str) -> bool {
    match Component::from_element_id(element_id) {
        Some(component) => document.set_inner_html_by_id(element_id, component.fallback_markup()),
        None => false,
    }
}
