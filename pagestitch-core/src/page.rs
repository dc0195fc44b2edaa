use crate::dom::{Document, NodeId};
use crate::highlight::set_active_navigation_link;
use crate::navigation::NavigationBindings;
use url::Url;

/// A parsed page and the location it was loaded from
#[derive(Debug, Clone)]
pub struct Page {
    document: Document,
    location: Url,
    navigation: Option<NavigationBindings>,
}

impl Page {
    pub fn new(location: Url, document: Document) -> Self {
        Self {
            document,
            location,
            navigation: None,
        }
    }

    pub fn parse(location: Url, html: &str) -> Self {
        Self::new(location, Document::parse(html))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn navigation(&self) -> Option<&NavigationBindings> {
        self.navigation.as_ref()
    }

    /// Bind the menu toggle (if present) and highlight the current page's link.
    ///
    /// Calling this again replaces the previous bindings instead of stacking a
    /// second set of handlers.
    pub fn initialize_navigation(&mut self) -> Option<NodeId> {
        self.navigation = NavigationBindings::attach(&self.document);
        set_active_navigation_link(&mut self.document, self.location.path())
    }

    /// Deliver a click to the bound handlers. No-op before navigation is initialized.
    pub fn click(&mut self, target: NodeId) {
        if let Some(navigation) = &self.navigation {
            navigation.dispatch_click(&mut self.document, target);
        }
    }

    pub fn to_html(&self) -> String {
        self.document.to_html()
    }
}
