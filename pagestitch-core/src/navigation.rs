// Mobile navigation toggle
//
// Handlers are modelled as a binding set plus a click dispatcher. Dispatch walks
// from the click target up to the root the way a bubbling DOM event would, then
// runs the document-level "click outside" handler.

use crate::dom::{Document, NodeId};

pub const ACTIVE_CLASS: &str = "active";
pub const TOGGLE_CLASS: &str = "hamburger";
pub const MENU_CLASS: &str = "nav-menu";
pub const NAV_LINK_CLASS: &str = "nav-link";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationBindings {
    toggle: NodeId,
    menu: NodeId,
    links: Vec<NodeId>,
}

impl NavigationBindings {
    /// Bind to the first `.hamburger` and `.nav-menu` in the document.
    ///
    /// Returns `None` when either is missing. Links are captured as they exist now;
    /// links added later have no handler.
    pub fn attach(document: &Document) -> Option<Self> {
        let toggle = document.query_by_class(TOGGLE_CLASS)?;
        let menu = document.query_by_class(MENU_CLASS)?;
        let links = document.query_all_by_class(NAV_LINK_CLASS);

        Some(Self {
            toggle,
            menu,
            links,
        })
    }

    pub fn toggle(&self) -> NodeId {
        self.toggle
    }

    pub fn menu(&self) -> NodeId {
        self.menu
    }

    pub fn links(&self) -> &[NodeId] {
        &self.links
    }

    pub fn is_open(&self, document: &Document) -> bool {
        document.has_class(self.menu, ACTIVE_CLASS)
    }

    pub fn close(&self, document: &mut Document) {
        document.remove_class(self.toggle, ACTIVE_CLASS);
        document.remove_class(self.menu, ACTIVE_CLASS);
    }

    /// Deliver a click on `target`
    pub fn dispatch_click(&self, document: &mut Document, target: NodeId) {
        let mut current = Some(target);
        while let Some(node) = current {
            if self.links.contains(&node) {
                self.close(document);
            }
            if node == self.toggle {
                document.toggle_class(self.toggle, ACTIVE_CLASS);
                document.toggle_class(self.menu, ACTIVE_CLASS);
            }
            current = document.parent(node);
        }

        if !document.contains(self.toggle, target) && !document.contains(self.menu, target) {
            self.close(document);
        }
    }
}
