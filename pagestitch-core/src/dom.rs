// Editable page document
//
// Wraps a scraper `Html` and edits its ego_tree in place. Serialization goes
// through html5ever's serializer, so parsing and writing a page is lossless.

use ego_tree::NodeRef;
use html5ever::{Attribute, LocalName, QualName, ns};
use scraper::node::Element;
use scraper::{ElementRef, Html, Node};

pub use ego_tree::NodeId;

/// An HTML document that supports `innerHTML` replacement and class list edits.
///
/// Node ids come from the underlying tree. An id that does not belong to this
/// document is treated as a missing node: lookups return `None` and edits are
/// ignored. Replaced nodes are detached but keep their ids.
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document containing only the root node
    pub fn new() -> Self {
        Self {
            html: Html::new_document(),
        }
    }

    /// Parse a complete HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Parse `markup` as a body fragment and serialize it again.
    ///
    /// This is what `inner_html` returns after `set_inner_html(markup)`.
    pub fn normalize_fragment(markup: &str) -> String {
        Html::parse_fragment(markup).root_element().inner_html()
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    pub fn root(&self) -> NodeId {
        self.html.tree.root().id()
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, Node>> {
        self.html.tree.get(id)
    }

    pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.node(id).and_then(ElementRef::wrap)
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|element| element.value().name())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent().map(|parent| parent.id())
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id)
            .map(|node| node.children().map(|child| child.id()).collect())
            .unwrap_or_default()
    }

    /// `Node.contains`: true when `node` is `ancestor` or lies beneath it
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.node(node).is_some_and(|node| {
            node.id() == ancestor || node.ancestors().any(|parent| parent.id() == ancestor)
        })
    }

    /// Elements reachable from the root, in document order
    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.tree.root().descendants().filter_map(ElementRef::wrap)
    }

    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.elements()
            .find(|element| element.attr("id") == Some(element_id))
            .map(|element| element.id())
    }

    /// First element in document order carrying `class`
    pub fn query_by_class(&self, class: &str) -> Option<NodeId> {
        self.elements()
            .find(|element| has_class(element, class))
            .map(|element| element.id())
    }

    pub fn query_all_by_class(&self, class: &str) -> Vec<NodeId> {
        self.elements()
            .filter(|element| has_class(element, class))
            .map(|element| element.id())
            .collect()
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attr(name)
    }

    /// Set or overwrite an attribute. Ignored for non-element nodes.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(mut node) = self.html.tree.get_mut(id) else {
            return;
        };
        let Node::Element(element) = node.value() else {
            return;
        };

        let key = QualName::new(None, ns!(), LocalName::from(name));
        let mut attrs: Vec<Attribute> = element
            .attrs
            .iter()
            .map(|(name, value)| Attribute {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();

        match attrs.iter_mut().find(|attr| attr.name == key) {
            Some(attr) => attr.value = value.into(),
            None => attrs.push(Attribute {
                name: key,
                value: value.into(),
            }),
        }

        // scraper caches the id and class list, so rebuild rather than patch attrs
        *element = Element::new(element.name.clone(), attrs);
    }

    pub fn classes(&self, id: NodeId) -> Vec<&str> {
        self.attribute(id, "class")
            .map(|value| value.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).contains(&class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.element(id).is_none() || self.has_class(id, class) {
            return;
        }
        let mut classes: Vec<String> = self.classes(id).into_iter().map(String::from).collect();
        classes.push(class.to_string());
        self.set_attribute(id, "class", &classes.join(" "));
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if !self.has_class(id, class) {
            return;
        }
        let kept: Vec<String> = self
            .classes(id)
            .into_iter()
            .filter(|c| *c != class)
            .map(String::from)
            .collect();
        self.set_attribute(id, "class", &kept.join(" "));
    }

    /// Returns whether the class is present afterwards
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            self.has_class(id, class)
        }
    }

    /// Replace the children of `id` with the nodes parsed from `markup`.
    ///
    /// Returns false, leaving the document untouched, when `id` is not a node of
    /// this document.
    pub fn set_inner_html(&mut self, id: NodeId, markup: &str) -> bool {
        if self.node(id).is_none() {
            return false;
        }

        for child in self.children(id) {
            if let Some(mut node) = self.html.tree.get_mut(child) {
                node.detach();
            }
        }

        let fragment = Html::parse_fragment(markup);
        // parse_fragment wraps the content in a synthetic <html> element
        append_copies(&mut self.html, id, *fragment.root_element());
        true
    }

    /// `getElementById(element_id).innerHTML = markup`; false if no such element
    pub fn set_inner_html_by_id(&mut self, element_id: &str, markup: &str) -> bool {
        match self.get_element_by_id(element_id) {
            Some(target) => self.set_inner_html(target, markup),
            None => false,
        }
    }

    pub fn text_content(&self, id: NodeId) -> String {
        self.node(id)
            .map(|node| {
                node.descendants()
                    .filter_map(|descendant| descendant.value().as_text())
                    .map(|text| &**text)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn inner_html(&self, id: NodeId) -> String {
        if id == self.root() {
            return self.to_html();
        }
        self.element(id)
            .map(|element| element.inner_html())
            .unwrap_or_default()
    }

    pub fn outer_html(&self, id: NodeId) -> String {
        self.element(id)
            .map(|element| element.html())
            .unwrap_or_default()
    }

    /// Serialize the whole document
    pub fn to_html(&self) -> String {
        self.html.html()
    }
}

fn has_class(element: &ElementRef<'_>, class: &str) -> bool {
    element
        .attr("class")
        .is_some_and(|value| value.split_ascii_whitespace().any(|c| c == class))
}

/// Append a copy of every child of `source` beneath `parent`
fn append_copies(html: &mut Html, parent: NodeId, source: NodeRef<'_, Node>) {
    for child in source.children() {
        let copied = match html.tree.get_mut(parent) {
            Some(mut node) => node.append(child.value().clone()).id(),
            None => return,
        };
        append_copies(html, copied, child);
    }
}
