//! Owned element tree for ship definitions.

use std::collections::BTreeMap;

/// A single XML element of a ship definition.
///
/// Only element children are kept; comments, processing instructions and
/// inter-element whitespace are dropped while building the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShipNode {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    children: Vec<ShipNode>,
}

impl ShipNode {
    /// Create an element with no attributes, text or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder helper setting the element text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder helper setting an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder helper appending a child element.
    pub fn with_child(mut self, child: ShipNode) -> Self {
        self.children.push(child);
        self
    }

    /// Convert a parsed `roxmltree` element into an owned tree.
    pub fn from_xml(node: roxmltree::Node<'_, '_>) -> Self {
        let attributes = node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect();
        let children = node
            .children()
            .filter(roxmltree::Node::is_element)
            .map(ShipNode::from_xml)
            .collect();
        Self {
            tag: qualified_tag(node.tag_name()),
            attributes,
            text: leading_text(node),
            children,
        }
    }

    /// Tag name of the element, `{namespace}local` when namespaced.
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[ShipNode] {
        &self.children
    }

    /// Text preceding the first child, `None` when the element has none.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Look up an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Whether the element has no child elements.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of leaf elements below this one, excluding itself.
    pub fn leaf_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| {
                if child.is_leaf() {
                    1
                } else {
                    child.leaf_count()
                }
            })
            .sum()
    }
}

fn qualified_tag(name: roxmltree::ExpandedName<'_, '_>) -> String {
    match name.namespace() {
        Some(namespace) => format!("{{{namespace}}}{}", name.name()),
        None => name.name().to_string(),
    }
}

/// Text nodes before the first child element, joined; comments in between are skipped.
fn leading_text(node: roxmltree::Node<'_, '_>) -> Option<String> {
    let mut texts = node
        .children()
        .take_while(|child| !child.is_element())
        .filter(roxmltree::Node::is_text)
        .filter_map(|child| child.text())
        .peekable();
    texts.peek()?;
    Some(texts.collect())
}
