// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Element-specific DOM operations

use super::node::{Node, NodeId, NodeStore, NodeType};
use super::style::StyleDeclaration;
use crate::error::Result;

/// Element node with extended operations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    pub node: Node,
}

impl Element {
    /// Wrap a node, returning `None` for non-element nodes
    pub fn new(node: Node) -> Option<Self> {
        if node.node_type() == NodeType::Element {
            Some(Self { node })
        } else {
            None
        }
    }

    pub(crate) fn from_id(id: NodeId, nodes: NodeStore) -> Option<Self> {
        Self::new(Node::new(id, nodes))
    }

    /// Get the tag name (uppercase)
    pub fn tag_name(&self) -> String {
        self.node.tag_name().unwrap_or_default()
    }

    /// Get local name (lowercase)
    pub fn local_name(&self) -> String {
        self.node.local_name().unwrap_or_default()
    }

    /// Get element ID
    pub fn id(&self) -> Option<String> {
        self.node.get_attribute("id")
    }

    /// Get the `src` attribute
    pub fn src(&self) -> Option<String> {
        self.node.get_attribute("src")
    }

    /// Parsed inline style
    pub fn style(&self) -> StyleDeclaration {
        self.node
            .get_attribute("style")
            .map(|s| StyleDeclaration::parse(&s))
            .unwrap_or_default()
    }

    /// Get parent element
    pub fn parent_element(&self) -> Option<Element> {
        self.node.parent().and_then(Element::new)
    }

    /// Get child elements (only element nodes)
    pub fn children(&self) -> Vec<Element> {
        self.node
            .children()
            .into_iter()
            .filter_map(Element::new)
            .collect()
    }

    /// Get first child element
    pub fn first_element_child(&self) -> Option<Element> {
        self.children().into_iter().next()
    }

    /// Append a child element
    pub fn append(&self, child: &Element) -> Result<()> {
        self.node.append_child(&child.node)
    }

    /// Remove a child element
    pub fn remove(&self, child: &Element) -> Result<()> {
        self.node.remove_child(&child.node)
    }

    /// Check if this element is an inclusive ancestor of another
    pub fn contains(&self, other: &Element) -> bool {
        self.node.contains(&other.node)
    }

    /// Descendant elements with the given tag, in tree order
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<Element> {
        let tag = tag.to_lowercase();
        self.node
            .subtree_ids()
            .into_iter()
            .skip(1)
            .filter_map(|id| Element::from_id(id, self.node_store()))
            .filter(|e| e.local_name() == tag)
            .collect()
    }

    fn node_store(&self) -> NodeStore {
        self.node.store()
    }
}

impl std::ops::Deref for Element {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}
