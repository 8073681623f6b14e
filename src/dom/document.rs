// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document representation

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use url::Url;

use super::element::Element;
use super::node::{Node, NodeData, NodeId, NodeStore, NodeType};

/// HTML Document representation
#[derive(Debug, Clone)]
pub struct Document {
    /// Document URL, used as the base for relative URLs
    pub url: Option<Url>,
    title: Arc<RwLock<String>>,
    root_id: NodeId,
    pub(crate) nodes: NodeStore,
    document_element_id: Option<NodeId>,
    head_id: Option<NodeId>,
    body_id: Option<NodeId>,
}

impl Document {
    /// Create a new empty document (no `<html>`, no body)
    pub fn new() -> Self {
        let root_id = NodeId::new();
        let mut nodes = HashMap::new();
        nodes.insert(root_id, NodeData::document());

        Self {
            url: None,
            title: Arc::new(RwLock::new(String::new())),
            root_id,
            nodes: Arc::new(RwLock::new(nodes)),
            document_element_id: None,
            head_id: None,
            body_id: None,
        }
    }

    /// Create an empty document with URL
    pub fn with_url(url: Url) -> Self {
        let mut doc = Self::new();
        doc.url = Some(url);
        doc
    }

    /// Create `<html><head></head><body></body></html>`
    pub fn blank() -> Self {
        let mut doc = Self::new();
        let html = doc.create_element("html");
        let head = doc.create_element("head");
        let body = doc.create_element("body");

        // detached nodes of this document: no cycle, no foreign store
        const FRESH: &str = "fresh nodes of one document always attach";
        doc.root().append_child(&html).expect(FRESH);
        html.append(&head).expect(FRESH);
        html.append(&body).expect(FRESH);

        doc.set_elements(Some(html.id), Some(head.id), Some(body.id));
        doc
    }

    /// Blank document with URL
    pub fn blank_with_url(url: Url) -> Self {
        let mut doc = Self::blank();
        doc.url = Some(url);
        doc
    }

    /// Get document URL as string
    pub fn url_string(&self) -> Option<String> {
        self.url.as_ref().map(|u| u.to_string())
    }

    pub fn title(&self) -> String {
        self.title.read().clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        *self.title.write() = title.into();
    }

    /// Get the document element (<html>)
    pub fn document_element(&self) -> Option<Element> {
        self.document_element_id
            .and_then(|id| Element::from_id(id, self.nodes.clone()))
    }

    /// Get the <head> element
    pub fn head(&self) -> Option<Element> {
        self.head_id
            .and_then(|id| Element::from_id(id, self.nodes.clone()))
    }

    /// Get the <body> element
    pub fn body(&self) -> Option<Element> {
        self.body_id
            .and_then(|id| Element::from_id(id, self.nodes.clone()))
    }

    /// Set document element IDs (called during parsing)
    pub(crate) fn set_elements(
        &mut self,
        document_element: Option<NodeId>,
        head: Option<NodeId>,
        body: Option<NodeId>,
    ) {
        self.document_element_id = document_element;
        self.head_id = head;
        self.body_id = body;
    }

    /// Get the root node
    pub fn root(&self) -> Node {
        Node::new(self.root_id, self.nodes.clone())
    }

    /// Check whether a node is connected to this document's tree
    pub fn is_connected(&self, node: &Node) -> bool {
        self.root().contains(node)
    }

    /// Create a new detached element
    pub fn create_element(&self, tag: &str) -> Element {
        let id = NodeId::new();
        self.nodes.write().insert(id, NodeData::element(tag));
        Element {
            node: Node::new(id, self.nodes.clone()),
        }
    }

    /// All connected elements in tree order
    fn connected_elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.root()
            .subtree_ids()
            .into_iter()
            .filter_map(|id| Element::from_id(id, self.nodes.clone()))
    }

    /// Get the first connected element with the given `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.connected_elements()
            .find(|e| e.id().as_deref() == Some(id))
    }

    /// Get connected elements by tag name
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<Element> {
        let tag = tag.to_lowercase();
        self.connected_elements()
            .filter(|e| e.local_name() == tag)
            .collect()
    }

    /// Number of nodes held by the document, connected or not
    pub fn node_count(&self) -> usize {
        self.nodes.read().len()
    }

    /// Drop a detached subtree from node storage
    pub(crate) fn release(&self, node: &Node) {
        if self.is_connected(node) {
            return;
        }
        let ids = node.subtree_ids();
        let mut nodes = self.nodes.write();
        for id in ids {
            if nodes.get(&id).map(|n| n.node_type) != Some(NodeType::Document) {
                nodes.remove(&id);
            }
        }
    }

    /// Get the document's HTML
    pub fn outer_html(&self) -> String {
        self.root().outer_html()
    }

    /// Get all text content
    pub fn text_content(&self) -> String {
        self.root().text_content()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_document_creation() {
        let doc = Document::new();
        assert!(doc.url.is_none());
        assert!(doc.title().is_empty());
        assert!(doc.body().is_none());
    }

    #[test]
    fn test_blank_document() {
        let doc = Document::blank();
        assert!(doc.body().is_some());
        assert_eq!(
            doc.outer_html(),
            "<html><head></head><body></body></html>"
        );
    }

    #[test]
    fn test_blank_document_tree() {
        let doc = Document::blank();
        let html = doc.document_element().unwrap();
        let head = doc.head().unwrap();
        let body = doc.body().unwrap();

        assert_eq!(html.parent(), Some(doc.root()));
        assert_eq!(head.parent_element(), Some(html.clone()));
        assert_eq!(body.parent_element(), Some(html.clone()));
        assert_eq!(html.children(), vec![head, body.clone()]);
        assert!(doc.is_connected(&body));
    }

    #[test]
    fn test_create_element_is_detached() {
        let doc = Document::blank();
        let div = doc.create_element("div");
        div.set_attribute("id", "floating");

        assert_eq!(div.tag_name(), "DIV");
        assert!(!doc.is_connected(&div));
        assert!(doc.get_element_by_id("floating").is_none());

        doc.body().unwrap().append(&div).unwrap();
        assert!(doc.is_connected(&div));
        assert!(doc.get_element_by_id("floating").is_some());
    }

    #[test]
    fn test_release_detached_subtree() {
        let doc = Document::blank();
        let before = doc.node_count();
        let div = doc.create_element("div");
        let frame = doc.create_element("iframe");
        div.append(&frame).unwrap();
        assert_eq!(doc.node_count(), before + 2);

        doc.release(&div);
        assert_eq!(doc.node_count(), before);
    }

    #[test]
    fn test_get_element_by_id() {
        let doc = parse_html("<html><body><div id='test'>Hello</div></body></html>").unwrap();
        let elem = doc.get_element_by_id("test");
        assert!(elem.is_some());
        assert_eq!(elem.unwrap().text_content(), "Hello");
    }
}
