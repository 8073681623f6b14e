// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM Node types

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};

/// Shared node storage for one document
pub(crate) type NodeStore = Arc<RwLock<HashMap<NodeId, NodeData>>>;

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Unique node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a new unique node ID
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Node type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Document node
    Document,
    /// Element node
    Element,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// Document type node (<!DOCTYPE>)
    DocumentType,
}

/// Internal node data
#[derive(Debug)]
pub struct NodeData {
    pub node_type: NodeType,
    /// Lowercase tag name (elements only)
    pub tag_name: Option<String>,
    /// Character data (text and comments)
    pub text_content: Option<String>,
    /// Attributes in insertion order, names lowercased
    pub attributes: Vec<(String, String)>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl NodeData {
    fn with_type(node_type: NodeType) -> Self {
        Self {
            node_type,
            tag_name: None,
            text_content: None,
            attributes: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a new element node data
    pub fn element(tag_name: impl Into<String>) -> Self {
        let mut data = Self::with_type(NodeType::Element);
        data.tag_name = Some(tag_name.into().to_lowercase());
        data
    }

    /// Create a new text node data
    pub fn text(content: impl Into<String>) -> Self {
        let mut data = Self::with_type(NodeType::Text);
        data.text_content = Some(content.into());
        data
    }

    /// Create a new comment node data
    pub fn comment(content: impl Into<String>) -> Self {
        let mut data = Self::with_type(NodeType::Comment);
        data.text_content = Some(content.into());
        data
    }

    /// Create a new document node data
    pub fn document() -> Self {
        Self::with_type(NodeType::Document)
    }

    /// Create a new doctype node data
    pub fn doctype() -> Self {
        Self::with_type(NodeType::DocumentType)
    }

    /// Look up an attribute by lowercase name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn set_attribute(&mut self, name: String, value: String) {
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }
}

/// A reference to a node in the DOM tree
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    nodes: NodeStore,
}

impl Node {
    pub(crate) fn new(id: NodeId, nodes: NodeStore) -> Self {
        Self { id, nodes }
    }

    pub(crate) fn store(&self) -> NodeStore {
        self.nodes.clone()
    }

    /// Check whether two handles point into the same document
    pub fn same_document(&self, other: &Node) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }

    /// Get the node type
    pub fn node_type(&self) -> NodeType {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| n.node_type)
            .unwrap_or(NodeType::Element)
    }

    /// Get the tag name (uppercase, like browsers)
    pub fn tag_name(&self) -> Option<String> {
        self.local_name().map(|t| t.to_uppercase())
    }

    /// Get the tag name in lowercase
    pub fn local_name(&self) -> Option<String> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.tag_name.clone())
    }

    /// Get text content of this node and its descendants
    pub fn text_content(&self) -> String {
        let nodes = self.nodes.read();
        let mut out = String::new();
        collect_text(&nodes, self.id, &mut out);
        out
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.attribute(&name.to_lowercase()).map(String::from))
    }

    /// Set an attribute value
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        if let Some(node) = self.nodes.write().get_mut(&self.id) {
            node.set_attribute(name.into().to_lowercase(), value.into());
        }
    }

    /// Get parent node
    pub fn parent(&self) -> Option<Node> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.parent)
            .map(|id| Node::new(id, self.nodes.clone()))
    }

    /// Get child nodes
    pub fn children(&self) -> Vec<Node> {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| {
                n.children
                    .iter()
                    .map(|&id| Node::new(id, self.nodes.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of child nodes
    pub fn child_count(&self) -> usize {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| n.children.len())
            .unwrap_or(0)
    }

    /// Check if `other` is this node or one of its descendants
    pub fn contains(&self, other: &Node) -> bool {
        if !self.same_document(other) {
            return false;
        }
        let nodes = self.nodes.read();
        let mut current = Some(other.id);
        while let Some(id) = current {
            if id == self.id {
                return true;
            }
            current = nodes.get(&id).and_then(|n| n.parent);
        }
        false
    }

    /// IDs of this node and all its descendants, in tree order
    pub fn subtree_ids(&self) -> Vec<NodeId> {
        let nodes = self.nodes.read();
        let mut out = Vec::new();
        let mut stack = vec![self.id];
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(data) = nodes.get(&id) {
                stack.extend(data.children.iter().rev().copied());
            }
        }
        out
    }

    /// Append a child node, detaching it from its current parent first
    pub fn append_child(&self, child: &Node) -> Result<()> {
        if !self.same_document(child) {
            return Err(Error::dom("cannot append a node from another document"));
        }
        if child.contains(self) {
            return Err(Error::dom("cannot append a node into its own subtree"));
        }

        let mut nodes = self.nodes.write();

        let old_parent = nodes.get(&child.id).and_then(|d| d.parent);
        if let Some(pid) = old_parent {
            if let Some(parent) = nodes.get_mut(&pid) {
                parent.children.retain(|&id| id != child.id);
            }
        }

        match nodes.get_mut(&child.id) {
            Some(data) => data.parent = Some(self.id),
            None => return Err(Error::dom("child node no longer exists")),
        }

        match nodes.get_mut(&self.id) {
            Some(parent) => parent.children.push(child.id),
            None => return Err(Error::dom("parent node no longer exists")),
        }

        Ok(())
    }

    /// Remove a direct child node
    pub fn remove_child(&self, child: &Node) -> Result<()> {
        let mut nodes = self.nodes.write();

        let is_child = nodes
            .get(&child.id)
            .map(|d| d.parent == Some(self.id))
            .unwrap_or(false);
        if !is_child || !Arc::ptr_eq(&self.nodes, &child.nodes) {
            return Err(Error::dom("node to remove is not a child of this node"));
        }

        if let Some(parent) = nodes.get_mut(&self.id) {
            parent.children.retain(|&id| id != child.id);
        }
        if let Some(data) = nodes.get_mut(&child.id) {
            data.parent = None;
        }

        Ok(())
    }

    /// Get outer HTML
    pub fn outer_html(&self) -> String {
        let nodes = self.nodes.read();
        let mut out = String::new();
        serialize(&nodes, self.id, &mut out);
        out
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn collect_text(nodes: &HashMap<NodeId, NodeData>, id: NodeId, out: &mut String) {
    let Some(node) = nodes.get(&id) else {
        return;
    };
    match node.node_type {
        NodeType::Text => out.push_str(node.text_content.as_deref().unwrap_or("")),
        NodeType::Element | NodeType::Document => {
            for &child in &node.children {
                collect_text(nodes, child, out);
            }
        }
        NodeType::Comment | NodeType::DocumentType => {}
    }
}

fn serialize(nodes: &HashMap<NodeId, NodeData>, id: NodeId, out: &mut String) {
    let Some(node) = nodes.get(&id) else {
        return;
    };
    match node.node_type {
        NodeType::Text => out.push_str(&text_escape(node.text_content.as_deref().unwrap_or(""))),
        NodeType::Comment => {
            out.push_str("<!--");
            out.push_str(node.text_content.as_deref().unwrap_or(""));
            out.push_str("-->");
        }
        NodeType::DocumentType => out.push_str("<!DOCTYPE html>"),
        NodeType::Document => {
            for &child in &node.children {
                serialize(nodes, child, out);
            }
        }
        NodeType::Element => {
            let tag = node.tag_name.as_deref().unwrap_or("div");
            out.push('<');
            out.push_str(tag);
            for (k, v) in &node.attributes {
                out.push(' ');
                out.push_str(k);
                if !v.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&attr_escape(v));
                    out.push('"');
                }
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag) {
                return;
            }

            for &child in &node.children {
                serialize(nodes, child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn attr_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

fn text_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
