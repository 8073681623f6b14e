// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML parser using html5ever

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use url::Url;

use super::document::Document;
use super::node::{NodeData, NodeId};
use crate::error::{Error, Result};

/// Parse HTML string into a Document
pub fn parse_html(html: &str) -> Result<Document> {
    parse_html_with_url(html, None)
}

/// Parse HTML string with a base URL
///
/// html5ever always synthesizes `<html>`, `<head>` and `<body>`, so parsed
/// documents have a body even for fragments.
pub fn parse_html_with_url(html: &str, url: Option<Url>) -> Result<Document> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: false,
            ..Default::default()
        },
        ..Default::default()
    };

    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| Error::HtmlParse(e.to_string()))?;

    let mut doc = match url {
        Some(u) => Document::with_url(u),
        None => Document::new(),
    };

    let root_id = doc.root().id;
    let mut converter = DomConverter {
        doc: &doc,
        html: None,
        head: None,
        body: None,
    };
    for child in dom.document.children.borrow().iter() {
        converter.convert_node(child, root_id);
    }
    let (html_id, head_id, body_id) = (converter.html, converter.head, converter.body);
    doc.set_elements(html_id, head_id, body_id);

    if let Some(title) = doc.get_elements_by_tag_name("title").first() {
        doc.set_title(title.text_content().trim());
    }

    Ok(doc)
}

/// Copies an html5ever tree into a document's node arena
struct DomConverter<'a> {
    doc: &'a Document,
    html: Option<NodeId>,
    head: Option<NodeId>,
    body: Option<NodeId>,
}

impl DomConverter<'_> {
    fn convert_node(&mut self, handle: &Handle, parent_id: NodeId) {
        let mut data = match handle.data {
            RcNodeData::Document | RcNodeData::ProcessingInstruction { .. } => return,
            RcNodeData::Doctype { .. } => NodeData::doctype(),
            RcNodeData::Text { ref contents } => {
                let text = contents.borrow().to_string();
                // whitespace-only runs between tags carry nothing
                if text.trim().is_empty() && text.len() > 1 {
                    return;
                }
                NodeData::text(text)
            }
            RcNodeData::Comment { ref contents } => NodeData::comment(contents.to_string()),
            RcNodeData::Element {
                ref name,
                ref attrs,
                ..
            } => {
                let mut data = NodeData::element(name.local.to_string());
                for attr in attrs.borrow().iter() {
                    data.set_attribute(
                        attr.name.local.to_string().to_lowercase(),
                        attr.value.to_string(),
                    );
                }
                data
            }
        };

        let node_id = NodeId::new();
        self.track(&data, node_id, parent_id);
        data.parent = Some(parent_id);

        {
            let mut nodes = self.doc.nodes.write();
            nodes.insert(node_id, data);
            if let Some(parent) = nodes.get_mut(&parent_id) {
                parent.children.push(node_id);
            }
        }

        for child in handle.children.borrow().iter() {
            self.convert_node(child, node_id);
        }
    }

    /// Remember the first `<html>`, and the `<head>`/`<body>` directly under it
    fn track(&mut self, data: &NodeData, id: NodeId, parent_id: NodeId) {
        match data.tag_name.as_deref() {
            Some("html") if self.html.is_none() => self.html = Some(id),
            Some("head") if self.head.is_none() && self.html == Some(parent_id) => {
                self.head = Some(id)
            }
            Some("body") if self.body.is_none() && self.html == Some(parent_id) => {
                self.body = Some(id)
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_html() {
        let doc = parse_html("<html><body><p>Hello</p></body></html>").unwrap();
        assert!(doc.body().is_some());
        assert_eq!(doc.body().unwrap().text_content(), "Hello");
    }

    #[test]
    fn test_fragment_gets_body() {
        let doc = parse_html("<div id=\"x\"></div>").unwrap();
        let body = doc.body().unwrap();
        assert_eq!(body.first_element_child().unwrap().id().as_deref(), Some("x"));
    }

    #[test]
    fn test_parse_complex_html() {
        let html = r#"
            <!DOCTYPE html>
            <html>
            <head>
                <title>Relier</title>
            </head>
            <body>
                <div id="container">
                    <button id="signin">Sign in</button>
                </div>
            </body>
            </html>
        "#;
        let url = Url::parse("https://relier.example.com/").unwrap();
        let doc = parse_html_with_url(html, Some(url)).unwrap();

        assert_eq!(doc.title(), "Relier");
        assert!(doc.head().is_some());
        assert_eq!(doc.url_string().as_deref(), Some("https://relier.example.com/"));
        assert!(doc.outer_html().starts_with("<!DOCTYPE html><html>"));

        let button = doc.get_element_by_id("signin").unwrap();
        assert_eq!(button.text_content(), "Sign in");
    }
}
