// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Host capabilities
//!
//! The overlay never touches a concrete DOM. It drives a [`HostWindow`],
//! which hands out a [`HostDocument`] able to create, attribute, attach and
//! detach elements. [`Window`] is the in-memory implementation over
//! [`crate::dom::Document`]; tests substitute their own doubles.

mod window;

pub use window::Window;

use std::fmt;

use url::Url;

use crate::dom::{Document, Element};
use crate::error::{Error, Result};

/// Document-level capability used by the overlay
pub trait HostDocument {
    /// Handle to an element of this document
    type Element: Clone + fmt::Debug;

    /// Create a detached element
    fn create_element(&self, tag: &str) -> Result<Self::Element>;

    /// Set an attribute on an element
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) -> Result<()>;

    /// Append `child` as the last child of `parent`
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<()>;

    /// Remove `child` from `parent`, detaching its whole subtree
    fn remove_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<()>;

    /// The `<body>` element, if the document has one
    fn body(&self) -> Option<Self::Element>;

    /// Base URL for resolving relative URLs
    fn base_url(&self) -> Option<Url>;
}

/// Window-level capability: a document plus nested browsing contexts
pub trait HostWindow {
    type Document: HostDocument;

    /// Handle to the browsing context inside a frame element
    type ContentWindow: Clone + fmt::Debug;

    /// The window's document, or `None` if it has no usable document
    fn document(&self) -> Option<&Self::Document>;

    /// Browsing context of a connected frame element
    fn content_window(
        &self,
        frame: &<Self::Document as HostDocument>::Element,
    ) -> Option<Self::ContentWindow>;
}

impl<W: HostWindow + ?Sized> HostWindow for &W {
    type Document = W::Document;
    type ContentWindow = W::ContentWindow;

    fn document(&self) -> Option<&Self::Document> {
        (**self).document()
    }

    fn content_window(
        &self,
        frame: &<Self::Document as HostDocument>::Element,
    ) -> Option<Self::ContentWindow> {
        (**self).content_window(frame)
    }
}

impl HostDocument for Document {
    type Element = Element;

    fn create_element(&self, tag: &str) -> Result<Element> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(Error::dom(format!("invalid tag name '{}'", tag)));
        }
        Ok(Document::create_element(self, tag))
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<()> {
        if !element.same_document(&self.root()) {
            return Err(Error::dom("element belongs to another document"));
        }
        element.set_attribute(name, value);
        Ok(())
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<()> {
        parent.append(child)
    }

    fn remove_child(&self, parent: &Element, child: &Element) -> Result<()> {
        parent.remove(child)?;
        self.release(child);
        Ok(())
    }

    fn body(&self) -> Option<Element> {
        Document::body(self)
    }

    fn base_url(&self) -> Option<Url> {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_capability() {
        let doc = Document::blank();
        let body = HostDocument::body(&doc).unwrap();
        let div = HostDocument::create_element(&doc, "div").unwrap();

        doc.set_attribute(&div, "id", "box").unwrap();
        doc.append_child(&body, &div).unwrap();
        assert!(doc.get_element_by_id("box").is_some());

        HostDocument::remove_child(&doc, &body, &div).unwrap();
        assert!(doc.get_element_by_id("box").is_none());
    }

    #[test]
    fn test_rejects_bad_tag() {
        let doc = Document::blank();
        assert!(HostDocument::create_element(&doc, "").is_err());
        assert!(HostDocument::create_element(&doc, "<div>").is_err());
    }

    #[test]
    fn test_rejects_foreign_element() {
        let doc = Document::blank();
        let other = Document::blank();
        let div = other.create_element("div");

        assert!(doc.set_attribute(&div, "id", "x").is_err());
        assert!(doc.append_child(&HostDocument::body(&doc).unwrap(), &div).is_err());
    }
}
