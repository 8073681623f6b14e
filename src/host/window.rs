// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! In-memory window with nested browsing contexts

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use url::Url;

use super::HostWindow;
use crate::dom::{Document, Element, NodeId};

/// Tags that own a nested browsing context
const FRAME_TAGS: &[&str] = &["iframe", "frame"];

/// A window holding an optional document.
///
/// Frame elements get a child `Window` the first time their content window
/// is requested while connected. The child document is blank with the
/// frame's resolved `src` as its URL; nothing is fetched. Contexts of frames
/// that have left the document are discarded.
#[derive(Clone)]
pub struct Window {
    document: Option<Document>,
    contexts: Arc<RwLock<HashMap<NodeId, Window>>>,
}

impl Window {
    /// Window over an existing document
    pub fn new(document: Document) -> Self {
        Self {
            document: Some(document),
            contexts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Window over a blank document at the given URL
    pub fn blank(url: Option<Url>) -> Self {
        let doc = match url {
            Some(u) => Document::blank_with_url(u),
            None => Document::blank(),
        };
        Self::new(doc)
    }

    /// Window without a document
    pub fn detached() -> Self {
        Self {
            document: None,
            contexts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The window's document, if any
    pub fn dom(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Current location of this window
    pub fn location(&self) -> Option<Url> {
        self.document.as_ref().and_then(|d| d.url.clone())
    }

    /// Check whether two handles refer to the same browsing context
    pub fn same_context(&self, other: &Window) -> bool {
        Arc::ptr_eq(&self.contexts, &other.contexts)
    }

    /// Number of live nested browsing contexts
    pub fn frame_count(&self) -> usize {
        self.prune();
        self.contexts.read().len()
    }

    /// Drop contexts whose frame element is no longer connected
    fn prune(&self) {
        let Some(doc) = &self.document else {
            return;
        };
        let root = doc.root();
        let connected: Vec<NodeId> = root.subtree_ids();
        self.contexts
            .write()
            .retain(|id, _| connected.contains(id));
    }

    fn frame_url(&self, frame: &Element) -> Option<Url> {
        let src = frame.src()?;
        match Url::parse(&src) {
            Ok(url) => Some(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                self.location().and_then(|base| base.join(&src).ok())
            }
            Err(_) => None,
        }
    }
}

impl HostWindow for Window {
    type Document = Document;
    type ContentWindow = Window;

    fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    fn content_window(&self, frame: &Element) -> Option<Window> {
        let doc = self.document.as_ref()?;
        if !doc.is_connected(frame) || !FRAME_TAGS.contains(&frame.local_name().as_str()) {
            return None;
        }

        self.prune();
        if let Some(existing) = self.contexts.read().get(&frame.id) {
            return Some(existing.clone());
        }

        let child = Window::blank(self.frame_url(frame));
        tracing::debug!(
            frame = frame.id.as_u64(),
            url = ?child.location().map(|u| u.to_string()),
            "Created nested browsing context"
        );
        self.contexts.write().insert(frame.id, child.clone());
        Some(child)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::blank(None)
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("location", &self.location().map(|u| u.to_string()))
            .field("has_document", &self.document.is_some())
            .field("frames", &self.contexts.read().len())
            .finish()
    }
}
