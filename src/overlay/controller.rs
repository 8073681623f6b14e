// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Overlay controller
//!
//! Builds a fixed, full-viewport background with a content frame inside it
//! and attaches the pair to the host document body. The pair is attached as
//! a unit: a failed load leaves the body exactly as it was.

use url::Url;

use super::config::LoadOptions;
use super::ids::{OverlayIds, DEFAULT_ID_PREFIX};
use super::layout::{background_attributes, frame_attributes};
use crate::error::{Error, Result};
use crate::host::{HostDocument, HostWindow};

/// Element handle type of a host window's document
pub type ElementOf<H> = <<H as HostWindow>::Document as HostDocument>::Element;

/// Overlay lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Unloaded,
    Loaded,
}

/// Elements owned while loaded
struct Attached<H: HostWindow> {
    background: ElementOf<H>,
    frame: ElementOf<H>,
    content_window: H::ContentWindow,
    src: String,
}

/// A lightbox bound to one host window.
///
/// Loading while already loaded replaces the current background/frame pair.
/// Dropping the controller leaves any attached overlay in the document.
pub struct Overlay<H: HostWindow> {
    host: H,
    ids: OverlayIds,
    attached: Option<Attached<H>>,
}

impl<H: HostWindow> Overlay<H> {
    /// Create an unloaded overlay for a host window
    pub fn new(host: H) -> Result<Self> {
        Self::with_id_prefix(host, DEFAULT_ID_PREFIX)
    }

    /// Create an unloaded overlay whose element ids use a custom prefix
    pub fn with_id_prefix(host: H, prefix: &str) -> Result<Self> {
        if host.document().is_none() {
            return Err(Error::invalid_host("host window has no document"));
        }
        let ids = OverlayIds::generate(prefix)?;

        Ok(Self {
            host,
            ids,
            attached: None,
        })
    }

    /// Load content with default options
    pub fn load(&mut self, url: &str) -> Result<()> {
        self.load_with(url, &LoadOptions::default())
    }

    /// Load content into the overlay and attach it to the document body.
    ///
    /// When already loaded, the new pair is attached before the current one
    /// is removed, so a failed reload leaves the current overlay in place.
    pub fn load_with(&mut self, url: &str, options: &LoadOptions) -> Result<()> {
        options.validate()?;

        let doc = self.document_for(url)?;
        let src = resolve_content_url(url, doc.base_url().as_ref())?;
        let Some(body) = doc.body() else {
            tracing::warn!(url = %url, "Host document has no body, overlay not loaded");
            return Err(Error::load(url, "host document has no body"));
        };

        let background = doc.create_element("div")?;
        for (name, value) in background_attributes(&self.ids, options) {
            doc.set_attribute(&background, name, &value)?;
        }

        let frame = doc.create_element("iframe")?;
        for (name, value) in frame_attributes(&self.ids, &src, options) {
            doc.set_attribute(&frame, name, &value)?;
        }

        doc.append_child(&background, &frame)?;
        doc.append_child(&body, &background)?;

        let Some(content_window) = self.host.content_window(&frame) else {
            doc.remove_child(&body, &background)?;
            return Err(Error::load(url, "content frame has no browsing context"));
        };

        if let Some(previous) = &self.attached {
            if let Err(err) = doc.remove_child(&body, &previous.background) {
                tracing::warn!(
                    id = self.ids.background(),
                    error = %err,
                    "Could not detach loaded overlay, keeping it"
                );
                if let Err(rollback) = doc.remove_child(&body, &background) {
                    tracing::warn!(error = %rollback, "Could not detach replacement overlay");
                }
                return Err(err);
            }
            tracing::debug!(id = self.ids.background(), previous = %previous.src, "Replaced loaded overlay");
        }

        tracing::debug!(
            id = self.ids.background(),
            src = %src,
            z_index = options.effective_z_index(),
            "Overlay loaded"
        );

        self.attached = Some(Attached {
            background,
            frame,
            content_window,
            src,
        });
        Ok(())
    }

    /// Detach the overlay from the document.
    ///
    /// No-op when unloaded. If the host fails to remove the background the
    /// error is returned and the overlay stays loaded.
    pub fn unload(&mut self) -> Result<()> {
        let Some(attached) = &self.attached else {
            return Ok(());
        };

        let doc = self
            .host
            .document()
            .ok_or_else(|| Error::invalid_host("host window lost its document"))?;
        let body = doc
            .body()
            .ok_or_else(|| Error::dom("host document lost its body"))?;
        doc.remove_child(&body, &attached.background)?;

        tracing::debug!(id = self.ids.background(), src = %attached.src, "Overlay unloaded");
        self.attached = None;
        Ok(())
    }

    /// True iff a background element currently exists for this overlay
    pub fn is_loaded(&self) -> bool {
        self.attached.is_some()
    }

    pub fn state(&self) -> OverlayState {
        if self.is_loaded() {
            OverlayState::Loaded
        } else {
            OverlayState::Unloaded
        }
    }

    /// The content frame element
    pub fn content_element(&self) -> Result<&ElementOf<H>> {
        self.attached().map(|a| &a.frame)
    }

    /// The browsing context inside the content frame
    pub fn content_window(&self) -> Result<&H::ContentWindow> {
        self.attached().map(|a| &a.content_window)
    }

    /// The background element
    pub fn background_element(&self) -> Result<&ElementOf<H>> {
        self.attached().map(|a| &a.background)
    }

    /// Resolved URL assigned to the frame
    pub fn content_url(&self) -> Result<&str> {
        self.attached().map(|a| a.src.as_str())
    }

    pub fn ids(&self) -> &OverlayIds {
        &self.ids
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn attached(&self) -> Result<&Attached<H>> {
        self.attached.as_ref().ok_or(Error::NotLoaded)
    }

    fn document_for(&self, url: &str) -> Result<&H::Document> {
        self.host
            .document()
            .ok_or_else(|| Error::load(url, "host window has no document"))
    }
}

impl<H: HostWindow> std::fmt::Debug for Overlay<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overlay")
            .field("ids", &self.ids)
            .field("state", &self.state())
            .field("src", &self.attached.as_ref().map(|a| a.src.as_str()))
            .finish()
    }
}

/// Validate a content URL, resolving relative URLs against the document
fn resolve_content_url(url: &str, base: Option<&Url>) -> Result<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_content_url(url, "content URL is empty"));
    }

    match Url::parse(trimmed) {
        Ok(parsed) => Ok(parsed.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => match base {
            Some(base) => base
                .join(trimmed)
                .map(|u| u.to_string())
                .map_err(|e| Error::invalid_content_url(url, e.to_string())),
            None => Err(Error::invalid_content_url(
                url,
                "relative URL and the host document has no base URL",
            )),
        },
        Err(e) => Err(Error::invalid_content_url(url, e.to_string())),
    }
}
