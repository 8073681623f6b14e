// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Lightbox - modal overlay hosting a content frame
//!
//! Puts a fixed, full-viewport background over a host page with an
//! `<iframe>` centred inside it, and takes it down again.
//!
//! ## Features
//!
//! - Host capability traits: drive any DOM through [`HostWindow`]
//! - In-memory DOM and [`Window`] with nested browsing contexts
//! - HTML parsing via html5ever for host pages
//! - Unique per-instance element ids: several overlays can share a page
//! - Atomic load: either both elements are attached or neither is
//!
//! ## Example
//!
//! ```rust
//! use lightbox::{LoadOptions, Overlay, Window};
//!
//! fn main() -> lightbox::Result<()> {
//!     let window = Window::default();
//!     let mut overlay = Overlay::new(&window)?;
//!
//!     overlay.load_with(
//!         "https://accounts.example.com/signin",
//!         &LoadOptions::new().z_index(500).background("red"),
//!     )?;
//!     assert!(overlay.is_loaded());
//!
//!     overlay.unload()?;
//!     assert!(!overlay.is_loaded());
//!     Ok(())
//! }
//! ```

pub mod dom;
pub mod error;
pub mod host;
pub mod overlay;

// Re-exports for convenience

// Overlay
pub use overlay::{FrameSize, LoadOptions, Overlay, OverlayIds, OverlayState};

// Host
pub use host::{HostDocument, HostWindow, Window};

// DOM
pub use dom::{parse_html, parse_html_with_url, Document, Element, Node, StyleDeclaration};

// Errors
pub use error::{Error, Result};

/// Lightbox version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
