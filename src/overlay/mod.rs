// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Lightbox overlay
//!
//! High-level API: create an [`Overlay`] for a host window, `load` a content
//! URL into it, `unload` it again.

mod config;
mod controller;
mod ids;
mod layout;

pub use config::{
    FrameSize, LoadOptions, DEFAULT_BACKGROUND, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH,
    DEFAULT_Z_INDEX,
};
pub use controller::{ElementOf, Overlay, OverlayState};
pub use ids::{OverlayIds, DEFAULT_ID_PREFIX};
pub use layout::{background_style, frame_style};
