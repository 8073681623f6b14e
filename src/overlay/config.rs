// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Overlay load options

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dom::is_single_value;
use crate::error::{Error, Result};

/// Default z-index of the background
pub const DEFAULT_Z_INDEX: i32 = 100;

/// Default background CSS
pub const DEFAULT_BACKGROUND: &str = "rgba(0,0,0,0.5)";

/// Default content frame width in CSS pixels
pub const DEFAULT_FRAME_WIDTH: u32 = 600;

/// Default content frame height in CSS pixels
pub const DEFAULT_FRAME_HEIGHT: u32 = 400;

/// Content frame size, applied to both the frame's presentational
/// attributes and its inline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT)
    }
}

/// Options for [`crate::Overlay::load_with`]
///
/// A zero z-index or an empty background fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LoadOptions {
    /// z-index set on the background
    #[serde(alias = "zIndexStyle")]
    pub z_index: i32,
    /// Background CSS value
    #[serde(alias = "backgroundStyle")]
    pub background: String,
    /// Content frame size
    pub frame_size: FrameSize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            z_index: DEFAULT_Z_INDEX,
            background: DEFAULT_BACKGROUND.to_string(),
            frame_size: FrameSize::default(),
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set background z-index
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Set background CSS
    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Set content frame size
    pub fn frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_size = FrameSize::new(width, height);
        self
    }

    /// Parse options from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// z-index actually applied
    pub fn effective_z_index(&self) -> i32 {
        if self.z_index == 0 {
            DEFAULT_Z_INDEX
        } else {
            self.z_index
        }
    }

    /// Background actually applied
    pub fn effective_background(&self) -> &str {
        let bg = self.background.trim();
        if bg.is_empty() {
            DEFAULT_BACKGROUND
        } else {
            bg
        }
    }

    /// Reject values that cannot be expressed as one inline declaration
    pub fn validate(&self) -> Result<()> {
        if !is_single_value(&self.background) {
            return Err(Error::config(format!(
                "background must be a single CSS value, got '{}'",
                self.background
            )));
        }
        if self.frame_size.width == 0 || self.frame_size.height == 0 {
            return Err(Error::config(format!(
                "frame size must be non-zero, got {}x{}",
                self.frame_size.width, self.frame_size.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let options = LoadOptions::default();
        assert_eq!(options.effective_z_index(), 100);
        assert_eq!(options.effective_background(), "rgba(0,0,0,0.5)");
        assert_eq!(options.frame_size, FrameSize::new(600, 400));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_falsy_values_fall_back() {
        let options = LoadOptions::new().z_index(0).background("  ");
        assert_eq!(options.effective_z_index(), 100);
        assert_eq!(options.effective_background(), "rgba(0,0,0,0.5)");
    }

    #[test]
    fn test_from_json() {
        let options = LoadOptions::from_json(r#"{"zIndex": 500, "background": "red"}"#).unwrap();
        assert_eq!(options.z_index, 500);
        assert_eq!(options.background, "red");
        assert_eq!(options.frame_size, FrameSize::default());

        let aliased =
            LoadOptions::from_json(r#"{"zIndexStyle": 7, "backgroundStyle": "blue"}"#).unwrap();
        assert_eq!(aliased, LoadOptions::new().z_index(7).background("blue"));

        let sized = LoadOptions::from_json(r#"{"frameSize": {"width": 320, "height": 480}}"#)
            .unwrap();
        assert_eq!(sized.frame_size, FrameSize::new(320, 480));
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = LoadOptions::from_json(r#"{"zindex": 5}"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_validate() {
        assert!(LoadOptions::new().background("red;display:none").validate().is_err());
        assert!(LoadOptions::new().background("red}body{color:red").validate().is_err());
        assert!(LoadOptions::new().background("url(a;b").validate().is_err());
        assert!(LoadOptions::new().frame_size(0, 400).validate().is_err());
    }

    #[test]
    fn test_background_with_url_survives_style_roundtrip() {
        use crate::dom::StyleDeclaration;
        use crate::overlay::layout::background_style;

        for bg in [
            "url(data:image/png;base64,AAAA)",
            r#"url("bg.png") no-repeat"#,
            "url('x;y.png') center / cover, rgba(0,0,0,0.5)",
        ] {
            let options = LoadOptions::new().background(bg);
            options.validate().unwrap();

            let rendered = background_style(&options).to_string();
            let parsed = StyleDeclaration::parse(&rendered);
            assert_eq!(parsed.get("background"), Some(bg));
            assert_eq!(parsed.get("z-index"), Some("100"));
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"zIndex": 9000}}"#).unwrap();

        let options = LoadOptions::from_file(file.path()).unwrap();
        assert_eq!(options.effective_z_index(), 9000);

        let missing = LoadOptions::from_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }
}
