// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Styles and attributes of the overlay elements

use crate::dom::StyleDeclaration;

use super::config::{FrameSize, LoadOptions};
use super::ids::OverlayIds;

/// Full-viewport, fixed background
pub fn background_style(options: &LoadOptions) -> StyleDeclaration {
    StyleDeclaration::new()
        .prop("background", options.effective_background())
        .prop("bottom", 0)
        .prop("left", 0)
        .prop("position", "fixed")
        .prop("right", 0)
        .prop("top", 0)
        .prop("z-index", options.effective_z_index())
}

/// Horizontally centred frame, 10% from the top of the background
pub fn frame_style(size: FrameSize) -> StyleDeclaration {
    StyleDeclaration::new()
        .prop("background", "transparent")
        .prop("border", "none")
        .prop("display", "block")
        .prop("height", format!("{}px", size.height))
        .prop("margin", "0 auto 0 auto")
        .prop("position", "relative")
        .prop("top", "10%")
        .prop("width", format!("{}px", size.width))
}

/// Attributes of the background `<div>`, in the order they are set
pub fn background_attributes(ids: &OverlayIds, options: &LoadOptions) -> Vec<(&'static str, String)> {
    vec![
        ("id", ids.background().to_string()),
        ("style", background_style(options).to_string()),
    ]
}

/// Attributes of the content `<iframe>`, in the order they are set
pub fn frame_attributes(
    ids: &OverlayIds,
    src: &str,
    options: &LoadOptions,
) -> Vec<(&'static str, String)> {
    let size = options.frame_size;
    vec![
        ("id", ids.frame().to_string()),
        ("src", src.to_string()),
        ("width", size.width.to_string()),
        ("height", size.height.to_string()),
        ("allowtransparency", "true".to_string()),
        ("border", "0".to_string()),
        ("style", frame_style(size).to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_background_style() {
        let style = background_style(&LoadOptions::default());
        assert_eq!(
            style.to_string(),
            "background:rgba(0,0,0,0.5);bottom:0;left:0;position:fixed;right:0;top:0;z-index:100;"
        );
    }

    #[test]
    fn test_frame_sizing_is_consistent() {
        let ids = OverlayIds::generate("fxa").unwrap();
        let options = LoadOptions::new().frame_size(320, 480);
        let attrs = frame_attributes(&ids, "https://example.com/", &options);

        let get = |name: &str| {
            attrs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("width"), "320");
        assert_eq!(get("height"), "480");

        let style = StyleDeclaration::parse(&get("style"));
        assert_eq!(style.get("width"), Some("320px"));
        assert_eq!(style.get("height"), Some("480px"));
        assert_eq!(style.get("top"), Some("10%"));
    }
}
