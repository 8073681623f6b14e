// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! In-memory DOM used as the default overlay host
//!
//! A node arena shared by handles, with html5ever for parsing pages.

mod document;
mod element;
mod node;
mod parser;
mod style;

pub use document::Document;
pub use element::Element;
pub use node::{Node, NodeId, NodeType};
pub use parser::{parse_html, parse_html_with_url};
pub use style::StyleDeclaration;
pub(crate) use style::is_single_value;
