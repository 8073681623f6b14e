// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Inline style declarations
//!
//! Styles are rendered as `property:value;` pairs with no whitespace, in the
//! order they were added.

use std::fmt;

/// Ordered list of CSS property/value pairs for a `style` attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    props: Vec<(String, String)>,
}

impl StyleDeclaration {
    /// Create an empty declaration block
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a property (builder form)
    pub fn prop(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace a property, keeping its original position
    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into().trim().to_lowercase();
        let value = value.to_string();
        match self.props.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.props.push((name, value)),
        }
    }

    /// Get a property value
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.props
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over properties in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Parse an inline `style` attribute value.
    ///
    /// Declarations without a colon or with an empty name are skipped, as a
    /// browser would drop them.
    pub fn parse(style: &str) -> Self {
        let mut decl = Self::new();
        for item in split_declarations(style) {
            let Some((name, value)) = item.split_once(':') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            decl.set(name, value.trim());
        }
        decl
    }
}

/// Lexical shape of a CSS fragment, ignoring anything inside parentheses or
/// quoted strings
#[derive(Debug, Default)]
struct Scan {
    /// Byte offsets of top-level `;`
    semicolons: Vec<usize>,
    /// A top-level `{` or `}` was seen
    braces: bool,
    /// Every paren and quote was closed
    balanced: bool,
}

fn scan(css: &str) -> Scan {
    let mut out = Scan::default();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in css.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => out.semicolons.push(i),
            '{' | '}' if depth == 0 => out.braces = true,
            _ => {}
        }
    }

    out.balanced = depth == 0 && quote.is_none() && !escaped;
    out
}

/// Split a declaration list on `;` outside parentheses and quotes
fn split_declarations(style: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;
    for end in scan(style).semicolons {
        items.push(&style[start..end]);
        start = end + 1;
    }
    items.push(&style[start..]);
    items
}

/// Whether `value` can stand as the value of exactly one declaration.
///
/// `;`, `{` and `}` are allowed inside `url(...)` and other functions or
/// quoted strings; unclosed parens or quotes are refused since they would
/// swallow whatever follows.
pub(crate) fn is_single_value(value: &str) -> bool {
    let scan = scan(value);
    scan.balanced && scan.semicolons.is_empty() && !scan.braces
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in &self.props {
            write!(f, "{}:{};", k, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_compact() {
        let style = StyleDeclaration::new()
            .prop("background", "rgba(0,0,0,0.5)")
            .prop("bottom", 0)
            .prop("z-index", 100);

        assert_eq!(style.to_string(), "background:rgba(0,0,0,0.5);bottom:0;z-index:100;");
    }

    #[test]
    fn test_parse_inline_style() {
        let style = StyleDeclaration::parse(" margin : 0 auto 0 auto; top:10%;;bogus; :x ;");

        assert_eq!(style.len(), 2);
        assert_eq!(style.get("margin"), Some("0 auto 0 auto"));
        assert_eq!(style.get("TOP"), Some("10%"));
        assert_eq!(style.get("bogus"), None);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut style = StyleDeclaration::parse("background:red;z-index:1;");
        style.set("background", "blue");

        assert_eq!(style.to_string(), "background:blue;z-index:1;");
    }

    #[test]
    fn test_parse_keeps_semicolons_in_functions_and_strings() {
        let style = StyleDeclaration::parse(
            "background:url(data:image/png;base64,AAAA) no-repeat;content:'a;b';font-family:\"x;y\", serif;top:0;",
        );

        assert_eq!(style.len(), 4);
        assert_eq!(style.get("background"), Some("url(data:image/png;base64,AAAA) no-repeat"));
        assert_eq!(style.get("content"), Some("'a;b'"));
        assert_eq!(style.get("font-family"), Some("\"x;y\", serif"));
        assert_eq!(style.get("top"), Some("0"));
    }

    #[test]
    fn test_is_single_value() {
        assert!(is_single_value("rgba(0,0,0,0.5)"));
        assert!(is_single_value("url(data:image/png;base64,AAAA)"));
        assert!(is_single_value("url(\"bg.png\") no-repeat"));
        assert!(is_single_value("url('a{b}.png')"));

        assert!(!is_single_value("red;display:none"));
        assert!(!is_single_value("red}body{color:red"));
        assert!(!is_single_value("url(a;b"));
        assert!(!is_single_value("url(\"a) ;x"));
    }
}
