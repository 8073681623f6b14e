// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the lightbox crate
//!
//! Every failure is a local precondition violation raised synchronously to
//! the caller. Nothing here is retried.

use thiserror::Error;

/// Result type alias for lightbox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for lightbox operations
#[derive(Error, Debug)]
pub enum Error {
    /// Host window has no usable document
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    /// Overlay could not be attached to the host document
    #[error("Load failed for {url}: {reason}")]
    Load { reason: String, url: String },

    /// Accessor called while no overlay is loaded
    #[error("Overlay is not loaded")]
    NotLoaded,

    /// Content URL is empty or malformed
    #[error("Invalid content URL '{url}': {reason}")]
    InvalidContentUrl { url: String, reason: String },

    /// HTML parsing failed
    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    /// DOM operation failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid host error
    pub fn invalid_host<S: Into<String>>(msg: S) -> Self {
        Error::InvalidHost(msg.into())
    }

    /// Create a load error for the given content URL
    pub fn load(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Load {
            reason: reason.into(),
            url: url.into(),
        }
    }

    /// Create an invalid content URL error
    pub fn invalid_content_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidContentUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a new DOM error
    pub fn dom<S: Into<String>>(msg: S) -> Self {
        Error::Dom(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if an accessor was called on an unloaded overlay
    pub fn is_not_loaded(&self) -> bool {
        matches!(self, Error::NotLoaded)
    }

    /// Check if this is a precondition violation of the overlay contract
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::InvalidHost(_)
                | Error::Load { .. }
                | Error::NotLoaded
                | Error::InvalidContentUrl { .. }
        )
    }

    /// Get the content URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Load { url, .. } => Some(url),
            Error::InvalidContentUrl { url, .. } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error() {
        let err = Error::load("https://example.com/login", "document has no body");

        assert!(err.is_precondition());
        assert!(!err.is_not_loaded());
        assert_eq!(err.url(), Some("https://example.com/login"));
        assert_eq!(
            err.to_string(),
            "Load failed for https://example.com/login: document has no body"
        );
    }

    #[test]
    fn test_not_loaded() {
        let err = Error::NotLoaded;
        assert!(err.is_not_loaded());
        assert!(err.is_precondition());
        assert_eq!(err.url(), None);
    }
}
