// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-instance element identifiers

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};

/// Default prefix for generated identifiers
pub const DEFAULT_ID_PREFIX: &str = "fxa";

/// Element ids owned by one overlay instance.
///
/// Sequence numbers come from a process-wide counter, so two overlays on the
/// same window never share an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayIds {
    sequence: u64,
    background: String,
    frame: String,
}

impl OverlayIds {
    /// Generate ids with the given prefix
    pub fn generate(prefix: &str) -> Result<Self> {
        validate_prefix(prefix)?;

        static COUNTER: AtomicU64 = AtomicU64::new(1);
        let sequence = COUNTER.fetch_add(1, Ordering::Relaxed);

        Ok(Self {
            sequence,
            background: format!("{}-background-{}", prefix, sequence),
            frame: format!("{}-{}", prefix, sequence),
        })
    }

    /// Id of the background element
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Id of the content frame
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(Error::config("id prefix must not be empty"));
    }
    if !prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(Error::config(format!(
            "id prefix '{}' may only contain ASCII letters, digits, '-' and '_'",
            prefix
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = OverlayIds::generate(DEFAULT_ID_PREFIX).unwrap();
        let b = OverlayIds::generate(DEFAULT_ID_PREFIX).unwrap();

        assert_ne!(a.background(), b.background());
        assert_ne!(a.frame(), b.frame());
        assert_ne!(a.background(), a.frame());
        assert!(b.sequence() > a.sequence());
    }

    #[test]
    fn test_id_format() {
        let ids = OverlayIds::generate("relier").unwrap();
        let n = ids.sequence();
        assert_eq!(ids.background(), format!("relier-background-{}", n));
        assert_eq!(ids.frame(), format!("relier-{}", n));
    }

    #[test]
    fn test_invalid_prefix() {
        assert!(OverlayIds::generate("").is_err());
        assert!(OverlayIds::generate("has space").is_err());
        assert!(OverlayIds::generate("quo\"te").is_err());
    }
}
