// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structural errors raised by the tag table.
//!
//! Only the strict-add path and the indexed read can fail. A value stored
//! under an unexpected kind is not an error: typed reads return `None`.

use thiserror::Error;

/// Errors for [`TagTable`](crate::TagTable) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagTableError {
    /// `add_tag` was called with a tag that already holds a value.
    #[error("Duplicate tag: '{0}' is already present")]
    DuplicateKey(String),

    /// `get` was called with a tag that holds no value.
    #[error("Tag not found: '{0}'")]
    KeyNotFound(String),
}

impl TagTableError {
    /// Tag that caused the error.
    pub fn tag(&self) -> &str {
        match self {
            Self::DuplicateKey(tag) | Self::KeyNotFound(tag) => tag,
        }
    }
}

/// Result type for tag table operations.
pub type Result<T> = std::result::Result<T, TagTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TagTableError::DuplicateKey("score".to_string());
        assert_eq!(err.to_string(), "Duplicate tag: 'score' is already present");
        assert_eq!(err.tag(), "score");

        let err = TagTableError::KeyNotFound("alive".to_string());
        assert_eq!(err.to_string(), "Tag not found: 'alive'");
        assert_eq!(err.tag(), "alive");
    }
}
