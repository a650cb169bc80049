// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Multi-way result of a typed tag lookup.

use crate::variant::VariantKind;

/// Outcome of [`TagTable::lookup`](super::TagTable::lookup).
///
/// Unlike `try_get_value`, keeps "tag missing" and "tag present with another
/// kind" apart.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// Tag present and stored as the requested kind.
    Found(T),
    /// Tag present but stored as another kind.
    Mismatched {
        expected: VariantKind,
        found: VariantKind,
    },
    /// Tag present under the requested kind, but its value does not fit the
    /// requested type (an `i64` beyond `i32`, a float beyond `f32`).
    OutOfRange { kind: VariantKind },
    /// Tag absent.
    NotFound,
}

impl<T> Lookup<T> {
    /// Collapse to the two-way form used by `try_get_value`.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            Self::Mismatched { .. } | Self::OutOfRange { .. } | Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_mismatched(&self) -> bool {
        matches!(self, Self::Mismatched { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Found value, or `default` otherwise.
    pub fn unwrap_or(self, default: T) -> T {
        self.ok().unwrap_or(default)
    }
}

impl<T: Default> Lookup<T> {
    /// Found value, or the type's zero value otherwise.
    pub fn unwrap_or_default(self) -> T {
        self.ok().unwrap_or_default()
    }
}

impl<T> From<Lookup<T>> for Option<T> {
    fn from(lookup: Lookup<T>) -> Self {
        lookup.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse() {
        assert_eq!(Lookup::Found(3).ok(), Some(3));
        assert_eq!(Lookup::<i64>::NotFound.ok(), None);
        let mismatch = Lookup::<i64>::Mismatched {
            expected: VariantKind::Int,
            found: VariantKind::Bool,
        };
        assert!(mismatch.is_mismatched());
        assert_eq!(mismatch.clone().unwrap_or(9), 9);
        assert_eq!(mismatch.unwrap_or_default(), 0);
        assert_eq!(Option::<i64>::from(Lookup::Found(1)), Some(1));

        let narrow = Lookup::<i32>::OutOfRange {
            kind: VariantKind::Int,
        };
        assert!(narrow.is_out_of_range());
        assert!(!narrow.is_mismatched());
        assert_eq!(narrow.ok(), None);
    }
}
