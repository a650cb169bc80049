// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! String-keyed table of [`Variant`] entries.
//!
//! Two write paths with different duplicate policies:
//!
//! - [`TagTable::add_tag`] inserts once and fails with
//!   [`TagTableError::DuplicateKey`] if the tag exists
//! - [`TagTable::set`] inserts or overwrites unconditionally
//!
//! Reads never fail on a kind mismatch: [`TagTable::try_get_value`] returns
//! `None` for both a missing tag and a tag stored under another kind, while
//! [`TagTable::lookup`] tells the two apart.
//!
//! A table is owned and mutated by a single owner; there is no internal
//! locking.

mod lookup;

pub use lookup::Lookup;

use crate::config::{TagTableConfig, MAX_INITIAL_CAPACITY};
use crate::error::{Result, TagTableError};
use crate::variant::{FromVariant, ObjectRef, Variant, VariantKind};
use std::any::Any;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::ops::Index;

/// Mapping from tag to [`Variant`].
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    entries: HashMap<String, Variant>,
    config: TagTableConfig,
}

impl TagTable {
    /// Create an empty table with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` tags.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(TagTableConfig::default().with_initial_capacity(capacity))
    }

    /// Create an empty table from a configuration.
    ///
    /// A capacity hint above [`MAX_INITIAL_CAPACITY`] is clamped to it.
    pub fn with_config(mut config: TagTableConfig) -> Self {
        if config.initial_capacity > MAX_INITIAL_CAPACITY {
            log::warn!(
                "[tag_table] initial_capacity {} exceeds maximum {}, clamping",
                config.initial_capacity,
                MAX_INITIAL_CAPACITY
            );
            config.initial_capacity = MAX_INITIAL_CAPACITY;
        }
        Self {
            entries: HashMap::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &TagTableConfig {
        &self.config
    }

    /// Insert a new tag.
    ///
    /// Fails with [`TagTableError::DuplicateKey`] if `tag` is already
    /// present; the stored value is left untouched. Use [`set`](Self::set)
    /// to overwrite.
    pub fn add_tag(&mut self, tag: impl Into<String>, value: impl Into<Variant>) -> Result<()> {
        match self.entries.entry(tag.into()) {
            Entry::Occupied(entry) => {
                log::debug!(
                    "[tag_table] add_tag rejected duplicate '{}' (holds {})",
                    entry.key(),
                    entry.get().kind()
                );
                Err(TagTableError::DuplicateKey(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                entry.insert(value.into());
                Ok(())
            }
        }
    }

    /// Insert a new tag referencing `value` as an opaque object.
    ///
    /// Same duplicate policy as [`add_tag`](Self::add_tag).
    pub fn add_object<T: Any + Send + Sync>(
        &mut self,
        tag: impl Into<String>,
        value: T,
    ) -> Result<()> {
        self.add_tag(tag, ObjectRef::new(value))
    }

    /// Entry stored under `tag`.
    pub fn get(&self, tag: &str) -> Result<&Variant> {
        self.entries
            .get(tag)
            .ok_or_else(|| TagTableError::KeyNotFound(tag.to_string()))
    }

    /// Insert or overwrite `tag`, returning the previous entry.
    pub fn set(&mut self, tag: impl Into<String>, value: impl Into<Variant>) -> Option<Variant> {
        let tag = tag.into();
        let previous = self.entries.insert(tag, value.into());
        if let Some(ref old) = previous {
            log::trace!("[tag_table] set overwrote entry (was {})", old.kind());
        }
        previous
    }

    /// Typed read. `None` if the tag is missing or holds another kind.
    pub fn try_get_value<T: FromVariant>(&self, tag: &str) -> Option<T> {
        self.lookup(tag).ok()
    }

    /// Typed read distinguishing a missing tag, a kind mismatch and a value
    /// too wide for `T`.
    pub fn lookup<T: FromVariant>(&self, tag: &str) -> Lookup<T> {
        let Some(variant) = self.entries.get(tag) else {
            return Lookup::NotFound;
        };
        match variant.try_get::<T>() {
            Some(value) => Lookup::Found(value),
            None if variant.kind() == T::KIND => {
                if self.config.log_type_mismatches {
                    log::debug!(
                        "[tag_table] '{}' holds {} {} which does not fit the requested type",
                        tag,
                        variant.kind(),
                        variant
                    );
                }
                Lookup::OutOfRange { kind: T::KIND }
            }
            None => {
                if self.config.log_type_mismatches {
                    log::debug!(
                        "[tag_table] '{}' holds {}, read as {}",
                        tag,
                        variant.kind(),
                        T::KIND
                    );
                }
                Lookup::Mismatched {
                    expected: T::KIND,
                    found: variant.kind(),
                }
            }
        }
    }

    /// Typed read falling back to the type's zero value.
    pub fn get_or_default<T: FromVariant + Default>(&self, tag: &str) -> T {
        self.lookup(tag).unwrap_or_default()
    }

    /// Remove `tag`, returning its entry. Removing an absent tag is a no-op.
    pub fn remove_tag(&mut self, tag: &str) -> Option<Variant> {
        let removed = self.entries.remove(tag);
        if removed.is_none() {
            log::trace!("[tag_table] remove_tag '{}' not present", tag);
        }
        removed
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Kind stored under `tag`.
    pub fn kind_of(&self, tag: &str) -> Option<VariantKind> {
        self.entries.get(tag).map(Variant::kind)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Remove every tag, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over `(tag, entry)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variant)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over tags in arbitrary order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Index<&str> for TagTable {
    type Output = Variant;

    /// # Panics
    ///
    /// Panics if `tag` is not present. Use [`TagTable::get`] for the
    /// fallible form.
    fn index(&self, tag: &str) -> &Variant {
        match self.entries.get(tag) {
            Some(variant) => variant,
            None => panic!("{}", TagTableError::KeyNotFound(tag.to_string())),
        }
    }
}

/// Bulk insert with [`TagTable::set`] semantics: later pairs overwrite
/// earlier ones.
impl<K: Into<String>, V: Into<Variant>> Extend<(K, V)> for TagTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.entries.reserve(iter.size_hint().0);
        for (tag, value) in iter {
            self.entries.insert(tag.into(), value.into());
        }
    }
}

impl<K: Into<String>, V: Into<Variant>> FromIterator<(K, V)> for TagTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
