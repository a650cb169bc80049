// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # Blackboard - tag table over compact variants
//!
//! A string-keyed store that lets unrelated subsystems exchange loosely
//! typed data (numbers, flags, text, opaque references) without knowing each
//! other's concrete types. Values are checked against the requested type at
//! the read site; a mismatch is an ordinary `None`, never an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use blackboard::{Lookup, TagTable, TagTableError};
//!
//! fn main() -> blackboard::Result<()> {
//!     let mut table = TagTable::new();
//!     table.add_tag("score", 42)?;
//!     table.add_tag("alive", true)?;
//!     table.add_tag("name", "hero")?;
//!
//!     assert_eq!(table.try_get_value::<i64>("score"), Some(42));
//!     assert_eq!(table.try_get_value::<f64>("score"), None);
//!     assert_eq!(table.try_get_value::<String>("name").as_deref(), Some("hero"));
//!
//!     // Strict insert refuses to alias an existing tag
//!     assert_eq!(
//!         table.add_tag("score", 7),
//!         Err(TagTableError::DuplicateKey("score".into()))
//!     );
//!
//!     // `set` overwrites unconditionally
//!     table.set("score", 7);
//!     assert_eq!(table.get("score")?.as_int(), Some(7));
//!
//!     // `lookup` keeps "missing" and "wrong kind" apart
//!     assert!(table.lookup::<bool>("score").is_mismatched());
//!     assert_eq!(table.lookup::<bool>("ghost"), Lookup::NotFound);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Variant`] | Tagged value: empty, int, float, bool, string or object |
//! | [`VariantKind`] | Discriminator of a [`Variant`] |
//! | [`ObjectRef`] | Opaque shared reference compared by identity |
//! | [`TagTable`] | Tag to [`Variant`] mapping with typed access |
//! | [`Lookup`] | Found / mismatched / not found read outcome |
//!
//! ## Features
//!
//! - `config-file`: load [`TagTableConfig`] from TOML
//!
//! Logging goes through the `log` facade; install any logger (for example
//! `env_logger`) to see it.

pub mod config;
pub mod error;
pub mod table;
pub mod variant;

pub use config::{ConfigError, TagTableConfig};
pub use error::{Result, TagTableError};
pub use table::{Lookup, TagTable};
pub use variant::{FromVariant, ObjectRef, Variant, VariantKind};
