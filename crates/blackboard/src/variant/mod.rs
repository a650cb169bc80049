// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compact tagged value.
//!
//! A [`Variant`] holds exactly one of: nothing, an integer, a float, a
//! boolean, a string, or an opaque object reference. Primitives are stored
//! inline; strings and objects are shared handles, so cloning a variant
//! never copies text or object data.
//!
//! # Example
//!
//! ```rust
//! use blackboard::{Variant, VariantKind};
//!
//! let v = Variant::from(42);
//! assert_eq!(v.kind(), VariantKind::Int);
//! assert_eq!(v.try_get::<i64>(), Some(42));
//! assert_eq!(v.try_get::<f64>(), None);
//! assert_eq!(v.get_or_default::<bool>(), false);
//! ```

mod convert;
mod kind;
mod object;

pub use convert::FromVariant;
pub use kind::VariantKind;
pub use object::ObjectRef;

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A value of one of six kinds.
///
/// `Object(None)` is a null object reference. It has kind `Object` and is
/// distinct from `Empty`.
#[derive(Debug, Clone, Default)]
pub enum Variant {
    /// No value.
    #[default]
    Empty,
    Int(i64),
    Float(f64),
    Bool(bool),
    String(Arc<str>),
    Object(Option<ObjectRef>),
}

impl Variant {
    /// Wrap `value` as a new object reference.
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Self::Object(Some(ObjectRef::new(value)))
    }

    /// Object kind holding no reference.
    pub const fn null_object() -> Self {
        Self::Object(None)
    }

    /// Active kind.
    pub const fn kind(&self) -> VariantKind {
        match self {
            Self::Empty => VariantKind::Empty,
            Self::Int(_) => VariantKind::Int,
            Self::Float(_) => VariantKind::Float,
            Self::Bool(_) => VariantKind::Bool,
            Self::String(_) => VariantKind::String,
            Self::Object(_) => VariantKind::Object,
        }
    }

    /// True for `Empty` only. A null object is not empty.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True for `Object(None)`.
    pub const fn is_null_object(&self) -> bool {
        matches!(self, Self::Object(None))
    }

    /// Typed read. Returns `None` when `T` does not match the stored kind.
    #[inline]
    pub fn try_get<T: FromVariant>(&self) -> Option<T> {
        T::from_variant(self)
    }

    /// Typed read falling back to the type's zero value on mismatch.
    #[inline]
    pub fn get_or_default<T: FromVariant + Default>(&self) -> T {
        self.try_get().unwrap_or_default()
    }

    /// Try to get as integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the object slot.
    ///
    /// The outer `Option` is the kind check; the inner one is the null check.
    pub fn as_object(&self) -> Option<Option<&ObjectRef>> {
        match self {
            Self::Object(v) => Some(v.as_ref()),
            _ => None,
        }
    }

    /// Typed handle to the referenced object, if this is a non-null object
    /// of type `T`.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        match self {
            Self::Object(Some(obj)) => obj.downcast::<T>(),
            _ => None,
        }
    }
}

/// Bit pattern used for float equality and hashing.
///
/// `-0.0` folds onto `0.0` and every NaN onto one NaN. Equality stays
/// numeric for ordinary values while NaN still equals itself.
fn canonical_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Variant {}

impl Hash for Variant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.kind() as u8).hash(state);
        match self {
            Self::Empty => {}
            Self::Int(v) => v.hash(state),
            Self::Float(v) => canonical_bits(*v).hash(state),
            Self::Bool(v) => v.hash(state),
            Self::String(v) => v.hash(state),
            Self::Object(v) => v.hash(state),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty"),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "{:?}", v),
            Self::Object(Some(obj)) => write!(f, "object({})", obj),
            Self::Object(None) => f.write_str("object(null)"),
        }
    }
}

// Conversion traits
impl From<i64> for Variant {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Variant {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Variant {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<bool> for Variant {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Self::String(Arc::from(v))
    }
}

impl From<String> for Variant {
    fn from(v: String) -> Self {
        Self::String(Arc::from(v))
    }
}

impl From<Arc<str>> for Variant {
    fn from(v: Arc<str>) -> Self {
        Self::String(v)
    }
}

impl From<ObjectRef> for Variant {
    fn from(v: ObjectRef) -> Self {
        Self::Object(Some(v))
    }
}

impl From<Option<ObjectRef>> for Variant {
    fn from(v: Option<ObjectRef>) -> Self {
        Self::Object(v)
    }
}
