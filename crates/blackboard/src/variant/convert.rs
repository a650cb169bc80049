// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Typed extraction from a [`Variant`].
//!
//! The set of readable types is closed: `FromVariant` is sealed and each
//! implementation is bound to exactly one [`VariantKind`].

use super::{ObjectRef, Variant, VariantKind};
use std::sync::Arc;

mod private {
    pub trait Sealed {}
}

/// Types that can be read back out of a [`Variant`].
///
/// | Rust type            | Kind     |
/// |----------------------|----------|
/// | `i64`, `i32`         | `Int`    |
/// | `f64`, `f32`         | `Float`  |
/// | `bool`               | `Bool`   |
/// | `String`, `Arc<str>` | `String` |
/// | `Option<ObjectRef>`  | `Object` |
///
/// Narrow reads refuse values that do not fit: an `Int` outside the `i32`
/// range read as `i32`, or a finite `Float` beyond `f32::MAX` in magnitude
/// read as `f32`, yields `None` even though the kind matches. Infinities and
/// NaN carry over to `f32`; other `f32` reads round to the nearest value.
pub trait FromVariant: private::Sealed + Sized {
    /// Kind this type is stored as.
    const KIND: VariantKind;

    /// Extract the payload, or `None` when the variant holds another kind or
    /// a value this type cannot hold.
    fn from_variant(value: &Variant) -> Option<Self>;
}

macro_rules! impl_from_variant {
    ($ty:ty, $kind:ident, |$v:ident| $extract:expr) => {
        impl private::Sealed for $ty {}

        impl FromVariant for $ty {
            const KIND: VariantKind = VariantKind::$kind;

            #[inline]
            fn from_variant(value: &Variant) -> Option<Self> {
                match value {
                    Variant::$kind($v) => $extract,
                    _ => None,
                }
            }
        }
    };
}

// Narrowing that never turns a finite value into an infinity.
#[allow(clippy::cast_possible_truncation)]
fn narrow_f32(v: f64) -> Option<f32> {
    let narrowed = v as f32;
    (narrowed.is_finite() || !v.is_finite()).then_some(narrowed)
}

impl_from_variant!(i64, Int, |v| Some(*v));
impl_from_variant!(i32, Int, |v| i32::try_from(*v).ok());
impl_from_variant!(f64, Float, |v| Some(*v));
impl_from_variant!(f32, Float, |v| narrow_f32(*v));
impl_from_variant!(bool, Bool, |v| Some(*v));
impl_from_variant!(String, String, |v| Some(v.to_string()));
impl_from_variant!(Arc<str>, String, |v| Some(Arc::clone(v)));
impl_from_variant!(Option<ObjectRef>, Object, |v| Some(v.clone()));
