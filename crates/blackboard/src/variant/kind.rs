// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Variant discriminator.

use std::fmt;

/// Kind of payload held by a [`Variant`](super::Variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum VariantKind {
    Empty = 0,
    Int = 1,
    Float = 2,
    Bool = 3,
    String = 4,
    Object = 5,
}

impl VariantKind {
    /// All kinds, in discriminant order.
    pub const ALL: [VariantKind; 6] = [
        Self::Empty,
        Self::Int,
        Self::Float,
        Self::Bool,
        Self::String,
        Self::Object,
    ];

    /// Lowercase name used in log output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Object => "object",
        }
    }

    /// True for kinds whose payload is a shared handle.
    pub const fn is_reference(self) -> bool {
        matches!(self, Self::String | Self::Object)
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
