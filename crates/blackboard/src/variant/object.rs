// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Opaque shared reference stored by `Object` variants.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Opaque handle to caller-owned data.
///
/// The handle never looks inside the referenced value. Two handles are equal
/// only when they point at the same allocation; cloning a handle does not
/// clone the data.
#[derive(Clone)]
pub struct ObjectRef {
    inner: Arc<dyn Any + Send + Sync>,
}

impl ObjectRef {
    /// Move `value` into a new shared allocation.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Share an existing allocation. The result is identical to every other
    /// handle built from a clone of `value`.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self { inner: value }
    }

    /// Typed shared handle, if the referenced value is a `T`.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    /// Borrow the referenced value as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Check the concrete type without downcasting.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// `TypeId` of the referenced value.
    pub fn type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    /// Reference identity.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }

    /// Number of live handles to the referenced value.
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    // Thin address only: vtable pointers are not unique per type.
    fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner).cast::<()>() as usize
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ObjectRef {}

impl Hash for ObjectRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({:#x})", self.addr())
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.addr())
    }
}

impl<T: Any + Send + Sync> From<Arc<T>> for ObjectRef {
    fn from(value: Arc<T>) -> Self {
        Self::from_arc(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct ShaderHandle(u32);

    #[test]
    fn test_identity_not_content() {
        let a = ObjectRef::new(ShaderHandle(7));
        let b = ObjectRef::new(ShaderHandle(7));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert!(a.ptr_eq(&a.clone()));
    }

    #[test]
    fn test_shared_arc_is_same_object() {
        let shared = Arc::new(ShaderHandle(3));
        let a = ObjectRef::from_arc(Arc::clone(&shared));
        let b = ObjectRef::from(Arc::clone(&shared));
        assert_eq!(a, b);
        assert_eq!(Arc::strong_count(&shared), 3);
    }

    #[test]
    fn test_downcast() {
        let obj = ObjectRef::new(ShaderHandle(11));
        assert!(obj.is::<ShaderHandle>());
        assert_eq!(obj.type_id(), TypeId::of::<ShaderHandle>());
        assert_eq!(obj.downcast_ref::<ShaderHandle>(), Some(&ShaderHandle(11)));
        assert!(obj.downcast_ref::<u32>().is_none());

        let typed = obj.downcast::<ShaderHandle>().expect("downcast");
        assert_eq!(*typed, ShaderHandle(11));
        assert_eq!(obj.strong_count(), 2);
        assert!(obj.downcast::<String>().is_none());
    }
}
