//! Shared reference to an arbitrary typed object

use std::fmt;
use std::sync::Arc;

use crate::error::{ParamError, Result};
use crate::types::{downcast_arc, StaticTyped, TypeHandle, TypeRegistry, TypedObject};

use super::{param_value_base_type, ParamValueBase};

/// Shares ownership of zero or one [`TypedObject`].
///
/// Cloning shares the referent. Dropping releases this owner's reference;
/// the referent itself is dropped with its last owner.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use paramvalue::{ParamMatrix3f, ParamTypedRefCount, LMatrix3f};
///
/// let empty = ParamTypedRefCount::default();
/// assert!(empty.is_empty());
/// assert_eq!(empty.to_string(), "(empty)");
///
/// let matrix = Arc::new(ParamMatrix3f::new(LMatrix3f::identity()));
/// let held = ParamTypedRefCount::new(matrix.clone());
/// assert_eq!(held.to_string(), "ParamValue<LMatrix3f>");
/// assert_eq!(Arc::strong_count(&matrix), 2);
///
/// drop(held);
/// assert_eq!(Arc::strong_count(&matrix), 1);
/// ```
#[derive(Clone, Default)]
pub struct ParamTypedRefCount {
    value: Option<Arc<dyn TypedObject>>,
}

impl ParamTypedRefCount {
    /// Share ownership of `value`
    pub fn new(value: Arc<dyn TypedObject>) -> Self {
        Self { value: Some(value) }
    }

    /// Create a wrapper that holds nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// The referenced object, if any
    pub fn value(&self) -> Option<&Arc<dyn TypedObject>> {
        self.value.as_ref()
    }

    /// Check if nothing is referenced
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// The dynamic type of the referent, or [`TypeHandle::NONE`] when empty
    pub fn value_type(&self) -> TypeHandle {
        self.value
            .as_ref()
            .map_or(TypeHandle::NONE, |value| value.type_handle())
    }

    /// Release the referent from this wrapper, leaving it empty
    pub fn take(&mut self) -> Option<Arc<dyn TypedObject>> {
        self.value.take()
    }

    /// Share the referent as its concrete type `T`.
    pub fn downcast<T>(&self) -> Result<Arc<T>>
    where
        T: TypedObject + StaticTyped,
    {
        let value = self
            .value
            .clone()
            .ok_or_else(|| ParamError::EmptyReference(T::class_type().to_string()))?;
        downcast_arc(value)
    }
}

impl From<Arc<dyn TypedObject>> for ParamTypedRefCount {
    fn from(value: Arc<dyn TypedObject>) -> Self {
        Self::new(value)
    }
}

impl From<Option<Arc<dyn TypedObject>>> for ParamTypedRefCount {
    fn from(value: Option<Arc<dyn TypedObject>>) -> Self {
        Self { value }
    }
}

impl StaticTyped for ParamTypedRefCount {
    fn class_type() -> TypeHandle {
        TypeRegistry::global().class_handle::<Self>(
            || "ParamTypedRefCount".to_string(),
            &[param_value_base_type()],
        )
    }
}

impl TypedObject for ParamTypedRefCount {
    fn type_handle(&self) -> TypeHandle {
        Self::class_type()
    }
}

impl ParamValueBase for ParamTypedRefCount {
    fn output(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        match &self.value {
            None => out.write_str("(empty)"),
            Some(value) => TypeRegistry::global().write_name(value.type_handle(), out),
        }
    }
}

impl fmt::Display for ParamTypedRefCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ParamValueBase::output(self, f)
    }
}

impl fmt::Debug for ParamTypedRefCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParamTypedRefCount")
            .field(&format_args!("{}", self))
            .finish()
    }
}
