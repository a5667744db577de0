//! Objects that can report their runtime type

use std::any::Any;
use std::sync::{Arc, OnceLock};

use tracing::error;

use super::{TypeHandle, TypeRegistry};
use crate::error::{ParamError, Result};

/// Access to the concrete value behind a trait object.
///
/// Implemented for every sized `Send + Sync + 'static` type; it exists so
/// that `dyn TypedObject` can be turned back into its concrete type.
pub trait AsAnyArc: Any + Send + Sync {
    /// Borrow as `dyn Any`
    fn as_any(&self) -> &dyn Any;

    /// Convert a shared reference into a shared `dyn Any`
    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAnyArc for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// An object whose dynamic type can be queried at runtime.
///
/// Shared ownership is expressed with `Arc<dyn TypedObject>`; the object is
/// dropped when the last `Arc` is released.
pub trait TypedObject: AsAnyArc {
    /// The registered handle of this object's concrete class
    fn type_handle(&self) -> TypeHandle;

    /// The registered name of this object's concrete class
    fn type_name(&self) -> String {
        self.type_handle().to_string()
    }

    /// Check if this object's class is `handle` or derives from it
    fn is_of_type(&self, handle: TypeHandle) -> bool {
        TypeRegistry::global().is_derived_from(self.type_handle(), handle)
    }
}

/// A class with a statically known type handle.
pub trait StaticTyped {
    /// The handle of this class in the global registry
    fn class_type() -> TypeHandle;
}

/// The root of the class hierarchy.
pub fn typed_object_type() -> TypeHandle {
    static HANDLE: OnceLock<TypeHandle> = OnceLock::new();
    *HANDLE.get_or_init(|| register_base("TypedObject", &[]))
}

pub(crate) fn register_base(name: &str, parents: &[TypeHandle]) -> TypeHandle {
    TypeRegistry::global()
        .register_type(name, parents)
        .unwrap_or_else(|err| {
            error!(type_name = name, %err, "failed to register base type");
            TypeHandle::NONE
        })
}

/// Recover the concrete type of a shared typed object.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use paramvalue::{downcast_arc, ParamString, ParamVecBase2i, TypedObject};
///
/// let object: Arc<dyn TypedObject> = Arc::new(ParamString::new("hi".to_string()));
/// let param = downcast_arc::<ParamString>(object.clone()).unwrap();
/// assert_eq!(param.value(), "hi");
///
/// assert!(downcast_arc::<ParamVecBase2i>(object).is_err());
/// ```
pub fn downcast_arc<T>(object: Arc<dyn TypedObject>) -> Result<Arc<T>>
where
    T: TypedObject + StaticTyped,
{
    let got = object.type_handle();
    object
        .into_any_arc()
        .downcast::<T>()
        .map_err(|_| ParamError::TypeMismatch {
            expected: T::class_type().to_string(),
            got: got.to_string(),
        })
}
