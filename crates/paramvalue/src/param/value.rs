//! The generic parameter value holder

use std::fmt;

use crate::math::{
    LMatrix3d, LMatrix3f, LMatrix4d, LMatrix4f, LVecBase2d, LVecBase2f, LVecBase2i, LVecBase3d,
    LVecBase3f, LVecBase3i, LVecBase4d, LVecBase4f, LVecBase4i,
};
use crate::types::{StaticTyped, TypeHandle, TypeRegistry, TypedObject};

use super::{param_value_base_type, ParamPayload, ParamValueBase, WideString};

/// Holds exactly one payload value.
///
/// Each instantiation is its own class in the type registry, named
/// `ParamValue<payload>`.
///
/// # Example
///
/// ```
/// use paramvalue::{LVecBase3f, ParamVecBase3f, TypedObject};
///
/// let mut param = ParamVecBase3f::new(LVecBase3f::xyz(1.0, 2.0, 3.0));
/// assert_eq!(param.type_name(), "ParamValue<LVecBase3f>");
/// assert_eq!(param.to_string(), "1 2 3");
///
/// param.set_value(LVecBase3f::splat(0.5));
/// assert_eq!(param.value(), &LVecBase3f::splat(0.5));
/// ```
#[derive(Debug, Clone)]
pub struct ParamValue<T: ParamPayload> {
    value: T,
}

impl<T: ParamPayload> ParamValue<T> {
    /// Wrap a value
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrow the stored value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replace the stored value
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Take the stored value back
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: ParamPayload> From<T> for ParamValue<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: ParamPayload> StaticTyped for ParamValue<T> {
    fn class_type() -> TypeHandle {
        TypeRegistry::global().class_handle::<Self>(
            || format!("ParamValue<{}>", T::TYPE_NAME),
            &[param_value_base_type()],
        )
    }
}

impl<T: ParamPayload> TypedObject for ParamValue<T> {
    fn type_handle(&self) -> TypeHandle {
        Self::class_type()
    }
}

impl<T: ParamPayload> ParamValueBase for ParamValue<T> {
    fn output(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.value.output(out)
    }
}

impl<T: ParamPayload> fmt::Display for ParamValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ParamValueBase::output(self, f)
    }
}

/// String parameter
pub type ParamString = ParamValue<String>;
/// Wide string parameter
pub type ParamWstring = ParamValue<WideString>;

/// 2-component f64 vector parameter
pub type ParamVecBase2d = ParamValue<LVecBase2d>;
/// 2-component f32 vector parameter
pub type ParamVecBase2f = ParamValue<LVecBase2f>;
/// 2-component i32 vector parameter
pub type ParamVecBase2i = ParamValue<LVecBase2i>;

/// 3-component f64 vector parameter
pub type ParamVecBase3d = ParamValue<LVecBase3d>;
/// 3-component f32 vector parameter
pub type ParamVecBase3f = ParamValue<LVecBase3f>;
/// 3-component i32 vector parameter
pub type ParamVecBase3i = ParamValue<LVecBase3i>;

/// 4-component f64 vector parameter
pub type ParamVecBase4d = ParamValue<LVecBase4d>;
/// 4-component f32 vector parameter
pub type ParamVecBase4f = ParamValue<LVecBase4f>;
/// 4-component i32 vector parameter
pub type ParamVecBase4i = ParamValue<LVecBase4i>;

/// 3×3 f64 matrix parameter
pub type ParamMatrix3d = ParamValue<LMatrix3d>;
/// 3×3 f32 matrix parameter
pub type ParamMatrix3f = ParamValue<LMatrix3f>;

/// 4×4 f64 matrix parameter
pub type ParamMatrix4d = ParamValue<LMatrix4d>;
/// 4×4 f32 matrix parameter
pub type ParamMatrix4f = ParamValue<LMatrix4f>;
