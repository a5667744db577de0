//! Parameter holders: typed values and shared typed references

mod base;
mod payload;
mod typed_ref;
mod value;

pub use base::{param_value_base_type, ParamValueBase};
pub use payload::{ParamPayload, WideString};
pub use typed_ref::ParamTypedRefCount;
pub use value::{
    ParamMatrix3d, ParamMatrix3f, ParamMatrix4d, ParamMatrix4f, ParamString, ParamValue,
    ParamVecBase2d, ParamVecBase2f, ParamVecBase2i, ParamVecBase3d, ParamVecBase3f,
    ParamVecBase3i, ParamVecBase4d, ParamVecBase4f, ParamVecBase4i, ParamWstring,
};

use tracing::debug;

use crate::types::{typed_object_type, StaticTyped};

/// Register every parameter class with the global registry.
///
/// Classes also register lazily on first use; calling this up front fixes
/// their handle order. Safe to call more than once.
pub fn init_types() {
    typed_object_type();
    param_value_base_type();
    ParamTypedRefCount::class_type();
    let catalogue = payload::register_catalogue();
    debug!(classes = catalogue.len(), "parameter types initialized");
}
