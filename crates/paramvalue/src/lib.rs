//! # paramvalue
//!
//! Typed parameter values for an engine's runtime type system.
//!
//! A [`ParamValue<T>`] stores a single value of one of a fixed catalogue of
//! payload types (strings, numeric vectors, numeric matrices), and a
//! [`ParamTypedRefCount`] shares ownership of an arbitrary reference-counted
//! [`TypedObject`]. Both participate in a process-wide [`TypeRegistry`] so
//! their concrete type can be queried and printed at runtime.
//!
//! ## Architecture
//!
//! - **Types**: [`TypeHandle`] tokens issued by a [`TypeRegistry`]
//! - **Math**: small fixed-size vectors and matrices used as payloads
//! - **Params**: the value holders and the shared typed reference
//!
//! ```
//! use std::sync::Arc;
//! use paramvalue::{ParamString, ParamTypedRefCount};
//!
//! let empty = ParamTypedRefCount::empty();
//! assert_eq!(empty.to_string(), "(empty)");
//!
//! let held = ParamTypedRefCount::new(Arc::new(ParamString::new("hello".to_string())));
//! assert_eq!(held.to_string(), "ParamValue<string>");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod math;
pub mod param;
pub mod types;

// Re-export main types
pub use error::{ParamError, Result};
pub use math::{
    LMatrix3d, LMatrix3f, LMatrix4d, LMatrix4f, LVecBase2d, LVecBase2f, LVecBase2i, LVecBase3d,
    LVecBase3f, LVecBase3i, LVecBase4d, LVecBase4f, LVecBase4i, Matrix, Scalar, VecBase,
};
pub use param::{
    init_types, param_value_base_type, ParamMatrix3d, ParamMatrix3f, ParamMatrix4d,
    ParamMatrix4f, ParamPayload, ParamString, ParamTypedRefCount, ParamValue, ParamValueBase,
    ParamVecBase2d, ParamVecBase2f, ParamVecBase2i, ParamVecBase3d, ParamVecBase3f,
    ParamVecBase3i, ParamVecBase4d, ParamVecBase4f, ParamVecBase4i, ParamWstring, WideString,
};
pub use types::{
    downcast_arc, typed_object_type, AsAnyArc, RegistryConfig, StaticTyped, TypeHandle,
    TypeRegistry, TypedObject,
};

/// paramvalue version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
