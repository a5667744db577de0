//! Runtime type identification: handles, the registry, and typed objects

mod handle;
mod registry;
mod typed;

pub use handle::TypeHandle;
pub use registry::{RegistryConfig, TypeRegistry};
pub use typed::{downcast_arc, typed_object_type, AsAnyArc, StaticTyped, TypedObject};

pub(crate) use typed::register_base;
