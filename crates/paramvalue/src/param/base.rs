//! Type-erased base shared by every parameter holder

use std::fmt;
use std::sync::OnceLock;

use crate::types::{register_base, typed_object_type, TypeHandle, TypeRegistry, TypedObject};

/// Behavior common to all parameter holders.
///
/// Implementors release whatever they own when dropped; there is no
/// explicit teardown.
pub trait ParamValueBase: TypedObject {
    /// Write a short human-readable description.
    ///
    /// The default writes the implementor's type name.
    fn output(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        TypeRegistry::global().write_name(self.type_handle(), out)
    }
}

/// The registered handle of the `ParamValueBase` class.
pub fn param_value_base_type() -> TypeHandle {
    static HANDLE: OnceLock<TypeHandle> = OnceLock::new();
    *HANDLE.get_or_init(|| register_base("ParamValueBase", &[typed_object_type()]))
}

impl fmt::Display for dyn ParamValueBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.output(f)
    }
}
