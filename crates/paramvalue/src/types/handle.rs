//! Type handle tokens

use std::fmt;

use super::TypeRegistry;

/// A process-wide token identifying a registered class.
///
/// Handles are issued by a [`TypeRegistry`] and are only meaningful for the
/// registry that issued them. `Display` resolves the name through
/// [`TypeRegistry::global`], which is where every [`TypedObject`] registers
/// its class.
///
/// [`TypedObject`]: super::TypedObject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeHandle(u32);

impl TypeHandle {
    /// The reserved handle for "no type".
    pub const NONE: TypeHandle = TypeHandle(0);

    pub(crate) fn from_index(index: usize) -> Self {
        TypeHandle(index as u32)
    }

    /// Position of this handle in its registry.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is the reserved "no type" handle
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// The registered name of this handle in the global registry.
    pub fn name(self) -> String {
        self.to_string()
    }
}

impl Default for TypeHandle {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TypeRegistry::global().write_name(*self, f)
    }
}
