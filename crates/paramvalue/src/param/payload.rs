//! Payload types a `ParamValue` may hold

use std::char::{decode_utf16, REPLACEMENT_CHARACTER};
use std::fmt;

use crate::math::{
    LMatrix3d, LMatrix3f, LMatrix4d, LMatrix4f, LVecBase2d, LVecBase2f, LVecBase2i, LVecBase3d,
    LVecBase3f, LVecBase3i, LVecBase4d, LVecBase4f, LVecBase4i,
};
use crate::types::{StaticTyped, TypeHandle};

use super::ParamValue;

/// A value type supported by [`ParamValue`].
///
/// Only the fixed catalogue below implements this trait.
pub trait ParamPayload:
    Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The payload's name in the type registry
    const TYPE_NAME: &'static str;

    /// Write the value for diagnostics
    fn output(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", self)
    }
}

/// A string of UTF-16 code units.
///
/// Output converts to UTF-8, replacing unpaired surrogates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WideString(Vec<u16>);

impl WideString {
    /// Create an empty wide string
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap raw code units
    pub fn from_units(units: Vec<u16>) -> Self {
        Self(units)
    }

    /// The raw code units
    pub fn units(&self) -> &[u16] {
        &self.0
    }

    /// Number of code units
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no code units
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode to UTF-8
    pub fn to_string_lossy(&self) -> String {
        self.to_string()
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self {
        Self(s.encode_utf16().collect())
    }
}

impl From<String> for WideString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in decode_utf16(self.0.iter().copied()) {
            fmt::Write::write_char(f, c.unwrap_or(REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

macro_rules! payload_catalogue {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl ParamPayload for $ty {
                const TYPE_NAME: &'static str = $name;
            }
        )*

        /// Register `ParamValue<T>` for every catalogue payload.
        pub(crate) fn register_catalogue() -> Vec<TypeHandle> {
            vec![$(<ParamValue<$ty> as StaticTyped>::class_type()),*]
        }
    };
}

payload_catalogue! {
    String => "string",
    WideString => "wstring",
    LVecBase2d => "LVecBase2d",
    LVecBase2f => "LVecBase2f",
    LVecBase2i => "LVecBase2i",
    LVecBase3d => "LVecBase3d",
    LVecBase3f => "LVecBase3f",
    LVecBase3i => "LVecBase3i",
    LVecBase4d => "LVecBase4d",
    LVecBase4f => "LVecBase4f",
    LVecBase4i => "LVecBase4i",
    LMatrix3d => "LMatrix3d",
    LMatrix3f => "LMatrix3f",
    LMatrix4d => "LMatrix4d",
    LMatrix4f => "LMatrix4f",
}
