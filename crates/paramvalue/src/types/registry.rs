//! Registry mapping type handles to names and class hierarchy

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dashmap::{DashMap, DashSet};
use indexmap::IndexMap;
use tracing::{debug, error, warn};

use super::TypeHandle;
use crate::error::{ParamError, Result};

/// Name of the reserved handle at index 0.
const NONE_NAME: &str = "none";

static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();

/// Configuration for a [`TypeRegistry`].
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Reject a class whose name is already owned by a different class.
    ///
    /// When unset, the newcomer is aliased to the existing handle instead.
    pub strict_names: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { strict_names: true }
    }
}

impl RegistryConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that aliases conflicting class names.
    pub fn lenient() -> Self {
        Self {
            strict_names: false,
        }
    }
}

#[derive(Debug)]
struct TypeRecord {
    /// The Rust type bound to this entry, if any
    rust_type: Option<TypeId>,

    /// Direct parent classes
    parents: Vec<TypeHandle>,
}

/// The runtime type registry.
///
/// Every entry is keyed by its name; the entry's position in insertion order
/// is its [`TypeHandle`]. Entries are never removed, so handles stay valid
/// for the life of the registry. Index 0 is always the `none` type.
///
/// # Example
///
/// ```
/// use paramvalue::{TypeHandle, TypeRegistry};
///
/// let registry = TypeRegistry::new();
/// let shape = registry.register_type("Shape", &[]).unwrap();
/// let circle = registry.register_type("Circle", &[shape]).unwrap();
///
/// assert_eq!(registry.name(circle).as_deref(), Some("Circle"));
/// assert!(registry.is_derived_from(circle, shape));
/// assert!(!registry.is_derived_from(shape, circle));
/// assert_eq!(registry.find_type("none"), Some(TypeHandle::NONE));
/// ```
#[derive(Debug)]
pub struct TypeRegistry {
    config: RegistryConfig,

    /// Records in handle order
    records: RwLock<IndexMap<String, TypeRecord>>,

    /// Fast path from Rust type to handle
    classes: DashMap<TypeId, TypeHandle>,

    /// Classes whose lazy registration already failed
    failed: DashSet<TypeId>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a registry holding only the `none` type.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry with a custom configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut records = IndexMap::new();
        records.insert(
            NONE_NAME.to_string(),
            TypeRecord {
                rust_type: None,
                parents: Vec::new(),
            },
        );
        Self {
            config,
            records: RwLock::new(records),
            classes: DashMap::new(),
            failed: DashSet::new(),
        }
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static TypeRegistry {
        GLOBAL.get_or_init(TypeRegistry::new)
    }

    /// This registry's configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, TypeRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, TypeRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Registration
    // ═══════════════════════════════════════════════════════════════════

    /// Register a type by name alone.
    ///
    /// Registering a name that already exists returns the existing handle;
    /// `parents` is ignored in that case.
    pub fn register_type(&self, name: &str, parents: &[TypeHandle]) -> Result<TypeHandle> {
        validate_name(name)?;
        let mut records = self.write();
        if let Some(index) = records.get_index_of(name) {
            return Ok(TypeHandle::from_index(index));
        }
        check_parents(&records, parents)?;
        Ok(insert(&mut records, name, None, parents))
    }

    /// Register the Rust type `C` under `name`.
    ///
    /// Idempotent per class: once `C` has a handle, later calls return it
    /// regardless of `name`. A name previously registered with
    /// [`register_type`](Self::register_type) is adopted by the class; the
    /// entry keeps the parents it was registered with and `parents` is
    /// ignored in that case. The reserved name `none` is rejected.
    pub fn register_class<C: Any>(&self, name: &str, parents: &[TypeHandle]) -> Result<TypeHandle> {
        let rust_type = TypeId::of::<C>();
        if let Some(handle) = self.handle_of::<C>() {
            return Ok(handle);
        }
        validate_name(name)?;
        if name == NONE_NAME {
            return Err(ParamError::InvalidTypeName(name.to_string()));
        }

        let mut records = self.write();
        // Another thread may have registered C while we waited for the lock
        if let Some(handle) = self.handle_of::<C>() {
            return Ok(handle);
        }

        let handle = match records.get_full_mut(name) {
            Some((index, _, record)) if record.rust_type.is_none() => {
                record.rust_type = Some(rust_type);
                debug!(type_name = name, index, "class adopted registered type name");
                TypeHandle::from_index(index)
            }
            Some((index, _, _)) => {
                if self.config.strict_names {
                    return Err(ParamError::DuplicateTypeName {
                        name: name.to_string(),
                    });
                }
                warn!(type_name = name, index, "aliasing class to existing type name");
                TypeHandle::from_index(index)
            }
            None => {
                check_parents(&records, parents)?;
                insert(&mut records, name, Some(rust_type), parents)
            }
        };

        self.classes.insert(rust_type, handle);
        Ok(handle)
    }

    /// Return the handle for `C`, registering it on first use.
    ///
    /// `name` is only evaluated when `C` is not yet registered. A
    /// registration failure is logged once and yields [`TypeHandle::NONE`]
    /// from then on without retrying.
    pub fn class_handle<C: Any>(
        &self,
        name: impl FnOnce() -> String,
        parents: &[TypeHandle],
    ) -> TypeHandle {
        if let Some(handle) = self.handle_of::<C>() {
            return handle;
        }
        let rust_type = TypeId::of::<C>();
        if self.failed.contains(&rust_type) {
            return TypeHandle::NONE;
        }
        let name = name();
        match self.register_class::<C>(&name, parents) {
            Ok(handle) => handle,
            Err(err) => {
                if self.failed.insert(rust_type) {
                    error!(type_name = %name, %err, "failed to register class");
                }
                TypeHandle::NONE
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════

    /// Look up the handle already registered for `C`.
    pub fn handle_of<C: Any>(&self) -> Option<TypeHandle> {
        self.classes.get(&TypeId::of::<C>()).map(|handle| *handle)
    }

    /// Look up a handle by name.
    pub fn find_type(&self, name: &str) -> Option<TypeHandle> {
        self.read().get_index_of(name).map(TypeHandle::from_index)
    }

    /// The registered name of `handle`.
    pub fn name(&self, handle: TypeHandle) -> Option<String> {
        self.read()
            .get_index(handle.index())
            .map(|(name, _)| name.clone())
    }

    /// Write the name of `handle` to `out`, or `none` if it is unknown.
    pub fn write_name(&self, handle: TypeHandle, out: &mut dyn fmt::Write) -> fmt::Result {
        match self.read().get_index(handle.index()) {
            Some((name, _)) => out.write_str(name),
            None => out.write_str(NONE_NAME),
        }
    }

    /// Direct parents of `handle`.
    pub fn parents(&self, handle: TypeHandle) -> Result<Vec<TypeHandle>> {
        self.read()
            .get_index(handle.index())
            .map(|(_, record)| record.parents.clone())
            .ok_or(ParamError::UnknownType(handle))
    }

    /// Check if `child` is `base` or inherits from it.
    pub fn is_derived_from(&self, child: TypeHandle, base: TypeHandle) -> bool {
        let records = self.read();
        let mut visited = vec![false; records.len()];
        let mut pending = vec![child];
        while let Some(handle) = pending.pop() {
            if handle == base {
                return true;
            }
            let Some((_, record)) = records.get_index(handle.index()) else {
                continue;
            };
            // Shared ancestors are reachable along several paths
            if std::mem::replace(&mut visited[handle.index()], true) {
                continue;
            }
            pending.extend(record.parents.iter().copied());
        }
        false
    }

    /// Number of registered types, including `none`.
    pub fn num_types(&self) -> usize {
        self.read().len()
    }

    /// All registered names in handle order.
    pub fn type_names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ParamError::InvalidTypeName(name.to_string()));
    }
    Ok(())
}

fn check_parents(records: &IndexMap<String, TypeRecord>, parents: &[TypeHandle]) -> Result<()> {
    match parents.iter().find(|parent| parent.index() >= records.len()) {
        Some(parent) => Err(ParamError::UnknownType(*parent)),
        None => Ok(()),
    }
}

fn insert(
    records: &mut IndexMap<String, TypeRecord>,
    name: &str,
    rust_type: Option<TypeId>,
    parents: &[TypeHandle],
) -> TypeHandle {
    let (index, _) = records.insert_full(
        name.to_string(),
        TypeRecord {
            rust_type,
            parents: parents.to_vec(),
        },
    );
    debug!(type_name = name, index, parents = parents.len(), "registered type");
    TypeHandle::from_index(index)
}
