//! Type registry tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use paramvalue::*;
use pretty_assertions::assert_eq;

struct Shape;
struct Circle;
struct Square;

// ═══════════════════════════════════════════════════════════════════════
// Registration
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_register_type_is_idempotent_by_name() {
    let registry = TypeRegistry::new();
    let first = registry.register_type("Widget", &[]).unwrap();
    let second = registry.register_type("Widget", &[]).unwrap();
    assert_eq!(first, second);
    assert_eq!(registry.num_types(), 2);
}

#[test]
fn test_handles_follow_registration_order() {
    let registry = TypeRegistry::new();
    let a = registry.register_type("A", &[]).unwrap();
    let b = registry.register_type("B", &[]).unwrap();
    assert_eq!(a.index(), 1);
    assert_eq!(b.index(), 2);
    assert_eq!(registry.type_names(), vec!["none", "A", "B"]);
}

#[test]
fn test_invalid_names_rejected() {
    let registry = TypeRegistry::new();
    assert_eq!(
        registry.register_type("", &[]),
        Err(ParamError::InvalidTypeName(String::new()))
    );
    assert!(registry.register_class::<Shape>("   ", &[]).is_err());
    assert_eq!(registry.num_types(), 1);
}

#[test]
fn test_class_lookup() {
    let registry = TypeRegistry::new();
    assert_eq!(registry.handle_of::<Shape>(), None);

    let shape = registry.register_class::<Shape>("Shape", &[]).unwrap();
    assert_eq!(registry.handle_of::<Shape>(), Some(shape));
    assert_eq!(registry.find_type("Shape"), Some(shape));
    assert_eq!(registry.name(shape).as_deref(), Some("Shape"));
}

#[test]
fn test_class_handle_evaluates_name_once() {
    let registry = TypeRegistry::new();
    let first = registry.class_handle::<Shape>(|| "Shape".to_string(), &[]);
    let second = registry.class_handle::<Shape>(|| panic!("name evaluated twice"), &[]);
    assert_eq!(first, second);
}

#[test]
fn test_strict_conflict_yields_none_handle() {
    let registry = TypeRegistry::new();
    registry.register_class::<Circle>("Round", &[]).unwrap();
    let handle = registry.class_handle::<Square>(|| "Round".to_string(), &[]);
    assert_eq!(handle, TypeHandle::NONE);
    assert_eq!(registry.handle_of::<Square>(), None);
}

#[test]
fn test_failed_class_is_not_retried() {
    let registry = TypeRegistry::new();
    registry.register_class::<Circle>("Round", &[]).unwrap();

    let evaluations = AtomicUsize::new(0);
    for _ in 0..3 {
        let handle = registry.class_handle::<Square>(
            || {
                evaluations.fetch_add(1, Ordering::SeqCst);
                "Round".to_string()
            },
            &[],
        );
        assert_eq!(handle, TypeHandle::NONE);
    }
    assert_eq!(evaluations.load(Ordering::SeqCst), 1);
    assert_eq!(registry.num_types(), 2);
}

#[test]
fn test_lenient_registry_config() {
    let registry = TypeRegistry::with_config(RegistryConfig::lenient());
    assert!(!registry.config().strict_names);
    let circle = registry.register_class::<Circle>("Round", &[]).unwrap();
    let square = registry.class_handle::<Square>(|| "Round".to_string(), &[]);
    assert_eq!(circle, square);
}

// ═══════════════════════════════════════════════════════════════════════
// Hierarchy
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_derivation_is_reflexive_and_transitive() {
    let registry = TypeRegistry::new();
    let shape = registry.register_class::<Shape>("Shape", &[]).unwrap();
    let circle = registry.register_class::<Circle>("Circle", &[shape]).unwrap();
    let unit_circle = registry.register_type("UnitCircle", &[circle]).unwrap();

    assert!(registry.is_derived_from(shape, shape));
    assert!(registry.is_derived_from(unit_circle, shape));
    assert!(!registry.is_derived_from(shape, unit_circle));
    assert!(!registry.is_derived_from(circle, TypeHandle::NONE));
}

#[test]
fn test_multiple_parents() {
    let registry = TypeRegistry::new();
    let left = registry.register_type("Left", &[]).unwrap();
    let right = registry.register_type("Right", &[]).unwrap();
    let both = registry.register_type("Both", &[left, right]).unwrap();

    assert_eq!(registry.parents(both).unwrap(), vec![left, right]);
    assert!(registry.is_derived_from(both, left));
    assert!(registry.is_derived_from(both, right));
}

#[test]
fn test_stacked_diamonds() {
    let registry = TypeRegistry::new();
    let root = registry.register_type("Root", &[]).unwrap();
    let unrelated = registry.register_type("Unrelated", &[]).unwrap();

    // Each layer: two siblings sharing the previous top, joined by a new top
    let mut top = root;
    for layer in 0..64 {
        let left = registry
            .register_type(&format!("Left{layer}"), &[top])
            .unwrap();
        let right = registry
            .register_type(&format!("Right{layer}"), &[top])
            .unwrap();
        top = registry
            .register_type(&format!("Join{layer}"), &[left, right])
            .unwrap();
    }

    assert!(registry.is_derived_from(top, root));
    assert!(!registry.is_derived_from(top, unrelated));
    assert!(!registry.is_derived_from(root, top));
}

#[test]
fn test_parents_of_unknown_handle() {
    let registry = TypeRegistry::new();
    let other = TypeRegistry::new();
    let foreign = other.register_type("Foreign", &[]).unwrap();
    assert_eq!(registry.parents(foreign), Err(ParamError::UnknownType(foreign)));
}

// ═══════════════════════════════════════════════════════════════════════
// Concurrency
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_concurrent_class_registration() {
    let registry = TypeRegistry::new();
    let handles: Vec<TypeHandle> = thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| registry.class_handle::<Circle>(|| "Circle".to_string(), &[]))
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect()
    });

    assert!(handles.iter().all(|handle| *handle == handles[0]));
    assert!(!handles[0].is_none());
    assert_eq!(registry.num_types(), 2);
}

#[test]
fn test_global_registry_is_shared() {
    assert!(std::ptr::eq(TypeRegistry::global(), TypeRegistry::global()));
    assert_eq!(TypeRegistry::global().find_type("none"), Some(TypeHandle::NONE));
}
