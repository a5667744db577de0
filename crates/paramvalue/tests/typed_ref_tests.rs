//! Shared typed reference tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use paramvalue::*;
use pretty_assertions::assert_eq;

/// Counts how many times it has been dropped.
#[derive(Debug)]
struct Probe {
    drops: Arc<AtomicUsize>,
}

impl Probe {
    fn new(drops: &Arc<AtomicUsize>) -> Arc<Self> {
        Arc::new(Self {
            drops: Arc::clone(drops),
        })
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl StaticTyped for Probe {
    fn class_type() -> TypeHandle {
        TypeRegistry::global().class_handle::<Self>(|| "Foo".to_string(), &[typed_object_type()])
    }
}

impl TypedObject for Probe {
    fn type_handle(&self) -> TypeHandle {
        Self::class_type()
    }
}

fn render(wrapper: &ParamTypedRefCount) -> String {
    let mut out = String::new();
    wrapper.output(&mut out).unwrap();
    out
}

// ═══════════════════════════════════════════════════════════════════════
// Diagnostic Output
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_outputs_placeholder() {
    let wrapper = ParamTypedRefCount::empty();
    assert_eq!(render(&wrapper), "(empty)");
    assert_eq!(wrapper.to_string(), "(empty)");
}

#[test]
fn test_held_object_outputs_type_name() {
    let drops = Arc::new(AtomicUsize::new(0));
    let wrapper = ParamTypedRefCount::new(Probe::new(&drops));
    assert_eq!(render(&wrapper), "Foo");
}

#[test]
fn test_held_param_outputs_param_class_name() {
    let wrapper = ParamTypedRefCount::new(Arc::new(ParamVecBase2i::new(LVecBase2i::xy(1, 2))));
    assert_eq!(wrapper.to_string(), "ParamValue<LVecBase2i>");
}

#[test]
fn test_output_appends_to_sink() {
    let wrapper = ParamTypedRefCount::empty();
    let mut out = String::from("value=");
    wrapper.output(&mut out).unwrap();
    assert_eq!(out, "value=(empty)");
}

#[test]
fn test_wrapper_is_itself_typed() {
    let wrapper = ParamTypedRefCount::empty();
    assert_eq!(wrapper.type_name(), "ParamTypedRefCount");
    assert!(wrapper.is_of_type(param_value_base_type()));

    let nested = ParamTypedRefCount::new(Arc::new(wrapper));
    assert_eq!(nested.to_string(), "ParamTypedRefCount");
}

// ═══════════════════════════════════════════════════════════════════════
// Ownership
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_sole_owner_drop_destroys_referent() {
    let drops = Arc::new(AtomicUsize::new(0));
    let wrapper = ParamTypedRefCount::new(Probe::new(&drops));
    assert_eq!(drops.load(Ordering::SeqCst), 0);

    drop(wrapper);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_shared_owner_drop_keeps_referent() {
    let drops = Arc::new(AtomicUsize::new(0));
    let probe = Probe::new(&drops);
    let wrapper = ParamTypedRefCount::new(probe.clone());

    drop(wrapper);
    assert_eq!(drops.load(Ordering::SeqCst), 0);
    assert_eq!(probe.type_name(), "Foo");
    assert_eq!(Arc::strong_count(&probe), 1);

    drop(probe);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_cloned_wrappers_share_referent() {
    let drops = Arc::new(AtomicUsize::new(0));
    let first = ParamTypedRefCount::new(Probe::new(&drops));
    let second = first.clone();

    drop(first);
    assert_eq!(drops.load(Ordering::SeqCst), 0);
    assert_eq!(second.to_string(), "Foo");

    drop(second);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_empty_then_held_then_dropped_scenario() {
    let empty = ParamTypedRefCount::empty();
    assert_eq!(empty.to_string(), "(empty)");

    let drops = Arc::new(AtomicUsize::new(0));
    let wrapper = ParamTypedRefCount::new(Probe::new(&drops));
    assert_eq!(wrapper.to_string(), "Foo");

    drop(wrapper);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

// ═══════════════════════════════════════════════════════════════════════
// Downcasting
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_downcast_to_concrete_type() {
    let drops = Arc::new(AtomicUsize::new(0));
    let probe = Probe::new(&drops);
    let wrapper = ParamTypedRefCount::new(probe.clone());

    let recovered = wrapper.downcast::<Probe>().unwrap();
    assert!(Arc::ptr_eq(&recovered, &probe));
    assert_eq!(wrapper.value_type(), Probe::class_type());
}

#[test]
fn test_downcast_wrong_type() {
    let drops = Arc::new(AtomicUsize::new(0));
    let wrapper = ParamTypedRefCount::new(Probe::new(&drops));

    let err = wrapper.downcast::<ParamString>().unwrap_err();
    assert_eq!(
        err,
        ParamError::TypeMismatch {
            expected: "ParamValue<string>".to_string(),
            got: "Foo".to_string(),
        }
    );
}

#[test]
fn test_downcast_empty() {
    let err = ParamTypedRefCount::empty()
        .downcast::<Probe>()
        .unwrap_err();
    assert_eq!(err, ParamError::EmptyReference("Foo".to_string()));
    assert_eq!(err.to_string(), "Empty reference: expected Foo");
}

#[test]
fn test_from_option() {
    let drops = Arc::new(AtomicUsize::new(0));
    let some: Option<Arc<dyn TypedObject>> = Some(Probe::new(&drops));
    assert!(!ParamTypedRefCount::from(some).is_empty());
    assert!(ParamTypedRefCount::from(None::<Arc<dyn TypedObject>>).is_empty());
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}
