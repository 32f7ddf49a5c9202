// ============================================================================
// spark-select - Equality Functions
// Identity vs deep equality for shared value payloads
// ============================================================================

use std::rc::Rc;

// =============================================================================
// IDENTITY EQUALITY
// =============================================================================

/// Identity equality: both handles point at the same payload allocation.
///
/// # Example
/// ```
/// use std::rc::Rc;
/// use spark_select::reactivity::equality::identity_equals;
///
/// let a = Rc::new(vec![1, 2]);
/// let b = a.clone();
/// let c = Rc::new(vec![1, 2]);
///
/// assert!(identity_equals(&a, &b));
/// assert!(!identity_equals(&a, &c));
/// ```
pub fn identity_equals<V: ?Sized>(a: &Rc<V>, b: &Rc<V>) -> bool {
    Rc::ptr_eq(a, b)
}

// =============================================================================
// DEEP EQUALITY
// =============================================================================

/// Deep equality - `#[derive(PartialEq)]` already compares structurally,
/// so this is `PartialEq` on the payloads behind the handles.
pub fn deep_equals<V: PartialEq + ?Sized>(a: &Rc<V>, b: &Rc<V>) -> bool {
    **a == **b
}

/// Identity first, deep equality as the fallback.
pub fn same_payload<V: PartialEq + ?Sized>(a: &Rc<V>, b: &Rc<V>) -> bool {
    identity_equals(a, b) || deep_equals(a, b)
}

// =============================================================================
// SEARCHES
// =============================================================================

/// Index of the first entry identity-equal to `target`.
pub fn position_identical<V: ?Sized>(entries: &[Rc<V>], target: &Rc<V>) -> Option<usize> {
    entries.iter().position(|entry| identity_equals(entry, target))
}

/// Index of the first entry deep-equal to `target`.
pub fn position_deep<V: PartialEq + ?Sized>(entries: &[Rc<V>], target: &Rc<V>) -> Option<usize> {
    entries.iter().position(|entry| deep_equals(entry, target))
}

// =============================================================================
// TESTS
// =============================================================================
