// ============================================================================
// spark-select - External Change Reconciler
// Trailing-pop guard run after every bound value change
// ============================================================================
//
// In multiple mode, when fewer options are recognised as selected than there
// are entries in the bound value, trailing entries are dropped until the
// counts agree. This catches values pushed from outside that match no option
// and duplicate selections of the same option.
//
// The guard always removes from the end, even when the unmatched entry sits
// earlier in the sequence. A valid trailing entry can be lost that way.
// ============================================================================

use std::rc::Rc;

use crate::core::types::{BoundValue, Choice, Mode};
use crate::primitives::projection::selected_options;

/// Result of a reconciliation that changed the bound value.
#[derive(Debug, PartialEq)]
pub struct Reconciliation<V> {
    /// The trimmed bound value.
    pub value: BoundValue<V>,
    /// Removed payloads, in removal order (last entry first).
    pub removed: Vec<Rc<V>>,
}

/// Trim trailing entries until every remaining entry is accounted for.
///
/// Returns `None` in single mode, for scalar-shaped values, and when nothing
/// needs trimming.
pub fn reconcile<O: Choice>(
    mode: Mode,
    bound: &BoundValue<O::Value>,
    options: &[O],
) -> Option<Reconciliation<O::Value>> {
    if mode != Mode::Multiple || !bound.is_sequence() {
        return None;
    }

    let mut value = bound.clone();
    let mut removed = Vec::new();
    while selected_options(mode, &value, options).len() < value.len() {
        let BoundValue::Multiple(entries) = &mut value else {
            break;
        };
        match entries.pop() {
            Some(entry) => removed.push(entry),
            None => break,
        }
    }

    if removed.is_empty() {
        None
    } else {
        Some(Reconciliation { value, removed })
    }
}
