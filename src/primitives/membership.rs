// ============================================================================
// spark-select - Selection Membership
// Pure "is this option selected" query plus the explicit canonicalize action
// ============================================================================
//
// Externally supplied payloads are often structurally equal to an option's
// value without being the same allocation. Membership is decided by deep
// equality; canonicalization then swaps the stored handle for the option's
// own handle so later identity checks hit the fast path. The swap is
// value-preserving and a second call is a no-op.
// ============================================================================

use std::rc::Rc;

use crate::core::types::{BoundValue, Choice, Mode};
use crate::reactivity::equality::{deep_equals, identity_equals, position_deep, same_payload};

// =============================================================================
// QUERY
// =============================================================================

/// Whether `option` is selected under `mode`. Never mutates.
///
/// A bound value whose shape disagrees with `mode` selects nothing.
pub fn is_selected<O: Choice>(mode: Mode, bound: &BoundValue<O::Value>, option: &O) -> bool {
    let target = option.value();
    match (mode, bound) {
        (Mode::Multiple, BoundValue::Multiple(entries)) => {
            entries.iter().any(|entry| same_payload(entry, target))
        }
        (Mode::Single, BoundValue::Single(Some(value))) => same_payload(value, target),
        _ => false,
    }
}

// =============================================================================
// CANONICALIZE
// =============================================================================

/// Outcome of [`canonicalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canonical {
    /// The bound value already holds the option's own handle.
    Identical,
    /// A deep-equal entry at `index` was replaced by the option's handle.
    Replaced { index: usize },
    /// The option is not selected.
    Absent,
}

impl Canonical {
    pub fn is_selected(self) -> bool {
        !matches!(self, Canonical::Absent)
    }
}

/// Replace a deep-equal but not identical stored payload with the option's
/// own handle, and report whether the option is selected.
pub fn canonicalize<O: Choice>(
    mode: Mode,
    bound: &mut BoundValue<O::Value>,
    option: &O,
) -> Canonical {
    let target = option.value();
    match (mode, bound) {
        (Mode::Multiple, BoundValue::Multiple(entries)) => {
            if entries.iter().any(|entry| identity_equals(entry, target)) {
                return Canonical::Identical;
            }
            match position_deep(entries, target) {
                Some(index) => {
                    entries[index] = Rc::clone(target);
                    tracing::trace!(index, "canonicalized bound entry");
                    Canonical::Replaced { index }
                }
                None => Canonical::Absent,
            }
        }
        (Mode::Single, BoundValue::Single(Some(value))) => {
            if identity_equals(value, target) {
                Canonical::Identical
            } else if deep_equals(value, target) {
                *value = Rc::clone(target);
                tracing::trace!(index = 0, "canonicalized bound entry");
                Canonical::Replaced { index: 0 }
            } else {
                Canonical::Absent
            }
        }
        _ => Canonical::Absent,
    }
}

/// Canonicalize against every option. Returns the number of swapped handles.
pub fn canonicalize_all<O: Choice>(
    mode: Mode,
    bound: &mut BoundValue<O::Value>,
    options: &[O],
) -> usize {
    let mut swapped = 0;
    for option in options {
        if let Canonical::Replaced { .. } = canonicalize(mode, bound, option) {
            swapped += 1;
        }
    }
    swapped
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SelectOption;

    #[derive(Debug, PartialEq)]
    struct City {
        id: u32,
        zip: String,
    }

    fn city(id: u32) -> SelectOption<City> {
        SelectOption::new(
            format!("City {id}"),
            City {
                id,
                zip: format!("{id:05}"),
            },
        )
    }

    #[test]
    fn multiple_identity_hit_needs_no_swap() {
        let option = city(1);
        let mut bound = BoundValue::Multiple(vec![option.value().clone()]);

        assert!(is_selected(Mode::Multiple, &bound, &option));
        assert_eq!(canonicalize(Mode::Multiple, &mut bound, &option), Canonical::Identical);
    }

    #[test]
    fn multiple_deep_equal_entry_is_swapped_in_place() {
        let a = city(1);
        let b = city(2);
        let mut bound = BoundValue::multiple([
            City { id: 1, zip: "00001".into() },
            City { id: 2, zip: "00002".into() },
        ]);

        assert!(is_selected(Mode::Multiple, &bound, &b));
        assert_eq!(
            canonicalize(Mode::Multiple, &mut bound, &b),
            Canonical::Replaced { index: 1 }
        );
        assert!(Rc::ptr_eq(&bound.entries()[1], b.value()));
        assert!(!Rc::ptr_eq(&bound.entries()[0], a.value()));

        // Second call is a no-op
        assert_eq!(canonicalize(Mode::Multiple, &mut bound, &b), Canonical::Identical);
    }

    #[test]
    fn single_zero_and_empty_string_are_selected() {
        let zero = SelectOption::new("Zero", 0);
        let mut bound = BoundValue::single(0);
        assert!(is_selected(Mode::Single, &bound, &zero));
        assert_eq!(
            canonicalize(Mode::Single, &mut bound, &zero),
            Canonical::Replaced { index: 0 }
        );

        let blank = SelectOption::new("Blank", String::new());
        let bound = BoundValue::single(String::new());
        assert!(is_selected(Mode::Single, &bound, &blank));
    }

    #[test]
    fn single_none_selects_nothing() {
        let zero = SelectOption::new("Zero", 0);
        let mut bound: BoundValue<i32> = BoundValue::Single(None);
        assert!(!is_selected(Mode::Single, &bound, &zero));
        assert_eq!(canonicalize(Mode::Single, &mut bound, &zero), Canonical::Absent);
    }

    #[test]
    fn shape_mismatch_selects_nothing() {
        let one = SelectOption::new("One", 1);
        let mut sequence = BoundValue::multiple([1]);
        let mut scalar = BoundValue::single(1);

        assert!(!is_selected(Mode::Single, &sequence, &one));
        assert!(!is_selected(Mode::Multiple, &scalar, &one));
        assert_eq!(canonicalize(Mode::Single, &mut sequence, &one), Canonical::Absent);
        assert_eq!(canonicalize(Mode::Multiple, &mut scalar, &one), Canonical::Absent);
    }

    #[test]
    fn canonicalize_all_counts_swaps() {
        let options = vec![city(1), city(2), city(3)];
        let mut bound = BoundValue::Multiple(vec![
            options[0].value().clone(),
            Rc::new(City { id: 3, zip: "00003".into() }),
        ]);

        assert_eq!(canonicalize_all(Mode::Multiple, &mut bound, &options), 1);
        assert_eq!(canonicalize_all(Mode::Multiple, &mut bound, &options), 0);
        assert!(Rc::ptr_eq(&bound.entries()[1], options[2].value()));
    }
}
