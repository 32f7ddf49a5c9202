// ============================================================================
// spark-select - Selection Mutators
// select / deselect / toggle as intents the engine applies
// ============================================================================
//
// Mutators never touch the bound value they are given. They return the value
// that should replace it together with the notifications to emit, in order.
// ============================================================================

use std::rc::Rc;

use crate::core::config::SelectConfig;
use crate::core::types::{BoundValue, Choice, Mode};
use crate::primitives::events::SelectEvent;
use crate::primitives::membership::is_selected;
use crate::reactivity::equality::position_identical;

// =============================================================================
// INTENT
// =============================================================================

/// A pending mutation of the bound value.
#[derive(Debug, PartialEq)]
pub struct Intent<O: Choice> {
    /// Replacement bound value.
    pub value: BoundValue<O::Value>,
    /// Notifications to emit after applying `value`, in order.
    pub events: Vec<SelectEvent<O>>,
    /// Whether the host should deactivate (close) the control.
    pub deactivate: bool,
}

// =============================================================================
// SELECT / DESELECT
// =============================================================================

/// Select `option`: append its payload (multiple) or replace the value (single).
pub fn select<O: Choice + Clone>(
    config: &SelectConfig,
    bound: &BoundValue<O::Value>,
    option: &O,
) -> Intent<O> {
    let payload = Rc::clone(option.value());
    let value = match config.mode() {
        Mode::Multiple => {
            let mut entries = bound.entries().to_vec();
            entries.push(payload);
            BoundValue::Multiple(entries)
        }
        Mode::Single => BoundValue::Single(Some(payload)),
    };

    tracing::trace!(mode = ?config.mode(), len = value.len(), "select");
    Intent {
        events: vec![
            SelectEvent::Select(option.clone()),
            SelectEvent::BoundValueChanged(value.clone()),
        ],
        value,
        deactivate: config.close_on_select,
    }
}

/// Deselect `option`: remove its identity-equal entry (multiple) or clear
/// the value (single).
///
/// In multiple mode the stored entry must already be canonical. Returns
/// `None` when no entry holds the option's own payload handle.
pub fn deselect<O: Choice + Clone>(
    config: &SelectConfig,
    bound: &BoundValue<O::Value>,
    option: &O,
) -> Option<Intent<O>> {
    let value = match config.mode() {
        Mode::Multiple => {
            let mut entries = bound.entries().to_vec();
            let index = position_identical(&entries, option.value())?;
            entries.remove(index);
            BoundValue::Multiple(entries)
        }
        Mode::Single => BoundValue::Single(None),
    };

    tracing::trace!(mode = ?config.mode(), len = value.len(), "deselect");
    Some(Intent {
        events: vec![
            SelectEvent::Deselect(option.clone()),
            SelectEvent::BoundValueChanged(value.clone()),
        ],
        value,
        deactivate: false,
    })
}

/// Deselect when selected, select otherwise.
pub fn toggle<O: Choice + Clone>(
    config: &SelectConfig,
    bound: &BoundValue<O::Value>,
    option: &O,
) -> Option<Intent<O>> {
    if is_selected(config.mode(), bound, option) {
        deselect(config, bound, option)
    } else {
        Some(select(config, bound, option))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SelectOption;

    #[test]
    fn multiple_select_appends_and_emits_in_order() {
        let config = SelectConfig::multiple().with_close_on_select(false);
        let a = SelectOption::new("A", 1);
        let b = SelectOption::new("B", 2);

        let first = select(&config, &BoundValue::Multiple(Vec::new()), &a);
        let second = select(&config, &first.value, &b);

        assert_eq!(second.value, BoundValue::multiple([1, 2]));
        assert_eq!(
            second.events,
            vec![
                SelectEvent::Select(b.clone()),
                SelectEvent::BoundValueChanged(BoundValue::multiple([1, 2])),
            ]
        );
        assert!(!second.deactivate);
        assert!(Rc::ptr_eq(&second.value.entries()[0], a.value()));
    }

    #[test]
    fn single_select_replaces_and_requests_close() {
        let config = SelectConfig::single();
        let b = SelectOption::new("B", 2);

        let intent = select(&config, &BoundValue::single(1), &b);
        assert_eq!(intent.value, BoundValue::single(2));
        assert!(intent.deactivate);
    }

    #[test]
    fn multiple_deselect_removes_identity_match_only() {
        let config = SelectConfig::multiple();
        let a = SelectOption::new("A", 1);
        let b = SelectOption::new("B", 2);
        let bound = BoundValue::Multiple(vec![a.value().clone(), b.value().clone()]);

        let intent = deselect(&config, &bound, &a).unwrap();
        assert_eq!(intent.value, BoundValue::multiple([2]));
        assert_eq!(intent.events[0], SelectEvent::Deselect(a.clone()));
        assert_eq!(intent.events[1].name(), "bound-value-changed");

        // Deep-equal but not canonical: nothing to remove
        let foreign = BoundValue::multiple([1]);
        assert!(deselect(&config, &foreign, &a).is_none());
    }

    #[test]
    fn single_deselect_clears() {
        let config = SelectConfig::single();
        let a = SelectOption::new("A", 1);
        let intent = deselect(&config, &BoundValue::Single(Some(a.value().clone())), &a).unwrap();
        assert_eq!(intent.value, BoundValue::Single(None));
    }

    #[test]
    fn toggle_flips_membership() {
        let config = SelectConfig::multiple();
        let a = SelectOption::new("A", 1);

        let on = toggle(&config, &BoundValue::Multiple(Vec::new()), &a).unwrap();
        assert_eq!(on.events[0].name(), "select");

        let off = toggle(&config, &on.value, &a).unwrap();
        assert_eq!(off.events[0].name(), "deselect");
        assert!(off.value.is_empty());
    }
}
