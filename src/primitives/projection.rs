// ============================================================================
// spark-select - Selected Options Projection
// The selected-option view and the self-heal repair for illegal bound values
// ============================================================================
//
// `selected_options` is a pure read. Correcting an illegal bound value is a
// separate step (`repair`) that the engine invokes explicitly, so reading the
// projection never writes to its own input.
// ============================================================================

use std::rc::Rc;

use crate::core::types::{BoundValue, Choice, Mode};
use crate::primitives::membership::is_selected;

// =============================================================================
// SELECTED OPTIONS
// =============================================================================

/// The options currently recognised as selected.
pub enum SelectedOptions<'a, O> {
    /// Single mode: the first matching option, if any.
    Single(Option<&'a O>),
    /// Multiple mode: every matching option, in option-list order.
    Multiple(Vec<&'a O>),
}

impl<O> Clone for SelectedOptions<'_, O> {
    fn clone(&self) -> Self {
        match self {
            SelectedOptions::Single(option) => SelectedOptions::Single(*option),
            SelectedOptions::Multiple(options) => SelectedOptions::Multiple(options.clone()),
        }
    }
}

impl<O: std::fmt::Debug> std::fmt::Debug for SelectedOptions<'_, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectedOptions::Single(option) => f.debug_tuple("Single").field(option).finish(),
            SelectedOptions::Multiple(options) => f.debug_tuple("Multiple").field(options).finish(),
        }
    }
}

impl<'a, O> SelectedOptions<'a, O> {
    pub fn len(&self) -> usize {
        match self {
            SelectedOptions::Single(option) => usize::from(option.is_some()),
            SelectedOptions::Multiple(options) => options.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The selected options as a slice, in option-list order.
    pub fn as_slice(&self) -> &[&'a O] {
        match self {
            SelectedOptions::Single(option) => option.as_slice(),
            SelectedOptions::Multiple(options) => options.as_slice(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a O> + '_ {
        self.as_slice().iter().copied()
    }

    /// The single-mode selection. `None` in multiple mode.
    pub fn as_single(&self) -> Option<&'a O> {
        match self {
            SelectedOptions::Single(option) => *option,
            SelectedOptions::Multiple(_) => None,
        }
    }
}

/// Scan `options` and collect the selected ones.
///
/// Single mode stops at the first match.
pub fn selected_options<'a, O: Choice>(
    mode: Mode,
    bound: &BoundValue<O::Value>,
    options: &'a [O],
) -> SelectedOptions<'a, O> {
    match mode {
        Mode::Multiple => SelectedOptions::Multiple(
            options
                .iter()
                .filter(|option| is_selected(mode, bound, *option))
                .collect(),
        ),
        Mode::Single => {
            SelectedOptions::Single(options.iter().find(|option| is_selected(mode, bound, *option)))
        }
    }
}

// =============================================================================
// REPAIR (SELF-HEAL)
// =============================================================================

/// Compute the corrected bound value if `bound` is illegal for `mode`.
///
/// - single mode, sequence shape: reset to `Single(None)`
/// - single mode, a value matching no option: reset to `Single(None)`
/// - multiple mode, scalar shape: wrap into a sequence
///
/// Returns `None` for legal values, including every value this function
/// produces, so applying a repair never triggers another one.
pub fn repair<O: Choice>(
    mode: Mode,
    bound: &BoundValue<O::Value>,
    options: &[O],
) -> Option<BoundValue<O::Value>> {
    match (mode, bound) {
        (Mode::Single, BoundValue::Multiple(_)) => Some(BoundValue::Single(None)),
        (Mode::Single, BoundValue::Single(Some(_))) => {
            if selected_options(mode, bound, options).is_empty() {
                Some(BoundValue::Single(None))
            } else {
                None
            }
        }
        (Mode::Multiple, BoundValue::Single(value)) => Some(BoundValue::Multiple(
            value.iter().map(Rc::clone).collect(),
        )),
        _ => None,
    }
}

// =============================================================================
// TESTS
// =============================================================================
