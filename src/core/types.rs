// ============================================================================
// spark-select - Type Definitions
// Option records, selection mode and the externally bound value
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

// =============================================================================
// CHOICE TRAIT
// =============================================================================
//
// The engine never looks inside an option except through this trait:
// - `field(track_by)` yields the text used for search and display
// - `value()` yields the payload used as selection identity
//
// Payloads are shared through `Rc` so the engine can distinguish identity
// (`Rc::ptr_eq`) from deep structural equality (`PartialEq`).
// =============================================================================

/// A selectable option.
pub trait Choice {
    /// The payload stored in the bound value when this option is selected.
    type Value: PartialEq + fmt::Debug;

    /// Look up a key field by name. `None` if the option has no such field.
    fn field(&self, name: &str) -> Option<&str>;

    /// The option's value payload.
    fn value(&self) -> &Rc<Self::Value>;
}

// =============================================================================
// SELECT OPTION
// =============================================================================

/// Stock option record: a display name, optional extra searchable
/// attributes and a shared value payload.
///
/// # Example
///
/// ```
/// use spark_select::{Choice, SelectOption};
///
/// let option = SelectOption::new("Berlin", 10).with_attr("country", "DE");
///
/// assert_eq!(option.field("name"), Some("Berlin"));
/// assert_eq!(option.field("country"), Some("DE"));
/// assert_eq!(option.field("zip"), None);
/// assert_eq!(**option.value(), 10);
/// ```
#[derive(Debug, PartialEq)]
pub struct SelectOption<V> {
    name: String,
    attrs: BTreeMap<String, String>,
    value: Rc<V>,
}

impl<V> Clone for SelectOption<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            attrs: self.attrs.clone(),
            value: self.value.clone(),
        }
    }
}

impl<V> SelectOption<V> {
    /// Key under which [`SelectOption::name`] is exposed to `track_by`.
    pub const NAME_FIELD: &'static str = "name";

    /// Create an option owning a fresh value payload.
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self::from_shared(name, Rc::new(value))
    }

    /// Create an option around an existing payload handle.
    pub fn from_shared(name: impl Into<String>, value: Rc<V>) -> Self {
        Self {
            name: name.into(),
            attrs: BTreeMap::new(),
            value,
        }
    }

    /// Attach an extra attribute usable as a `track_by` field.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<V: PartialEq + fmt::Debug> Choice for SelectOption<V> {
    type Value = V;

    fn field(&self, name: &str) -> Option<&str> {
        if name == Self::NAME_FIELD {
            Some(&self.name)
        } else {
            self.attrs.get(name).map(String::as_str)
        }
    }

    fn value(&self) -> &Rc<V> {
        &self.value
    }
}

// =============================================================================
// MODE
// =============================================================================

/// Whether the control holds one value or an ordered list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Single,
    Multiple,
}

impl Mode {
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple { Mode::Multiple } else { Mode::Single }
    }

    pub fn is_multiple(self) -> bool {
        self == Mode::Multiple
    }
}

// =============================================================================
// BOUND VALUE
// =============================================================================

/// The externally owned current selection.
///
/// `Single(Some(_))` is a real selection for every payload, including
/// falsy-looking scalars such as `0` or `""`. Only `Single(None)` means
/// "nothing selected".
///
/// Equality is deep: two bound values are equal when their payloads are
/// structurally equal, regardless of `Rc` identity.
#[derive(Debug, PartialEq)]
pub enum BoundValue<V> {
    Single(Option<Rc<V>>),
    Multiple(Vec<Rc<V>>),
}

impl<V> Clone for BoundValue<V> {
    fn clone(&self) -> Self {
        match self {
            BoundValue::Single(value) => BoundValue::Single(value.clone()),
            BoundValue::Multiple(entries) => BoundValue::Multiple(entries.clone()),
        }
    }
}

impl<V> BoundValue<V> {
    /// The empty value for a mode: `Single(None)` or `Multiple([])`.
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Single => BoundValue::Single(None),
            Mode::Multiple => BoundValue::Multiple(Vec::new()),
        }
    }

    /// A single-mode value holding a fresh payload.
    pub fn single(value: V) -> Self {
        BoundValue::Single(Some(Rc::new(value)))
    }

    /// A multiple-mode value holding fresh payloads.
    pub fn multiple(values: impl IntoIterator<Item = V>) -> Self {
        BoundValue::Multiple(values.into_iter().map(Rc::new).collect())
    }

    /// Whether the value is sequence-shaped.
    pub fn is_sequence(&self) -> bool {
        matches!(self, BoundValue::Multiple(_))
    }

    /// Whether the shape matches what `mode` requires.
    pub fn fits(&self, mode: Mode) -> bool {
        self.is_sequence() == mode.is_multiple()
    }

    /// The stored payloads as a slice (zero or one entry in single shape).
    pub fn entries(&self) -> &[Rc<V>] {
        match self {
            BoundValue::Single(value) => value.as_slice(),
            BoundValue::Multiple(entries) => entries.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
