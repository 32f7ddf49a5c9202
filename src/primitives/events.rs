// ============================================================================
// spark-select - Notifications
// Events emitted to the host binding layer
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::types::{BoundValue, Choice};

// =============================================================================
// SELECT EVENT
// =============================================================================

/// A notification emitted after a user action or a correction.
#[derive(Debug, PartialEq)]
pub enum SelectEvent<O: Choice> {
    /// An option was selected.
    Select(O),
    /// An option was deselected.
    Deselect(O),
    /// The bound value was replaced. Carries the new value so the binding
    /// layer can propagate it back to its owner.
    BoundValueChanged(BoundValue<O::Value>),
}

impl<O: Choice + Clone> Clone for SelectEvent<O> {
    fn clone(&self) -> Self {
        match self {
            SelectEvent::Select(option) => SelectEvent::Select(option.clone()),
            SelectEvent::Deselect(option) => SelectEvent::Deselect(option.clone()),
            SelectEvent::BoundValueChanged(value) => SelectEvent::BoundValueChanged(value.clone()),
        }
    }
}

impl<O: Choice> SelectEvent<O> {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            SelectEvent::Select(_) => "select",
            SelectEvent::Deselect(_) => "deselect",
            SelectEvent::BoundValueChanged(_) => "bound-value-changed",
        }
    }
}

// =============================================================================
// LISTENER
// =============================================================================

/// Receives engine notifications. Implemented for every `FnMut(&SelectEvent<O>)`.
pub trait SelectListener<O: Choice> {
    fn on_event(&mut self, event: &SelectEvent<O>);
}

impl<O: Choice, F: FnMut(&SelectEvent<O>)> SelectListener<O> for F {
    fn on_event(&mut self, event: &SelectEvent<O>) {
        self(event)
    }
}

// =============================================================================
// EVENT LOG
// =============================================================================

/// Listener that records every event. Clones share the same log.
///
/// # Example
///
/// ```
/// use spark_select::{EventLog, SelectEngine, SelectConfig, select_options};
///
/// let options = select_options!["A" => 1];
/// let mut engine = SelectEngine::new(SelectConfig::multiple(), options.clone(), None).unwrap();
/// let log = EventLog::new();
/// engine.subscribe(log.clone());
///
/// engine.handle_option_click(&options[0]);
/// assert_eq!(log.names(), ["select", "bound-value-changed"]);
/// ```
pub struct EventLog<O: Choice> {
    events: Rc<RefCell<Vec<SelectEvent<O>>>>,
}

impl<O: Choice> Clone for EventLog<O> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<O: Choice> Default for EventLog<O> {
    fn default() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<O: Choice + Clone> EventLog<O> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<SelectEvent<O>> {
        self.events.borrow().clone()
    }

    /// Names of the recorded events, oldest first.
    pub fn names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(SelectEvent::name).collect()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<SelectEvent<O>> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl<O: Choice + Clone> SelectListener<O> for EventLog<O> {
    fn on_event(&mut self, event: &SelectEvent<O>) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SelectOption;

    #[test]
    fn closures_are_listeners() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listener = {
            let seen = seen.clone();
            move |event: &SelectEvent<SelectOption<i32>>| seen.borrow_mut().push(event.name())
        };

        listener.on_event(&SelectEvent::Select(SelectOption::new("A", 1)));
        listener.on_event(&SelectEvent::BoundValueChanged(BoundValue::single(1)));

        assert_eq!(*seen.borrow(), ["select", "bound-value-changed"]);
    }

    #[test]
    fn event_log_clones_share_storage() {
        let log: EventLog<SelectOption<i32>> = EventLog::new();
        let mut writer = log.clone();

        writer.on_event(&SelectEvent::Deselect(SelectOption::new("A", 1)));
        assert_eq!(log.len(), 1);
        assert_eq!(log.drain()[0], SelectEvent::Deselect(SelectOption::new("A", 1)));
        assert!(log.is_empty());
    }
}
