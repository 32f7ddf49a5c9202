// ============================================================================
// spark-select - Select Engine
// Owns the selection state and applies intents on behalf of the host
// ============================================================================
//
// The engine keeps the externally bound value, the option list, the search
// query and the configuration. Queries are pure reads. Every write goes
// through `apply`, which replaces the bound value, dispatches notifications
// and then runs the reconciler, in that order.
//
// Listeners receive `&SelectEvent` while the engine is mutably borrowed, so
// they cannot re-enter it. Hosts queue follow-up writes for after the call.
// ============================================================================

use crate::core::config::SelectConfig;
use crate::core::error::SelectError;
use crate::core::types::{BoundValue, Choice, Mode};
use crate::locale::LabelCatalog;
use crate::primitives::events::{SelectEvent, SelectListener};
use crate::primitives::filter;
use crate::primitives::label::{self, MultipleLabel};
use crate::primitives::membership::{self, Canonical};
use crate::primitives::mutators::{self, Intent};
use crate::primitives::projection::{self, SelectedOptions};
use crate::primitives::reconciler;
use crate::reactivity::version::{Memo, Revision};

// =============================================================================
// SELECT ENGINE
// =============================================================================

/// Selection-state engine for a select/dropdown control.
///
/// # Example
///
/// ```
/// use spark_select::{BoundValue, SelectConfig, SelectEngine, select_options};
///
/// let options = select_options!["Red" => 1, "Green" => 2, "Blue" => 3];
/// let mut engine = SelectEngine::new(SelectConfig::multiple(), options.clone(), None).unwrap();
///
/// engine.handle_option_click(&options[2]);
/// engine.handle_option_click(&options[0]);
/// assert_eq!(*engine.bound_value(), BoundValue::multiple([3, 1]));
/// assert_eq!(engine.multiple_label_text(), "2 Optionen gewählt");
///
/// engine.set_search(Some("re".into()));
/// let shown: Vec<_> = engine.shown_options().iter().map(|o| o.name()).collect();
/// assert_eq!(shown, ["Red", "Green"]);
/// ```
pub struct SelectEngine<O: Choice> {
    config: SelectConfig,
    options: Vec<O>,
    bound: BoundValue<O::Value>,
    search: Option<String>,
    label: MultipleLabel<O>,
    catalog: LabelCatalog,

    listeners: Vec<Box<dyn SelectListener<O>>>,
    deactivate: Option<Box<dyn FnMut()>>,

    // Input revisions
    config_rev: Revision,
    options_rev: Revision,
    search_rev: Revision,
    bound_rev: Revision,

    shown: Memo<(Revision, Revision, Revision), Vec<usize>>,
}

impl<O: Choice + Clone> SelectEngine<O> {
    /// Create an engine over `options`.
    ///
    /// `bound` defaults to the empty value for the configured mode. The
    /// initial value is settled like any external change. No listener is
    /// subscribed yet, so the corrections emit nothing.
    pub fn new(
        config: SelectConfig,
        options: Vec<O>,
        bound: Option<BoundValue<O::Value>>,
    ) -> Result<Self, SelectError> {
        Self::with_catalog(config, options, bound, LabelCatalog::default())
    }

    /// Create an engine with a custom locale pack.
    pub fn with_catalog(
        config: SelectConfig,
        options: Vec<O>,
        bound: Option<BoundValue<O::Value>>,
        catalog: LabelCatalog,
    ) -> Result<Self, SelectError> {
        config.validate()?;
        config.validate_options(&options)?;
        if catalog.resolve(&config.locale).is_none() {
            return Err(SelectError::UnknownLocale(config.locale.clone()));
        }

        let bound = bound.unwrap_or_else(|| BoundValue::empty(config.mode()));
        let label = MultipleLabel::from_config(config.multiple_label.as_deref());

        let mut engine = Self {
            config,
            options,
            bound,
            search: None,
            label,
            catalog,
            listeners: Vec::new(),
            deactivate: None,
            config_rev: Revision::default(),
            options_rev: Revision::default(),
            search_rev: Revision::default(),
            bound_rev: Revision::default(),
            shown: Memo::new(),
        };
        engine.settle();
        Ok(engine)
    }

    // =========================================================================
    // COLLABORATORS
    // =========================================================================

    /// Register a listener for `select`, `deselect` and `bound-value-changed`.
    pub fn subscribe(&mut self, listener: impl SelectListener<O> + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Install the hook called when `close_on_select` asks for deactivation.
    pub fn on_deactivate(&mut self, hook: impl FnMut() + 'static) {
        self.deactivate = Some(Box::new(hook));
    }

    // =========================================================================
    // INPUTS
    // =========================================================================

    /// Replace the option list. The bound value is repaired against it.
    pub fn set_options(&mut self, options: Vec<O>) -> Result<(), SelectError> {
        self.config.validate_options(&options)?;
        self.options = options;
        self.options_rev.bump();
        self.repair();
        Ok(())
    }

    /// Replace the search query. `None` and `""` both clear it.
    pub fn set_search(&mut self, query: Option<String>) {
        if self.search != query {
            self.search = query;
            self.search_rev.bump();
        }
    }

    /// Replace the configuration. A mode switch repairs the bound value.
    pub fn set_config(&mut self, config: SelectConfig) -> Result<(), SelectError> {
        config.validate()?;
        config.validate_options(&self.options)?;
        if self.catalog.resolve(&config.locale).is_none() {
            return Err(SelectError::UnknownLocale(config.locale));
        }
        if config.multiple_label != self.config.multiple_label {
            self.label = MultipleLabel::from_config(config.multiple_label.as_deref());
        }
        self.config = config;
        self.config_rev.bump();
        self.repair();
        Ok(())
    }

    /// Replace the label source.
    pub fn set_multiple_label(&mut self, label: MultipleLabel<O>) {
        self.label = label;
    }

    /// External change of the bound value: store it, then repair and
    /// reconcile as for any other change.
    pub fn set_bound_value(&mut self, value: BoundValue<O::Value>) {
        self.bound = value;
        self.bound_rev.bump();
        self.settle();
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.config.mode()
    }

    pub fn options(&self) -> &[O] {
        &self.options
    }

    pub fn bound_value(&self) -> &BoundValue<O::Value> {
        &self.bound
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Revision of the bound value, bumped on every replacement.
    pub fn revision(&self) -> Revision {
        self.bound_rev
    }

    /// True iff the option list is empty.
    pub fn no_options(&self) -> bool {
        filter::no_options(&self.options)
    }

    /// Options matching the search query, in option-list order.
    ///
    /// Memoised on the option list, search query and configuration.
    pub fn shown_options(&self) -> Vec<&O> {
        let key = (self.options_rev, self.search_rev, self.config_rev);
        self.shown
            .get_or_compute(key, || {
                filter::shown_indices(&self.options, self.search(), &self.config.track_by)
            })
            .into_iter()
            .map(|index| &self.options[index])
            .collect()
    }

    /// True iff a search is active and nothing matched.
    pub fn no_results(&self) -> bool {
        filter::is_searching(self.search()) && self.shown_options().is_empty()
    }

    /// The options recognised as selected.
    pub fn selected_options(&self) -> SelectedOptions<'_, O> {
        projection::selected_options(self.mode(), &self.bound, &self.options)
    }

    /// Pure membership test, no canonicalization.
    pub fn contains(&self, option: &O) -> bool {
        membership::is_selected(self.mode(), &self.bound, option)
    }

    /// Label for the multiple-mode summary.
    pub fn multiple_label_text(&self) -> String {
        label::multiple_label_text(
            &self.label,
            &self.selected_options(),
            &self.catalog,
            &self.config.locale,
        )
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Membership test that also canonicalizes the matching stored payload.
    ///
    /// Canonicalization is value-preserving: it emits nothing and does not
    /// bump the revision.
    pub fn is_selected(&mut self, option: &O) -> bool {
        membership::canonicalize(self.mode(), &mut self.bound, option).is_selected()
    }

    /// Canonicalize every stored payload against the option list.
    pub fn canonicalize(&mut self) -> usize {
        membership::canonicalize_all(self.mode(), &mut self.bound, &self.options)
    }

    /// Toggle `option`: deselect when selected, select otherwise.
    pub fn handle_option_click(&mut self, option: &O) {
        if self.is_selected(option) {
            self.deselect(option);
        } else {
            self.select(option);
        }
    }

    /// Select `option`.
    pub fn select(&mut self, option: &O) {
        let intent = mutators::select(&self.config, &self.bound, option);
        self.apply(intent);
    }

    /// Deselect `option`. A no-op in multiple mode when it is not selected.
    pub fn deselect(&mut self, option: &O) {
        if let Canonical::Absent = membership::canonicalize(self.mode(), &mut self.bound, option) {
            if self.mode() == Mode::Multiple {
                tracing::trace!("deselect of unselected option ignored");
                return;
            }
        }
        if let Some(intent) = mutators::deselect(&self.config, &self.bound, option) {
            self.apply(intent);
        }
    }

    /// Self-heal an illegal bound value. Returns true if it was replaced.
    pub fn repair(&mut self) -> bool {
        let Some(fixed) = projection::repair(self.mode(), &self.bound, &self.options) else {
            return false;
        };
        tracing::debug!(mode = ?self.mode(), was = self.bound.len(), "self-heal reset bound value");
        self.replace_bound(fixed);
        true
    }

    /// Drop trailing entries the option list does not account for. Returns
    /// true if any were dropped.
    pub fn reconcile(&mut self) -> bool {
        self.canonicalize();
        let Some(fixed) = reconciler::reconcile(self.mode(), &self.bound, &self.options) else {
            return false;
        };
        tracing::warn!(
            removed = fixed.removed.len(),
            remaining = fixed.value.len(),
            "dropped bound entries without a matching option"
        );
        self.replace_bound(fixed.value);
        true
    }

    /// Run the corrections that follow any bound-value change.
    pub fn settle(&mut self) {
        self.repair();
        self.reconcile();
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn apply(&mut self, intent: Intent<O>) {
        let Intent {
            value,
            events,
            deactivate,
        } = intent;

        self.bound = value;
        self.bound_rev.bump();
        for event in &events {
            self.emit(event);
        }
        if deactivate {
            if let Some(hook) = self.deactivate.as_mut() {
                hook();
            }
        }
        self.settle();
    }

    fn replace_bound(&mut self, value: BoundValue<O::Value>) {
        self.bound = value;
        self.bound_rev.bump();
        let event = SelectEvent::BoundValueChanged(self.bound.clone());
        self.emit(&event);
    }

    fn emit(&mut self, event: &SelectEvent<O>) {
        for listener in &mut self.listeners {
            listener.on_event(event);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
