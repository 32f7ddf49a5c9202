// ============================================================================
// spark-select - Selection State for Select/Dropdown Controls
// ============================================================================
//
// Reconciles an externally bound value (scalar or ordered list) against a
// list of option objects under search filtering and click-to-toggle
// interaction. Reads are pure; canonicalization, self-heal and the trailing
// pop guard are explicit actions that emit `bound-value-changed`.
// ============================================================================

#[macro_use]
mod macros;

pub mod core;
pub mod engine;
pub mod locale;
pub mod primitives;
pub mod reactivity;

// Re-export core items at crate root for ergonomic access
pub use crate::core::config::{SelectConfig, DEFAULT_LOCALE, DEFAULT_TRACK_BY};
pub use crate::core::error::SelectError;
pub use crate::core::types::{BoundValue, Choice, Mode, SelectOption};

pub use crate::engine::SelectEngine;
pub use locale::{LabelCatalog, LabelTemplates};

// Re-export primitives at crate root
pub use primitives::events::{EventLog, SelectEvent, SelectListener};
pub use primitives::filter::{no_options, no_results, shown_options};
pub use primitives::label::{multiple_label_text, LabelFn, MultipleLabel};
pub use primitives::membership::{canonicalize, canonicalize_all, is_selected, Canonical};
pub use primitives::mutators::Intent;
pub use primitives::projection::{repair, selected_options, SelectedOptions};
pub use primitives::reconciler::{reconcile, Reconciliation};

pub use reactivity::version::Revision;

// =============================================================================
// TESTS
// =============================================================================
