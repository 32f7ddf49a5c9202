// ============================================================================
// spark-select - Primitives Module
// Filter, membership, projection, reconciler, mutators, label, events
// ============================================================================

pub mod events;
pub mod filter;
pub mod label;
pub mod membership;
pub mod mutators;
pub mod projection;
pub mod reconciler;

// Re-export for convenience
pub use events::{EventLog, SelectEvent, SelectListener};
pub use filter::{no_options, no_results, shown_indices, shown_options};
pub use label::{multiple_label_text, LabelFn, MultipleLabel};
pub use membership::{canonicalize, canonicalize_all, is_selected, Canonical};
pub use mutators::{Intent, select, deselect, toggle};
pub use projection::{repair, selected_options, SelectedOptions};
pub use reconciler::{reconcile, Reconciliation};
