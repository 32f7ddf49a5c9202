// ============================================================================
// spark-select - Locale Packs
// Pluggable templates for the default "N selected" label
// ============================================================================

pub mod catalog;

pub use catalog::{LabelCatalog, LabelTemplates, COUNT_TOKEN};
