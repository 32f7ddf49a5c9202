// ============================================================================
// spark-select - Core Module
// Option and bound value types, configuration and errors
// ============================================================================

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use config::{SelectConfig, DEFAULT_LOCALE, DEFAULT_TRACK_BY};
pub use error::SelectError;
pub use types::{BoundValue, Choice, Mode, SelectOption};
