// ============================================================================
// spark-select - Reactivity Module
// Payload equality, input revisions and memoised derivations
// ============================================================================

pub mod equality;
pub mod version;

pub use equality::{deep_equals, identity_equals, same_payload};
pub use version::{Memo, Revision};
