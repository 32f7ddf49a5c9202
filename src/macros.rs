// ============================================================================
// spark-select - Ergonomic Macros
// ============================================================================

/// Build a `Vec<SelectOption<_>>` from `name => value` pairs.
///
/// Each value gets its own payload handle, so the options are distinct by
/// identity even when two values are structurally equal.
///
/// # Usage
///
/// ```rust
/// use spark_select::{select_options, Choice};
///
/// let options = select_options!["A" => 1, "B" => 2];
///
/// assert_eq!(options.len(), 2);
/// assert_eq!(options[1].field("name"), Some("B"));
/// assert_eq!(**options[0].value(), 1);
/// ```
#[macro_export]
macro_rules! select_options {
    () => {
        ::std::vec::Vec::<$crate::SelectOption<_>>::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        vec![$($crate::SelectOption::new($name, $value)),+]
    };
}
