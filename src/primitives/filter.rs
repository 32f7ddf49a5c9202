// ============================================================================
// spark-select - Option Filter
// Visible option subset for a search query
// ============================================================================

use crate::core::types::Choice;

/// Whether `query` counts as a search. `None` and `""` both mean no search.
pub fn is_searching(query: Option<&str>) -> bool {
    query.is_some_and(|q| !q.is_empty())
}

/// Indices of the options whose `track_by` field contains `query`,
/// case-insensitively, in option-list order.
///
/// With no query every index is returned. Options lacking the key field never
/// match; they are rejected when installed on the engine.
pub fn shown_indices<O: Choice>(options: &[O], query: Option<&str>, track_by: &str) -> Vec<usize> {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return (0..options.len()).collect();
    };

    let needle = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| {
            option
                .field(track_by)
                .is_some_and(|key| key.to_lowercase().contains(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}

/// The visible options for `query`, in option-list order.
///
/// # Example
///
/// ```
/// use spark_select::{select_options, shown_options};
///
/// let options = select_options!["Apple" => 1, "Banana" => 2, "Pineapple" => 3];
///
/// let shown: Vec<_> = shown_options(&options, Some("APP"), "name")
///     .iter()
///     .map(|o| o.name())
///     .collect();
/// assert_eq!(shown, ["Apple", "Pineapple"]);
///
/// assert_eq!(shown_options(&options, None, "name").len(), 3);
/// ```
pub fn shown_options<'a, O: Choice>(
    options: &'a [O],
    query: Option<&str>,
    track_by: &str,
) -> Vec<&'a O> {
    shown_indices(options, query, track_by)
        .into_iter()
        .map(|index| &options[index])
        .collect()
}

/// True iff there are no options at all, whatever the query.
pub fn no_options<O>(options: &[O]) -> bool {
    options.is_empty()
}

/// True iff a search is active and nothing matched.
pub fn no_results(query: Option<&str>, shown_len: usize) -> bool {
    is_searching(query) && shown_len == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SelectOption;

    fn fruit() -> Vec<SelectOption<i32>> {
        vec![
            SelectOption::new("Apple", 1),
            SelectOption::new("banana", 2),
            SelectOption::new("Cherry", 3).with_attr("color", "Red"),
        ]
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let options = fruit();
        assert_eq!(shown_indices(&options, None, "name"), vec![0, 1, 2]);
        assert_eq!(shown_indices(&options, Some(""), "name"), vec![0, 1, 2]);
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let options = fruit();
        assert_eq!(shown_indices(&options, Some("AN"), "name"), vec![1]);
        assert_eq!(shown_indices(&options, Some("e"), "name"), vec![0, 2]);
    }

    #[test]
    fn alternate_key_field() {
        let options = fruit();
        assert_eq!(shown_indices(&options, Some("red"), "color"), vec![2]);
    }

    #[test]
    fn no_results_only_while_searching() {
        let options = fruit();
        let shown = shown_indices(&options, Some("kiwi"), "name");
        assert!(shown.is_empty());
        assert!(no_results(Some("kiwi"), shown.len()));
        assert!(!no_results(None, 0));
        assert!(!no_results(Some(""), 0));
    }

    #[test]
    fn no_options_ignores_query() {
        let empty: Vec<SelectOption<i32>> = Vec::new();
        assert!(no_options(&empty));
        assert!(!no_options(&fruit()));
        assert!(shown_options(&empty, Some("a"), "name").is_empty());
    }
}
