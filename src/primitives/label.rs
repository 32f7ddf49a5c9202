// ============================================================================
// spark-select - Label Formatter
// The human-readable "N selected" label for multiple mode
// ============================================================================

use std::fmt;
use std::rc::Rc;

use crate::locale::LabelCatalog;
use crate::primitives::projection::SelectedOptions;

/// Custom label function, called with the current projection.
pub type LabelFn<O> = Rc<dyn Fn(&SelectedOptions<'_, O>) -> String>;

/// Where the multiple-mode label comes from.
pub enum MultipleLabel<O> {
    /// Locale pack template.
    Default,
    /// Fixed text. An empty string falls back to the default.
    Text(String),
    /// Computed from the selected options.
    Custom(LabelFn<O>),
}

impl<O> MultipleLabel<O> {
    /// Wrap a closure as a custom label.
    pub fn custom(f: impl Fn(&SelectedOptions<'_, O>) -> String + 'static) -> Self {
        MultipleLabel::Custom(Rc::new(f))
    }

    /// `Text` for `Some`, `Default` for `None`.
    pub fn from_config(label: Option<&str>) -> Self {
        match label {
            Some(text) => MultipleLabel::Text(text.to_string()),
            None => MultipleLabel::Default,
        }
    }
}

impl<O> Default for MultipleLabel<O> {
    fn default() -> Self {
        MultipleLabel::Default
    }
}

impl<O> Clone for MultipleLabel<O> {
    fn clone(&self) -> Self {
        match self {
            MultipleLabel::Default => MultipleLabel::Default,
            MultipleLabel::Text(text) => MultipleLabel::Text(text.clone()),
            MultipleLabel::Custom(f) => MultipleLabel::Custom(f.clone()),
        }
    }
}

impl<O> fmt::Debug for MultipleLabel<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultipleLabel::Default => f.write_str("Default"),
            MultipleLabel::Text(text) => f.debug_tuple("Text").field(text).finish(),
            MultipleLabel::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Produce the label text for `selected`.
pub fn multiple_label_text<O>(
    label: &MultipleLabel<O>,
    selected: &SelectedOptions<'_, O>,
    catalog: &LabelCatalog,
    locale: &str,
) -> String {
    match label {
        MultipleLabel::Text(text) if !text.is_empty() => text.clone(),
        MultipleLabel::Custom(f) => f(selected),
        _ => {
            let count = selected.len();
            catalog.render(locale, count).unwrap_or_else(|| {
                tracing::warn!(locale, "no label templates, using bare count");
                count.to_string()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SelectOption;

    fn picked(options: &[SelectOption<i32>]) -> SelectedOptions<'_, SelectOption<i32>> {
        SelectedOptions::Multiple(options.iter().collect())
    }

    #[test]
    fn default_label_uses_plural_template() {
        let options = vec![SelectOption::new("A", 1), SelectOption::new("B", 2)];
        let catalog = LabelCatalog::default();
        let label = MultipleLabel::Default;

        assert_eq!(
            multiple_label_text(&label, &picked(&options[..1]), &catalog, "de"),
            "1 Option gewählt"
        );
        assert_eq!(
            multiple_label_text(&label, &picked(&options), &catalog, "de"),
            "2 Optionen gewählt"
        );
        assert_eq!(
            multiple_label_text(&label, &picked(&options), &catalog, "en"),
            "2 options selected"
        );
    }

    #[test]
    fn text_label_is_verbatim_unless_empty() {
        let options = vec![SelectOption::new("A", 1)];
        let catalog = LabelCatalog::default();

        let fixed = MultipleLabel::Text("Auswahl".into());
        assert_eq!(multiple_label_text(&fixed, &picked(&options), &catalog, "de"), "Auswahl");

        let blank = MultipleLabel::Text(String::new());
        assert_eq!(
            multiple_label_text(&blank, &picked(&options), &catalog, "de"),
            "1 Option gewählt"
        );
    }

    #[test]
    fn custom_label_sees_projection() {
        let options = vec![SelectOption::new("A", 1), SelectOption::new("B", 2)];
        let label = MultipleLabel::custom(|selected: &SelectedOptions<'_, SelectOption<i32>>| {
            selected.iter().map(|o| o.name()).collect::<Vec<_>>().join(", ")
        });

        assert_eq!(
            multiple_label_text(&label, &picked(&options), &LabelCatalog::default(), "de"),
            "A, B"
        );
    }

    #[test]
    fn empty_catalog_falls_back_to_count() {
        let options = vec![SelectOption::new("A", 1)];
        let label = MultipleLabel::Default;
        assert_eq!(
            multiple_label_text(&label, &picked(&options), &LabelCatalog::empty(), "de"),
            "1"
        );
    }
}
