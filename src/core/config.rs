// ============================================================================
// spark-select - Configuration
// Props recognised by the engine, deserializable from camelCase JSON
// ============================================================================

use serde::{Deserialize, Serialize};

use super::error::SelectError;
use super::types::{Choice, Mode};

/// Default key field used for search and display.
pub const DEFAULT_TRACK_BY: &str = "name";

/// Default locale for the "N selected" label.
pub const DEFAULT_LOCALE: &str = "de";

/// Engine configuration.
///
/// # Example
///
/// ```
/// use spark_select::SelectConfig;
///
/// let config: SelectConfig =
///     serde_json::from_str(r#"{ "multiple": true, "trackBy": "label" }"#).unwrap();
///
/// assert!(config.multiple);
/// assert!(config.close_on_select);
/// assert_eq!(config.track_by, "label");
/// assert_eq!(config.locale, "de");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectConfig {
    /// Sequence-shaped (true) or scalar-shaped (false) bound value.
    pub multiple: bool,

    /// Request deactivation (e.g. closing the dropdown) after a select.
    pub close_on_select: bool,

    /// Name of the option field used for search and display.
    pub track_by: String,

    /// Fixed label override. A function formatter is installed on the
    /// engine instead, see [`crate::MultipleLabel`].
    pub multiple_label: Option<String>,

    /// Locale tag used to pick the default label templates.
    pub locale: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            close_on_select: true,
            track_by: DEFAULT_TRACK_BY.to_string(),
            multiple_label: None,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl SelectConfig {
    /// Single-mode configuration with defaults.
    pub fn single() -> Self {
        Self::default()
    }

    /// Multiple-mode configuration with defaults.
    pub fn multiple() -> Self {
        Self {
            multiple: true,
            ..Self::default()
        }
    }

    pub fn with_close_on_select(mut self, close: bool) -> Self {
        self.close_on_select = close;
        self
    }

    pub fn with_track_by(mut self, field: impl Into<String>) -> Self {
        self.track_by = field.into();
        self
    }

    pub fn with_multiple_label(mut self, label: impl Into<String>) -> Self {
        self.multiple_label = Some(label.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn mode(&self) -> Mode {
        Mode::from_multiple(self.multiple)
    }

    /// Check the configuration on its own.
    pub fn validate(&self) -> Result<(), SelectError> {
        if self.track_by.trim().is_empty() {
            return Err(SelectError::EmptyTrackBy);
        }
        Ok(())
    }

    /// Check that every option exposes the `track_by` field.
    pub fn validate_options<O: Choice>(&self, options: &[O]) -> Result<(), SelectError> {
        match options
            .iter()
            .position(|option| option.field(&self.track_by).is_none())
        {
            Some(index) => Err(SelectError::MissingKeyField {
                index,
                field: self.track_by.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SelectOption;

    #[test]
    fn defaults() {
        let config = SelectConfig::default();
        assert_eq!(config.mode(), Mode::Single);
        assert!(config.close_on_select);
        assert_eq!(config.track_by, "name");
        assert_eq!(config.multiple_label, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_track_by_rejected() {
        let config = SelectConfig::default().with_track_by("  ");
        assert_eq!(config.validate(), Err(SelectError::EmptyTrackBy));
    }

    #[test]
    fn missing_key_field_reports_first_offender() {
        let options = vec![
            SelectOption::new("A", 1).with_attr("code", "a"),
            SelectOption::new("B", 2),
            SelectOption::new("C", 3),
        ];
        let config = SelectConfig::multiple().with_track_by("code");

        assert_eq!(
            config.validate_options(&options),
            Err(SelectError::MissingKeyField {
                index: 1,
                field: "code".into()
            })
        );
        assert!(SelectConfig::multiple().validate_options(&options).is_ok());
    }
}
