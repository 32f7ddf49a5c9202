// ============================================================================
// spark-select - Errors
// Configuration-time failures. Runtime drift is repaired, never reported.
// ============================================================================

/// Errors raised while installing configuration, options or locale packs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// `track_by` was empty, so no option could be searched or displayed.
    #[error("trackBy must name a key field")]
    EmptyTrackBy,

    /// An option does not expose the configured key field.
    #[error("option at index {index} has no key field `{field}`")]
    MissingKeyField { index: usize, field: String },

    /// Neither the configured locale nor the fallback chain has label templates.
    #[error("no label templates for locale `{0}`")]
    UnknownLocale(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = SelectError::MissingKeyField {
            index: 3,
            field: "name".into(),
        };
        assert_eq!(err.to_string(), "option at index 3 has no key field `name`");
        assert_eq!(
            SelectError::UnknownLocale("fr".into()).to_string(),
            "no label templates for locale `fr`"
        );
    }
}
