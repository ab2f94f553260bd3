//! Triage runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the services that
//! need it. Nothing in this crate reads environment variables; binaries read them and hand the
//! raw values to the helpers here.

use crate::constants::DEFAULT_HYPERTENSION_LABELS;

/// Errors raised while building a [`TriageConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidInput(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Rule configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriageConfig {
    hypertension_labels: Vec<String>,
}

impl TriageConfig {
    /// Create a new `TriageConfig`.
    ///
    /// Labels are trimmed; blank labels are dropped. At least one label must remain, since an
    /// empty set would silently disable the hypertension rule.
    pub fn new(hypertension_labels: Vec<String>) -> ConfigResult<Self> {
        let hypertension_labels: Vec<String> = hypertension_labels
            .into_iter()
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty())
            .collect();

        if hypertension_labels.is_empty() {
            return Err(ConfigError::InvalidInput(
                "hypertension_labels cannot be empty".into(),
            ));
        }

        Ok(Self {
            hypertension_labels,
        })
    }

    /// Condition labels that count as hypertension (exact match).
    pub fn hypertension_labels(&self) -> &[String] {
        &self.hypertension_labels
    }
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            hypertension_labels: DEFAULT_HYPERTENSION_LABELS
                .iter()
                .map(|label| label.to_string())
                .collect(),
        }
    }
}

/// Parse the hypertension label list from an optional comma-separated value.
///
/// If `value` is `None` or blank, returns the built-in labels.
pub fn hypertension_labels_from_env_value(value: Option<String>) -> ConfigResult<TriageConfig> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        Some(v) => TriageConfig::new(v.split(',').map(str::to_string).collect()),
        None => Ok(TriageConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_built_in_labels() {
        let cfg = TriageConfig::default();
        assert_eq!(cfg.hypertension_labels(), ["Hipertensión leve"]);
    }

    #[test]
    fn new_trims_and_drops_blank_labels() {
        let cfg = TriageConfig::new(vec![
            " Hipertensión leve ".into(),
            "".into(),
            "Hipertensión arterial".into(),
        ])
        .expect("valid config");
        assert_eq!(
            cfg.hypertension_labels(),
            ["Hipertensión leve", "Hipertensión arterial"]
        );
    }

    #[test]
    fn new_rejects_empty_label_set() {
        let err = TriageConfig::new(vec!["  ".into()]).expect_err("should reject empty set");
        assert!(matches!(err, ConfigError::InvalidInput(msg) if msg.contains("cannot be empty")));
    }

    #[test]
    fn env_value_missing_or_blank_gives_default() {
        assert_eq!(
            hypertension_labels_from_env_value(None).expect("default"),
            TriageConfig::default()
        );
        assert_eq!(
            hypertension_labels_from_env_value(Some("   ".into())).expect("default"),
            TriageConfig::default()
        );
    }

    #[test]
    fn env_value_is_comma_separated() {
        let cfg = hypertension_labels_from_env_value(Some(
            "Hipertensión leve, Hipertensión arterial".into(),
        ))
        .expect("valid value");
        assert_eq!(cfg.hypertension_labels().len(), 2);
        assert_eq!(cfg.hypertension_labels()[1], "Hipertensión arterial");
    }

    #[test]
    fn env_value_of_only_commas_is_rejected() {
        assert!(hypertension_labels_from_env_value(Some(",,".into())).is_err());
    }
}
