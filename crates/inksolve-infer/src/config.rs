//! Inference configuration, read once from the environment at startup.

use thiserror::Error;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key. Required.
const API_KEY_VAR: &str = "GOOGLE_API_KEY";
/// Optional model override.
const MODEL_VAR: &str = "INKSOLVE_MODEL";
/// Optional API base override.
const API_BASE_VAR: &str = "INKSOLVE_API_BASE";

/// Configuration errors. A missing credential is fatal at startup, before
/// any UI is shown.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY is not set; export it before starting")]
    MissingApiKey,
}

/// Settings for the inference collaborator.
#[derive(Debug, Clone)]
pub struct InferenceSettings {
    /// API key, from `GOOGLE_API_KEY`.
    pub api_key: String,
    /// Model identifier, from `INKSOLVE_MODEL` or [`DEFAULT_MODEL`].
    pub model: String,
    /// API base URL (no trailing slash), from `INKSOLVE_API_BASE` or
    /// [`DEFAULT_API_BASE`].
    pub api_base: String,
}

impl InferenceSettings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup (testable).
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = get(API_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            model: get(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            api_base: get(API_BASE_VAR)
                .map(|base| base.trim_end_matches('/').to_owned())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| map.get(name).map(|v| (*v).to_owned())
    }

    #[test]
    fn test_defaults() {
        let settings =
            InferenceSettings::from_lookup(lookup(&[("GOOGLE_API_KEY", "k-123")])).unwrap();
        assert_eq!(settings.api_key, "k-123");
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let result = InferenceSettings::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let result = InferenceSettings::from_lookup(lookup(&[("GOOGLE_API_KEY", "  ")]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_overrides() {
        let settings = InferenceSettings::from_lookup(lookup(&[
            ("GOOGLE_API_KEY", "k"),
            ("INKSOLVE_MODEL", "gemini-2.0-flash"),
            ("INKSOLVE_API_BASE", "https://example.test/v1/"),
        ]))
        .unwrap();
        assert_eq!(settings.model, "gemini-2.0-flash");
        // Trailing slash is normalized away.
        assert_eq!(settings.api_base, "https://example.test/v1");
    }
}
