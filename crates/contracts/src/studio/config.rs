use serde::{Deserialize, Serialize};

/// User-editable record selecting which external provider/model/credential is
/// used for generation. Persisted as a single JSON slot in localStorage; read
/// fresh by the generation client on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub provider: String,
    pub model: String,
    pub api_key: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: "google".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: String::new(),
        }
    }
}

impl ModelConfig {
    /// Short display name for the loading indicator.
    pub fn display_name(&self) -> String {
        if self.provider == "google" {
            "Gemini".to_string()
        } else {
            self.model.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_gemini() {
        let config = ModelConfig::default();
        assert_eq!(config.provider, "google");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn edited_config_round_trips_through_json() {
        let edited = ModelConfig {
            provider: "other".to_string(),
            model: "x".to_string(),
            api_key: "k".to_string(),
        };
        let raw = serde_json::to_string(&edited).unwrap();
        let loaded: ModelConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(loaded, edited);
    }

    #[test]
    fn display_name_prefers_model_for_non_google_providers() {
        assert_eq!(ModelConfig::default().display_name(), "Gemini");
        let other = ModelConfig {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: String::new(),
        };
        assert_eq!(other.display_name(), "gpt-4o-mini");
    }
}
