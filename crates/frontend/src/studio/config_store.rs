//! localStorage persistence for the model configuration.
//!
//! One named slot holding the JSON-encoded `ModelConfig`. Read once at
//! startup, overwritten on every change. Missing or unparsable contents fall
//! back to the default configuration.

use contracts::studio::ModelConfig;
use web_sys::window;

const CONFIG_STORAGE_KEY: &str = "vectora_studio_model_config";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn load() -> ModelConfig {
    local_storage()
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save(config: &ModelConfig) {
    let Ok(raw) = serde_json::to_string(config) else {
        return;
    };
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(CONFIG_STORAGE_KEY, &raw);
    }
}
