//! Build-time configuration with an optional runtime override. The runtime
//! config is read from `window.MEMBERGATE_CONFIG` (if present) so static
//! deployments can rename the site or raise the log level without rebuilding.
//! Configuration values are public; do not store secrets here.

const DEFAULT_SITE_NAME: &str = "Membergate";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_SESSION_KEY: &str = "membergate.session";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub site_name: String,
    pub log_level: String,
    pub session_storage_key: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let site_name = option_env!("MEMBERGATE_SITE_NAME").unwrap_or(DEFAULT_SITE_NAME);
        let log_level = option_env!("MEMBERGATE_LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL);
        let session_storage_key =
            option_env!("MEMBERGATE_SESSION_KEY").unwrap_or(DEFAULT_SESSION_KEY);

        let mut config = Self {
            site_name: site_name.to_string(),
            log_level: log_level.to_string(),
            session_storage_key: session_storage_key.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Storage key holding the directory of locally registered accounts.
    pub fn accounts_storage_key(&self) -> String {
        format!("{}.accounts", self.session_storage_key)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            session_storage_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    site_name: Option<String>,
    log_level: Option<String>,
    session_storage_key: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.site_name {
        config.site_name = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
    if let Some(value) = runtime.session_storage_key {
        config.session_storage_key = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("MEMBERGATE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        site_name: read_runtime_value(&object, "site_name"),
        log_level: read_runtime_value(&object, "log_level"),
        session_storage_key: read_runtime_value(&object, "session_storage_key"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(normalize_runtime_value("  debug "), Some("debug".to_string()));
    }

    #[test]
    fn load_without_runtime_override_uses_build_values() {
        let config = AppConfig::load();
        assert!(!config.site_name.is_empty());
        assert!(!config.session_storage_key.is_empty());
    }

    #[test]
    fn apply_runtime_overrides_keeps_defaults_for_missing_values() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            site_name: normalize_runtime_value(""),
            log_level: normalize_runtime_value("  "),
            session_storage_key: None,
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            site_name: normalize_runtime_value("Riverside Club"),
            log_level: normalize_runtime_value("debug"),
            session_storage_key: normalize_runtime_value("riverside.session"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.site_name, "Riverside Club");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.session_storage_key, "riverside.session");
        assert_eq!(config.accounts_storage_key(), "riverside.session.accounts");
    }
}
