//! Where the auth API lives.
//!
//! Resolution order, first non-blank value wins:
//!
//! 1. `window.CODEPLAN_CONFIG.api_base_url`, set by the hosting page
//! 2. `CODEPLAN_API_BASE_URL`, baked in at compile time
//! 3. `DEFAULT_API_BASE_URL`

/// Local development API host.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
        }
    }
}

impl ApiConfig {
    pub fn load() -> Self {
        Self {
            api_base_url: resolve_base_url(window_base_url(), option_env!("CODEPLAN_API_BASE_URL")),
        }
    }
}

fn resolve_base_url(page: Option<String>, compiled: Option<&str>) -> String {
    page.as_deref()
        .and_then(non_blank)
        .or_else(|| compiled.and_then(non_blank))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
}

#[cfg(feature = "hydrate")]
fn window_base_url() -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let settings = Reflect::get(&window, &JsValue::from_str("CODEPLAN_CONFIG")).ok()?;
    if !settings.is_object() {
        return None;
    }
    Reflect::get(&settings, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()
}

#[cfg(not(feature = "hydrate"))]
fn window_base_url() -> Option<String> {
    None
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_trims_and_drops_empty() {
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank(" \t "), None);
        assert_eq!(non_blank("  http://api.codeplan.test "), Some("http://api.codeplan.test".to_owned()));
    }

    #[test]
    fn default_is_local_api() {
        assert_eq!(ApiConfig::default().api_base_url, "http://localhost:8000");
    }

    #[test]
    fn page_setting_beats_compiled_value() {
        let url = resolve_base_url(Some("https://page.example".to_owned()), Some("https://built.example"));
        assert_eq!(url, "https://page.example");
    }

    #[test]
    fn blank_page_setting_falls_back_to_compiled_value() {
        let url = resolve_base_url(Some("   ".to_owned()), Some(" https://built.example "));
        assert_eq!(url, "https://built.example");
    }

    #[test]
    fn nothing_configured_uses_default() {
        assert_eq!(resolve_base_url(None, None), DEFAULT_API_BASE_URL);
        assert_eq!(resolve_base_url(None, Some("")), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn load_is_never_blank() {
        assert!(!ApiConfig::load().api_base_url.trim().is_empty());
    }
}
