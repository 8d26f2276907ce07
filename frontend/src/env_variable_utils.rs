use lazy_static::lazy_static;
use wasm_bindgen::JsValue;
use web_sys::window;

lazy_static! {
    pub static ref BACKEND_URL: String = get_backend_url();
}

/// Demo wallet used for payouts, donations and withdrawals.
pub const CONNECTED_WALLET: &str = "0x1234...5678";

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Injected by index.html before the wasm bundle loads
    let env_config = js_sys::Reflect::get(&window, &JsValue::from_str("ENV_CONFIG")).ok()?;
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &JsValue::from_str(key)).ok()?;
    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_backend_url() -> String {
    get_env_var("BACKEND_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| "http://localhost:8000".to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "ThreeTube".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
