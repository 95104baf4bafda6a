//! Build-time configuration for the dashboard shell with an optional runtime
//! override. The runtime config is read from `window.NAVSIDEBAR_CONFIG` (if
//! present) so static deployments can change the breakpoint, icon set or log
//! filter without rebuilding. Configuration values are public.

use crate::app_lib::AppError;
use crate::components::icons::IconSet;
use crate::features::session::types::SessionUser;
use tracing::warn;

/// Viewport widths strictly below this value render the drawer layout.
pub const DEFAULT_BREAKPOINT_PX: f64 = 768.0;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub breakpoint_px: f64,
    pub icon_set: IconSet,
    pub log_filter: String,
    pub brand_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            icon_set: IconSet::Material,
            log_filter: "info".to_string(),
            brand_name: "Dashboard".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime
    /// overrides. Rejected values are returned so they can be logged once the
    /// subscriber exists.
    pub fn load() -> (Self, Vec<AppError>) {
        let mut config = Self::default();

        let build_time = RuntimeConfig {
            breakpoint_px: option_env!("NAVSIDEBAR_BREAKPOINT_PX").and_then(normalize_runtime_value),
            icon_set: option_env!("NAVSIDEBAR_ICON_SET").and_then(normalize_runtime_value),
            log_filter: option_env!("NAVSIDEBAR_LOG").and_then(normalize_runtime_value),
            brand_name: option_env!("NAVSIDEBAR_BRAND").and_then(normalize_runtime_value),
            session: None,
        };
        let mut rejected = apply_runtime_overrides(&mut config, build_time);

        if let Some(runtime) = runtime_config() {
            rejected.extend(apply_runtime_overrides(&mut config, runtime));
        }

        (config, rejected)
    }
}

/// Reads the optional session seed from `window.NAVSIDEBAR_CONFIG.session`.
pub fn load_session_seed() -> Option<SessionUser> {
    let raw = runtime_config()?.session?;
    match serde_json::from_str::<SessionUser>(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            warn!("ignoring runtime session seed: {err}");
            None
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    breakpoint_px: Option<String>,
    icon_set: Option<String>,
    log_filter: Option<String>,
    brand_name: Option<String>,
    session: Option<String>,
}

/// Applies every valid override and returns the rejected ones. A rejected
/// value leaves the previous setting untouched.
fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) -> Vec<AppError> {
    let mut rejected = Vec::new();

    if let Some(value) = runtime.breakpoint_px {
        match parse_breakpoint(&value) {
            Ok(px) => config.breakpoint_px = px,
            Err(err) => rejected.push(err),
        }
    }
    if let Some(value) = runtime.icon_set {
        match IconSet::parse(&value) {
            Ok(set) => config.icon_set = set,
            Err(err) => rejected.push(err),
        }
    }
    if let Some(value) = runtime.log_filter {
        config.log_filter = value;
    }
    if let Some(value) = runtime.brand_name {
        config.brand_name = value;
    }

    rejected
}

/// Parses a breakpoint in CSS pixels. It must be a finite, positive number.
pub fn parse_breakpoint(value: &str) -> Result<f64, AppError> {
    let px = value
        .trim()
        .trim_end_matches("px")
        .parse::<f64>()
        .map_err(|_| AppError::Config(format!("invalid breakpoint_px: {value}")))?;
    if !px.is_finite() || px <= 0.0 {
        return Err(AppError::Config(format!(
            "breakpoint_px must be a positive number: {value}"
        )));
    }
    Ok(px)
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("NAVSIDEBAR_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        breakpoint_px: read_runtime_value(&object, "breakpoint_px"),
        icon_set: read_runtime_value(&object, "icon_set"),
        log_filter: read_runtime_value(&object, "log_filter"),
        brand_name: read_runtime_value(&object, "brand_name"),
        session: read_runtime_json(&object, "session"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    // Numbers are accepted for breakpoint_px.
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_json(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    js_sys::JSON::stringify(&value).ok()?.as_string()
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
