#[cfg(target_arch = "wasm32")]
pub fn main() {
    use leptos::prelude::*;
    use navsidebar::App;
    use navsidebar::app_lib::{config::AppConfig, logging};
    use tracing::{info, warn};

    console_error_panic_hook::set_once();

    let (config, rejected) = AppConfig::load();
    if let Err(err) = logging::init(&config.log_filter) {
        web_sys::console::error_1(&err.to_string().into());
    }
    for err in rejected {
        warn!("ignoring config override: {err}");
    }
    info!(
        breakpoint_px = config.breakpoint_px,
        icon_set = ?config.icon_set,
        "starting dashboard"
    );

    mount_to_body(move || view! { <App config=config /> });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
