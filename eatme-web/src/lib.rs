#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod assets;
pub mod components;
pub mod data;
pub mod dom;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Trace until the configured level is known.
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        dom::console_error(&format!("Logger already initialised: {err}"));
    }
    let data = std::rc::Rc::new(data::SiteData::load(&data::EmbeddedSiteData));
    log::set_max_level(data.log_filter());
    dom::console_banner(&data.config.brand);
    yew::Renderer::<app::App>::with_props(app::Props { data }).render();
}
