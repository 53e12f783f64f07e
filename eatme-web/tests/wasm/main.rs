#![cfg(target_arch = "wasm32")]

mod app_tests;
mod navigation_tests;
mod order_form_tests;
mod order_modal_tests;

use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

use eatme_web::app::App;
use eatme_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub fn ensure_app_root() -> Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

pub async fn render_app() -> yew::AppHandle<App> {
    let handle = yew::Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
    handle
}

/// Let the scheduler flush pending renders and effects.
pub async fn settle() {
    sleep_ms(20).await;
}

pub async fn sleep_ms(ms: u32) {
    yew::platform::time::sleep(Duration::from_millis(u64::from(ms))).await;
}

pub fn query(selector: &str) -> Element {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("{selector} not found"))
}

pub fn text_of(selector: &str) -> String {
    query(selector).text_content().unwrap_or_default()
}

pub fn click(selector: &str) {
    query(selector)
        .dyn_into::<HtmlElement>()
        .expect("clickable element")
        .click();
}

pub fn press_key(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    let doc = dom::document().expect("document");
    let _ = doc.dispatch_event(&event);
}
