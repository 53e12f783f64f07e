use super::{click, query, render_app, sleep_ms};
use eatme_order::SiteConfig;
use eatme_web::dom;
use wasm_bindgen_test::*;

fn scroll_home() {
    if let Some(win) = dom::window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[wasm_bindgen_test]
async fn hero_call_to_action_scrolls_below_header() {
    let header_offset = SiteConfig::default().effects.header_offset;
    let app = render_app().await;
    // Room to scroll regardless of the test page's own styles.
    dom::set_body_style("min-height", "8000px");
    scroll_home();

    click(".hero-cta a[href='#menu']");
    sleep_ms(1500).await;

    assert!(dom::scroll_y() > 0.0);
    let top = query("#menu").get_bounding_client_rect().top();
    assert!((top - header_offset).abs() < 2.0, "menu top at {top}");

    dom::set_body_style("min-height", "");
    scroll_home();
    app.destroy();
}

#[wasm_bindgen_test]
async fn logo_link_scrolls_back_home() {
    let app = render_app().await;
    dom::set_body_style("min-height", "8000px");
    click(".hero-cta a[href='#order']");
    sleep_ms(1500).await;
    assert!(dom::scroll_y() > 0.0);

    click(".navbar a.logo");
    sleep_ms(1500).await;
    assert!(dom::scroll_y() < 1.0);

    dom::set_body_style("min-height", "");
    scroll_home();
    app.destroy();
}
