use super::{click, press_key, query, render_app, settle, text_of};
use eatme_order::SiteConfig;
use eatme_web::app::effects::EASTER_EGG_NOTICE;
use eatme_web::dom;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
async fn body_is_marked_loaded_after_mount() {
    let app = render_app().await;
    let body = dom::body().expect("body");
    assert!(body.class_list().contains("loaded"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn menu_tabs_filter_items() {
    let app = render_app().await;
    let all = dom::document()
        .expect("document")
        .query_selector_all(".menu-item")
        .expect("menu items")
        .length();

    click(".menu-tab[data-category='drinks']");
    settle().await;
    let drinks = dom::document()
        .expect("document")
        .query_selector_all(".menu-item")
        .expect("menu items")
        .length();
    assert_eq!(drinks, 2);
    assert!(drinks < all);
    assert!(query(".menu-tab[data-category='drinks']").class_list().contains("active"));
    assert!(query(".menu-item[data-item-id='sobolo']").class_list().contains("menu-item-enter"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn mobile_menu_toggles() {
    let app = render_app().await;
    click(".mobile-menu-btn");
    settle().await;
    assert!(query(".mobile-menu-btn").class_list().contains("active"));
    click(".mobile-menu-btn");
    settle().await;
    assert!(!query(".mobile-menu-btn").class_list().contains("active"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn konami_code_shows_secret_toast() {
    let app = render_app().await;
    for key in SiteConfig::default().konami {
        press_key(&key);
    }
    settle().await;
    assert_eq!(text_of(".notification p"), EASTER_EGG_NOTICE);
    let animation = dom::body()
        .expect("body")
        .style()
        .get_property_value("animation")
        .unwrap_or_default();
    assert!(animation.contains("hueRotate"));
    app.destroy();
}
