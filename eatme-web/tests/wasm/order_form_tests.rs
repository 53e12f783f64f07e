use super::{click, query, render_app, settle, sleep_ms, text_of};
use eatme_order::SiteConfig;
use eatme_web::components::order_form::{PROCESSING_LABEL, SUBMIT_LABEL, SUBMITTED_NOTICE};
use eatme_web::dom;
use wasm_bindgen_test::*;

const SUBMIT: &str = ".order-form button[type='submit']";

fn fill_required_fields() {
    for (selector, value) in [("#orderName", "Ama"), ("#orderPhone", "0200000000")] {
        query(selector).set_attribute("value", value).expect("set value");
    }
}

#[wasm_bindgen_test]
async fn submission_shows_processing_then_confirms_and_resets() {
    let timings = SiteConfig::default().timings;
    let app = render_app().await;
    fill_required_fields();

    click(SUBMIT);
    settle().await;
    let button = query(SUBMIT);
    assert!(button.has_attribute("disabled"));
    assert_eq!(button.text_content().unwrap_or_default().trim(), PROCESSING_LABEL);
    assert!(
        dom::document()
            .expect("document")
            .query_selector(".notification")
            .expect("selector")
            .is_none()
    );

    sleep_ms(timings.submit_delay_ms + 200).await;
    assert_eq!(text_of(".notification p"), SUBMITTED_NOTICE);
    let button = query(SUBMIT);
    assert!(!button.has_attribute("disabled"));
    assert_eq!(button.text_content().unwrap_or_default().trim(), SUBMIT_LABEL);
    app.destroy();
}

#[wasm_bindgen_test]
async fn confirmation_toast_dismisses_itself() {
    let timings = SiteConfig::default().timings;
    let app = render_app().await;
    fill_required_fields();

    click(SUBMIT);
    sleep_ms(timings.submit_delay_ms + 200).await;
    assert!(query(".notification").class_list().contains("notification-success"));

    sleep_ms(timings.toast_ms).await;
    assert!(query(".notification").class_list().contains("notification-leaving"));

    sleep_ms(timings.toast_exit_ms + 200).await;
    assert!(
        dom::document()
            .expect("document")
            .query_selector(".notification")
            .expect("selector")
            .is_none()
    );
    app.destroy();
}
