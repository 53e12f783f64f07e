use super::{click, query, render_app, settle, text_of};
use eatme_order::decode_message;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
async fn clicking_menu_item_opens_modal_with_item_details() {
    let app = render_app().await;
    assert!(!query("#orderModal").class_list().contains("active"));

    click(".menu-item[data-item-id='jollof-chicken']");
    settle().await;

    assert!(query("#orderModal").class_list().contains("active"));
    assert_eq!(text_of("#modalItemName"), "Jollof Rice & Chicken");
    assert_eq!(text_of("#modalDay"), "Available on Monday");
    assert_eq!(text_of("#qtyValue"), "1");
    assert_eq!(text_of("#totalPrice"), "GH₵ 45");
    app.destroy();
}

#[wasm_bindgen_test]
async fn quantity_and_extras_update_total_and_link() {
    let app = render_app().await;
    click(".menu-item[data-item-id='jollof-chicken']");
    settle().await;

    click("#qtyPlus");
    settle().await;
    click(".extra-option input[value='extra-sauce']");
    settle().await;

    assert_eq!(text_of("#qtyValue"), "2");
    assert_eq!(text_of("#totalPrice"), "GH₵ 100");
    let href = query("#orderWhatsApp").get_attribute("href").unwrap_or_default();
    assert!(href.starts_with("https://wa.me/2250555708866?text="));
    let message = decode_message(&href).expect("text parameter");
    assert!(message.contains("*2x Jollof Rice & Chicken*"));
    assert!(message.contains("Extras: extra sauce"));
    assert!(message.contains("*Total: GH₵ 100*"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn quantity_stays_within_bounds() {
    let app = render_app().await;
    click(".menu-item[data-item-id='sobolo']");
    settle().await;

    click("#qtyMinus");
    settle().await;
    assert_eq!(text_of("#qtyValue"), "1");

    for _ in 0..12 {
        click("#qtyPlus");
        settle().await;
    }
    assert_eq!(text_of("#qtyValue"), "10");
    assert_eq!(text_of("#totalPrice"), "GH₵ 100");
    app.destroy();
}

#[wasm_bindgen_test]
async fn closing_resets_selection() {
    let app = render_app().await;
    click(".menu-item[data-item-id='waakye']");
    settle().await;
    click("#qtyPlus");
    settle().await;
    click(".extra-option input[value='boiled-egg']");
    settle().await;

    click("#modalClose");
    settle().await;
    assert!(!query("#orderModal").class_list().contains("active"));

    click(".menu-item[data-item-id='kelewele']");
    settle().await;
    assert_eq!(text_of("#qtyValue"), "1");
    assert_eq!(text_of("#totalPrice"), "GH₵ 15");
    app.destroy();
}

#[wasm_bindgen_test]
async fn escape_closes_modal() {
    let app = render_app().await;
    click(".menu-item[data-item-id='fried-rice']");
    settle().await;
    super::press_key("Escape");
    settle().await;
    assert!(!query("#orderModal").class_list().contains("active"));
    app.destroy();
}
