use crate::assets::asset_url;
use crate::components::modal::Modal;
use crate::dom;
use eatme_order::{AddOnCatalog, AddOnId, ItemImage, SelectionState, SiteConfig, format_price};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub selection: SelectionState,
    pub add_ons: AddOnCatalog,
    pub site: SiteConfig,
    pub on_close: Callback<()>,
    pub on_increment: Callback<()>,
    pub on_decrement: Callback<()>,
    pub on_toggle_add_on: Callback<AddOnId>,
}

fn render_image(image: Option<&ItemImage>, alt: &str) -> Html {
    match image {
        Some(ItemImage::Src(src)) => html! { <img src={asset_url(src)} alt={alt.to_string()} /> },
        Some(ItemImage::Emoji(glyph)) => html! { <span>{ glyph.clone() }</span> },
        None => Html::default(),
    }
}

#[function_component(OrderModal)]
pub fn order_modal(props: &Props) -> Html {
    let selection = props.selection.current();
    let quote = props.selection.quote(&props.add_ons, &props.site);
    let currency = props.site.message.currency.clone();

    let on_minus = {
        let cb = props.on_decrement.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_plus = {
        let cb = props.on_increment.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_send = {
        let link = quote.link.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dom::open_in_new_tab(&link);
        })
    };

    let extras = props.add_ons.iter().map(|add_on| {
        let id = add_on.id.clone();
        let on_change = {
            let cb = props.on_toggle_add_on.clone();
            let id = id.clone();
            Callback::from(move |_: Event| cb.emit(id.clone()))
        };
        html! {
            <label class="extra-option" key={id.to_string()}>
                <input
                    type="checkbox"
                    value={id.to_string()}
                    data-price={add_on.price.to_string()}
                    checked={selection.is_selected(&id)}
                    onchange={on_change}
                />
                <span class="extra-name">{ add_on.label() }</span>
                <span class="extra-price">{ format!("+{}", format_price(&currency, u64::from(add_on.price))) }</span>
            </label>
        }
    });

    html! {
        <Modal id="orderModal" open={props.selection.is_open()} on_close={props.on_close.clone()} labelled_by={AttrValue::from("modalItemName")}>
            <div id="modalImage" class="modal-image">
                { render_image(selection.image.as_ref(), &selection.item_name) }
            </div>
            <div class="modal-details">
                <h3 id="modalItemName">{ selection.item_name.clone() }</h3>
                <p id="modalItemPrice" class="modal-price">{ selection.price_text.clone() }</p>
                <p id="modalDay" class="modal-day">{ selection.day_label() }</p>

                <div class="quantity-control">
                    <button type="button" id="qtyMinus" class="qty-btn" aria-label="Decrease quantity" onclick={on_minus}>{"−"}</button>
                    <span id="qtyValue" class="qty-value" aria-live="polite">{ selection.quantity.to_string() }</span>
                    <button type="button" id="qtyPlus" class="qty-btn" aria-label="Increase quantity" onclick={on_plus}>{"+"}</button>
                </div>

                if !props.add_ons.is_empty() {
                    <fieldset class="extras">
                        <legend>{"Add extras"}</legend>
                        { for extras }
                    </fieldset>
                }

                <div class="modal-total">
                    <span>{"Total"}</span>
                    <span id="totalPrice">{ quote.total_label.clone() }</span>
                </div>

                <a
                    id="orderWhatsApp"
                    class="btn btn-whatsapp"
                    href={quote.link.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    onclick={on_send}
                >
                    {"Order on WhatsApp"}
                </a>
            </div>
        </Modal>
    }
}
