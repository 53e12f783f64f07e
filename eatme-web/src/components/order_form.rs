use crate::dom::Timeout;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub const SUBMITTED_NOTICE: &str = "Order received! We'll be in touch soon. 😏";
pub const SUBMIT_LABEL: &str = "Place Order";
pub const PROCESSING_LABEL: &str = "Processing...";

#[derive(Properties, PartialEq, Clone)]
pub struct FormGroupProps {
    pub label: AttrValue,
    pub field_id: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Label plus control; the wrapper carries `focused` while the control has
/// focus.
#[function_component(FormGroup)]
pub fn form_group(props: &FormGroupProps) -> Html {
    let focused = use_state(|| false);
    let onfocusin = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onfocusout = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };
    html! {
        <div class={classes!("form-group", (*focused).then_some("focused"))} {onfocusin} {onfocusout}>
            <label for={props.field_id.clone()}>{ props.label.clone() }</label>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Simulated processing time before the order is acknowledged.
    pub submit_ms: u32,
    pub on_submitted: Callback<AttrValue>,
}

#[function_component(OrderForm)]
pub fn order_form(props: &Props) -> Html {
    let submitting = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let submitting = submitting.clone();
        let pending = pending.clone();
        let on_submitted = props.on_submitted.clone();
        let submit_ms = props.submit_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let form = e
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok());
            submitting.set(true);
            let submitting = submitting.clone();
            let on_submitted = on_submitted.clone();
            *pending.borrow_mut() = Timeout::new(submit_ms, move || {
                on_submitted.emit(AttrValue::from(SUBMITTED_NOTICE));
                if let Some(form) = form {
                    form.reset();
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <section id="order" class="order">
            <div class="section-header">
                <span class="section-eyebrow">{"Hungry?"}</span>
                <h2 class="section-title">{"Place an Order"}</h2>
            </div>
            <form class="order-form" {onsubmit}>
                <FormGroup label="Name" field_id="orderName">
                    <input id="orderName" name="name" type="text" required=true />
                </FormGroup>
                <FormGroup label="Phone" field_id="orderPhone">
                    <input id="orderPhone" name="phone" type="tel" required=true />
                </FormGroup>
                <fieldset class="order-type">
                    <legend>{"Order type"}</legend>
                    <label>
                        <input type="radio" name="order-type" value="pickup" checked=true />
                        {" Pickup"}
                    </label>
                    <label>
                        <input type="radio" name="order-type" value="delivery" />
                        {" Delivery"}
                    </label>
                </fieldset>
                <FormGroup label="What are you craving?" field_id="orderDetails">
                    <textarea id="orderDetails" name="details" rows="4"></textarea>
                </FormGroup>
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    { if *submitting { PROCESSING_LABEL } else { SUBMIT_LABEL } }
                </button>
            </form>
        </section>
    }
}
