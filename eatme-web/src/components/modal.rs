use crate::dom::{self, EventListener};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub labelled_by: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay dialog. Closes on the close button, a click on the overlay or the
/// Escape key, and locks page scrolling while open.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let content_ref = use_node_ref();

    {
        let content_ref = content_ref.clone();
        let on_close = props.on_close.clone();
        use_effect_with(props.open, move |is_open| {
            let mut escape = None;
            if *is_open {
                dom::set_body_style("overflow", "hidden");
                if let Some(el) = content_ref.cast::<web_sys::HtmlElement>() {
                    let _ = el.focus();
                }
                escape = EventListener::on_document("keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<web_sys::KeyboardEvent>()
                        .is_some_and(|e| e.key() == "Escape");
                    if is_escape {
                        on_close.emit(());
                    }
                });
            }
            let was_open = *is_open;
            move || {
                drop(escape);
                if was_open {
                    dom::set_body_style("overflow", "");
                }
            }
        });
    }

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div id={props.id.clone()} class={classes!("modal", props.open.then_some("active"))} aria-hidden={(!props.open).to_string()}>
            <div class="modal-overlay" onclick={on_close.clone()}></div>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                aria-labelledby={props.labelled_by.clone()}
                tabindex="-1"
                ref={content_ref}
            >
                <button type="button" id="modalClose" class="modal-close" aria-label="Close dialog" onclick={on_close}>
                    {"×"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
