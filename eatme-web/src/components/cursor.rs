use crate::dom::{self, EventListener};
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Elements that make the glow grow while hovered.
pub const HOVER_TARGETS: &str = "a, button, .menu-item, .service-card, .cocktail-card";

fn hovers_target(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(HOVER_TARGETS).ok().flatten())
        .is_some()
}

/// Custom cursor glow. Only shown for fine pointers; on touch devices the
/// element stays hidden and the native cursor is restored.
#[function_component(CursorGlow)]
pub fn cursor_glow() -> Html {
    let node = use_node_ref();
    let enabled = use_state(|| false);
    let hovering = use_state(|| false);

    {
        let node = node.clone();
        let enabled = enabled.clone();
        let hovering = hovering.clone();
        use_effect_with((), move |()| {
            let mut listeners = Vec::new();
            if dom::has_fine_pointer() {
                enabled.set(true);
                listeners.extend(EventListener::on_document("mousemove", move |event| {
                    let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() else {
                        return;
                    };
                    if let Some(el) = node.cast::<web_sys::HtmlElement>() {
                        let style = el.style();
                        let _ = style.set_property("left", &format!("{}px", mouse.client_x()));
                        let _ = style.set_property("top", &format!("{}px", mouse.client_y()));
                    }
                }));
                let over = hovering.clone();
                listeners.extend(EventListener::on_document("mouseover", move |event| {
                    if hovers_target(&event) {
                        over.set(true);
                    }
                }));
                listeners.extend(EventListener::on_document("mouseout", move |event| {
                    if hovers_target(&event) {
                        hovering.set(false);
                    }
                }));
            } else {
                dom::set_body_style("cursor", "auto");
            }
            move || drop(listeners)
        });
    }

    let style = (!*enabled).then_some("display: none");
    html! {
        <div
            class={classes!("cursor-glow", (*hovering).then_some("hover"))}
            style={style}
            aria-hidden="true"
            ref={node}
        ></div>
    }
}
