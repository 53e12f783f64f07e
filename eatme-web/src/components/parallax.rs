use crate::dom::{self, EventListener};
use eatme_order::effects::{is_on_screen, parallax_transform};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub text: AttrValue,
    pub class: Classes,
    pub factor: f64,
}

/// Oversized background word that drifts with the page scroll while visible.
#[function_component(ParallaxText)]
pub fn parallax_text(props: &Props) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with(props.factor, move |factor| {
            let factor = *factor;
            let listener = EventListener::on_window("scroll", move |_| {
                let Some(el) = node.cast::<web_sys::HtmlElement>() else {
                    return;
                };
                let rect = el.get_bounding_client_rect();
                if is_on_screen(rect.top(), rect.bottom(), dom::viewport_height()) {
                    let _ = el
                        .style()
                        .set_property("transform", &parallax_transform(dom::scroll_y(), factor));
                }
            });
            move || drop(listener)
        });
    }

    html! {
        <div class={props.class.clone()} aria-hidden="true" ref={node}>{ props.text.clone() }</div>
    }
}
