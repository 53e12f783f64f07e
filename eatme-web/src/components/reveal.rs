use crate::dom::VisibilityWatch;
use eatme_order::effects::stagger_delay;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.1)]
    pub threshold: f64,
    #[prop_or(0.1)]
    pub stagger_s: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Starts hidden and animates in once scrolled into view. Descendants marked
/// `stagger-child` animate one after another.
#[function_component(Reveal)]
pub fn reveal(props: &Props) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with((props.threshold, props.stagger_s), move |(threshold, stagger_s)| {
            let stagger_s = *stagger_s;
            let watch = node.cast::<web_sys::Element>().and_then(|el| {
                VisibilityWatch::once(&el, *threshold, move |target| {
                    let _ = target.class_list().add_1("animate-in");
                    let Ok(children) = target.query_selector_all(".stagger-child") else {
                        return;
                    };
                    for index in 0..children.length() {
                        let Some(child) = children
                            .item(index)
                            .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
                        else {
                            continue;
                        };
                        let delay = stagger_delay(usize::try_from(index).unwrap_or_default(), stagger_s);
                        let _ = child.style().set_property("animation-delay", &delay);
                        let _ = child.class_list().add_1("animate-in");
                    }
                })
            });
            move || drop(watch)
        });
    }

    html! {
        <div class={classes!("reveal", props.class.clone())} ref={node}>
            { for props.children.iter() }
        </div>
    }
}
