//! Menu listing with category tabs. Clicking an item opens the order modal.

use crate::assets::asset_url;
use crate::components::parallax::ParallaxText;
use crate::components::reveal::Reveal;
use eatme_order::effects::pointer_offset;
use eatme_order::{CategoryFilter, ItemImage, Menu, MenuItem};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Track the pointer inside a card so the CSS spotlight can follow it.
fn spotlight(event: &MouseEvent) {
    let Some(card) = event
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let rect = card.get_bounding_client_rect();
    let (x, y) = pointer_offset(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        rect.left(),
        rect.top(),
    );
    let style = card.style();
    let _ = style.set_property("--mouse-x", &format!("{x}px"));
    let _ = style.set_property("--mouse-y", &format!("{y}px"));
}

fn item_image(image: Option<&ItemImage>, name: &str) -> Html {
    match image {
        Some(ItemImage::Src(src)) => html! {
            <img src={asset_url(src)} alt={name.to_string()} loading="lazy" />
        },
        Some(ItemImage::Emoji(emoji)) => html! {
            <span class="menu-item-emoji" aria-hidden="true">{ emoji.clone() }</span>
        },
        None => Html::default(),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ItemCardProps {
    pub item: MenuItem,
    pub on_open: Callback<AttrValue>,
    /// Play the entrance animation, used when a tab switch brings the card in.
    #[prop_or_default]
    pub entering: bool,
}

#[function_component(MenuItemCard)]
pub fn menu_item_card(props: &ItemCardProps) -> Html {
    let item = &props.item;
    let onclick = {
        let on_open = props.on_open.clone();
        let id = AttrValue::from(item.id.clone());
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };
    let onmousemove = Callback::from(|e: MouseEvent| spotlight(&e));
    html! {
        <div
            class={classes!("menu-item", "stagger-child", props.entering.then_some("menu-item-enter"))}
            data-item-id={item.id.clone()}
            data-category={item.category.clone()}
            {onclick}
            {onmousemove}
        >
            <div class="menu-item-image">{ item_image(item.image.as_ref(), &item.name) }</div>
            <div class="menu-item-info">
                <h4 class="menu-item-name">{ item.name.clone() }</h4>
                if !item.description.is_empty() {
                    <p class="menu-item-desc">{ item.description.clone() }</p>
                }
                <span class="menu-item-price">{ item.price.clone() }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub menu: Rc<Menu>,
    pub on_open_item: Callback<AttrValue>,
    #[prop_or(0.1)]
    pub parallax_factor: f64,
    #[prop_or(0.1)]
    pub stagger_s: f64,
}

#[function_component(MenuSection)]
pub fn menu_section(props: &Props) -> Html {
    let filter = use_state(CategoryFilter::default);
    let switched = use_state(|| false);

    let tab = |key: &str, label: &str| {
        let active = filter.key() == key;
        let onclick = {
            let filter = filter.clone();
            let switched = switched.clone();
            let next = CategoryFilter::from_key(key);
            Callback::from(move |_: MouseEvent| {
                switched.set(true);
                filter.set(next.clone());
            })
        };
        html! {
            <button
                type="button"
                class={classes!("menu-tab", active.then_some("active"))}
                data-category={key.to_string()}
                aria-pressed={active.to_string()}
                {onclick}
            >
                { label.to_string() }
            </button>
        }
    };

    let sections = props.menu.sections.iter().filter_map(|section| {
        let items: Vec<&MenuItem> = section.items.iter().filter(|item| filter.matches(item)).collect();
        if items.is_empty() {
            return None;
        }
        Some(html! {
            <div class="menu-day">
                if let Some(day) = section.day.as_ref() {
                    <h3 class="menu-day-title">{ day.clone() }</h3>
                }
                <Reveal class={classes!("menu-grid")} stagger_s={props.stagger_s}>
                    { for items.into_iter().map(|item| html! {
                        <MenuItemCard
                            key={format!("{}:{}", filter.key(), item.id)}
                            item={item.clone()}
                            on_open={props.on_open_item.clone()}
                            entering={*switched}
                        />
                    }) }
                </Reveal>
            </div>
        })
    });

    html! {
        <section id="menu" class="menu">
            <ParallaxText text="MENU" class={classes!("section-bg-text")} factor={props.parallax_factor} />
            <div class="section-header">
                <span class="section-eyebrow">{"What we're cooking"}</span>
                <h2 class="section-title">{"The Menu"}</h2>
            </div>
            <div class="menu-tabs" role="toolbar">
                { tab("all", "All") }
                { for props.menu.categories.iter().map(|c| tab(&c.id, &c.label)) }
            </div>
            <div class="menu-days">
                { for sections }
            </div>
        </section>
    }
}
