//! Top navigation: scroll-aware navbar, in-page links and the mobile menu.

use crate::dom::{self, EventListener};
use eatme_order::effects::{navbar_scrolled, smooth_scroll_target};
use yew::prelude::*;

/// Section anchors shown in the navigation, as `(element id, label)`.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("menu", "Menu"),
    ("order", "Order"),
    ("contact", "Contact"),
];

/// Smoothly scroll so the section with `section_id` sits below the fixed
/// header. Returns `false` when no such section exists.
pub fn scroll_to_section(section_id: &str, header_offset: f64) -> bool {
    let Some(target) = dom::document().and_then(|doc| doc.get_element_by_id(section_id)) else {
        return false;
    };
    let top = target.get_bounding_client_rect().top();
    dom::smooth_scroll_to(smooth_scroll_target(top, dom::scroll_y(), header_offset));
    true
}

#[derive(Properties, PartialEq, Clone)]
pub struct SectionLinkProps {
    /// Element id of the section, without `#`
    pub target: AttrValue,
    pub header_offset: f64,
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page anchor that smooth-scrolls its section below the fixed header.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        let target = props.target.clone();
        let offset = props.header_offset;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if scroll_to_section(&target, offset) {
                on_navigate.emit(());
            }
        })
    };
    html! {
        <a href={format!("#{}", props.target)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct NavLinksProps {
    pub header_offset: f64,
    pub on_navigate: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(NavLinks)]
pub fn nav_links(props: &NavLinksProps) -> Html {
    html! {
        <ul class={props.class.clone()}>
            { for NAV_LINKS.iter().map(|(id, label)| html! {
                <li>
                    <SectionLink
                        target={*id}
                        header_offset={props.header_offset}
                        on_navigate={props.on_navigate.clone()}
                    >
                        { *label }
                    </SectionLink>
                </li>
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub brand: AttrValue,
    pub scroll_threshold: f64,
    pub header_offset: f64,
    pub mobile_open: bool,
    pub on_toggle_mobile: Callback<()>,
    pub on_navigate: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with(props.scroll_threshold, move |threshold| {
            let threshold = *threshold;
            let listener = EventListener::on_window("scroll", move |_| {
                scrolled.set(navbar_scrolled(dom::scroll_y(), threshold));
            });
            move || drop(listener)
        });
    }

    let on_toggle = {
        let cb = props.on_toggle_mobile.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <SectionLink target="home" class={classes!("logo")} header_offset={props.header_offset}>
                { props.brand.clone() }
            </SectionLink>
            <NavLinks
                class={classes!("nav-links")}
                header_offset={props.header_offset}
                on_navigate={props.on_navigate.clone()}
            />
            <button
                type="button"
                class={classes!("mobile-menu-btn", props.mobile_open.then_some("active"))}
                aria-label="Toggle menu"
                aria-expanded={props.mobile_open.to_string()}
                onclick={on_toggle}
            >
                <span></span><span></span><span></span>
            </button>
        </nav>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MobileMenuProps {
    pub open: bool,
    pub header_offset: f64,
    pub on_navigate: Callback<()>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let display = if props.open { "display: flex" } else { "display: none" };
    html! {
        <div class="mobile-menu" style={display}>
            <NavLinks
                class={classes!("mobile-links")}
                header_offset={props.header_offset}
                on_navigate={props.on_navigate.clone()}
            />
        </div>
    }
}
