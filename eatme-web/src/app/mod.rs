use crate::components::about::About;
use crate::components::cursor::CursorGlow;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::menu_section::MenuSection;
use crate::components::navbar::{MobileMenu, Navbar};
use crate::components::order_form::OrderForm;
use crate::components::order_modal::{OrderModal, use_order_controller};
use crate::components::toast::{Toast, ToastKind};
use crate::data::{EmbeddedSiteData, SiteData};
use std::rc::Rc;
use yew::prelude::*;

pub mod effects;
pub mod handlers;
pub mod state;

pub use handlers::AppHandlers;
pub use state::AppState;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub data: Rc<SiteData>,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            data: Rc::new(SiteData::load(&EmbeddedSiteData)),
        }
    }
}

#[function_component(App)]
pub fn app(props: &Props) -> Html {
    let app_state = state::use_app_state(props.data.clone());
    let handlers = AppHandlers::new(&app_state);
    let order = use_order_controller(app_state.menu.clone());

    let site = &app_state.data.config;
    effects::use_page_loaded();
    effects::use_easter_egg(
        site.konami.clone(),
        site.timings.easter_egg_ms,
        handlers.notify.clone(),
    );

    let on_submitted = {
        let notify = handlers.notify.clone();
        Callback::from(move |text: AttrValue| notify.emit((text, ToastKind::Success)))
    };
    let taglines: Vec<AttrValue> = site.taglines.iter().cloned().map(AttrValue::from).collect();
    let brand = AttrValue::from(site.brand.clone());
    let effects = &site.effects;
    let timings = &site.timings;

    html! {
        <>
            <CursorGlow />
            <Navbar
                brand={brand.clone()}
                scroll_threshold={effects.navbar_scroll_threshold}
                header_offset={effects.header_offset}
                mobile_open={*app_state.mobile_open}
                on_toggle_mobile={handlers.toggle_mobile.clone()}
                on_navigate={handlers.close_mobile.clone()}
            />
            <MobileMenu
                open={*app_state.mobile_open}
                header_offset={effects.header_offset}
                on_navigate={handlers.close_mobile.clone()}
            />
            <main id="main" role="main">
                <Hero
                    brand={brand.clone()}
                    {taglines}
                    particle_count={effects.particle_count}
                    parallax_factor={effects.parallax_factor}
                    stagger_s={effects.hero_stagger_s}
                    tagline_start_ms={timings.tagline_start_ms}
                    tagline_interval_ms={timings.tagline_interval_ms}
                    tagline_fade_ms={timings.tagline_fade_ms}
                    header_offset={effects.header_offset}
                />
                <About site={site.clone()} />
                <MenuSection
                    menu={app_state.menu.clone()}
                    on_open_item={order.open_item.clone()}
                    parallax_factor={effects.parallax_factor}
                    stagger_s={effects.stagger_step_s}
                />
                <OrderForm submit_ms={timings.submit_delay_ms} {on_submitted} />
            </main>
            <Footer brand={brand} messaging={site.messaging.clone()} />
            <OrderModal
                selection={(*order.selection).clone()}
                add_ons={app_state.menu.add_ons.clone()}
                site={site.clone()}
                on_close={order.close.clone()}
                on_increment={order.increment.clone()}
                on_decrement={order.decrement.clone()}
                on_toggle_add_on={order.toggle_add_on.clone()}
            />
            <Toast
                toast={(*app_state.toast).clone()}
                on_dismiss={handlers.dismiss_toast.clone()}
                toast_ms={timings.toast_ms}
                exit_ms={timings.toast_exit_ms}
            />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn app_renders_every_section() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        for id in ["home", "about", "menu", "order", "contact", "orderModal"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
        assert!(html.contains("Jollof Rice &amp; Chicken") || html.contains("Jollof Rice & Chicken"));
        assert!(!html.contains("modal active"));
    }
}
