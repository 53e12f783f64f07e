//! Landing section: brand, rotating tagline, floating particles.

use crate::components::navbar::SectionLink;
use crate::components::parallax::ParallaxText;
use crate::dom::{Interval, Timeout};
use eatme_order::effects::{Rotation, particle_field, stagger_delay};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TaglineProps {
    pub taglines: Vec<AttrValue>,
    pub start_ms: u32,
    pub interval_ms: u32,
    pub fade_ms: u32,
}

/// Cycles through taglines, fading each one out before swapping it.
#[function_component(Tagline)]
pub fn tagline(props: &TaglineProps) -> Html {
    let shown = use_state(|| props.taglines.first().cloned().unwrap_or_default());
    let fading = use_state(|| false);
    let rotating = use_state(|| false);

    {
        let rotating = rotating.clone();
        use_effect_with(props.start_ms, move |start_ms| {
            let timer = Timeout::new(*start_ms, move || rotating.set(true));
            move || drop(timer)
        });
    }

    {
        let shown = shown.clone();
        let fading = fading.clone();
        let (interval_ms, fade_ms) = (props.interval_ms, props.fade_ms);
        use_effect_with(
            (*rotating, props.taglines.clone()),
            move |(rotating, taglines)| {
                let mut interval = None;
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                if *rotating && taglines.len() > 1 {
                    let rotation = Rc::new(RefCell::new(Rotation::new(taglines.clone())));
                    let pending = pending.clone();
                    interval = Interval::new(interval_ms, move || {
                        fading.set(true);
                        let rotation = rotation.clone();
                        let shown = shown.clone();
                        let fading = fading.clone();
                        let swap = Timeout::new(fade_ms, move || {
                            if let Some(next) = rotation.borrow_mut().advance() {
                                shown.set(next.clone());
                            }
                            fading.set(false);
                        });
                        *pending.borrow_mut() = swap;
                    });
                }
                move || {
                    drop(interval);
                    pending.borrow_mut().take();
                }
            },
        );
    }

    let style = if *fading { "opacity: 0" } else { "opacity: 1" };
    html! {
        <p class="hero-tagline" style={style}>{ (*shown).clone() }</p>
    }
}

#[cfg(target_arch = "wasm32")]
fn particle_seed() -> u64 {
    eatme_order::numbers::floor_f64_to_u64(js_sys::Date::now())
}

#[cfg(not(target_arch = "wasm32"))]
const fn particle_seed() -> u64 {
    0x00C0_FFEE
}

#[derive(Properties, PartialEq, Clone)]
pub struct ParticlesProps {
    pub count: usize,
}

#[function_component(Particles)]
pub fn particles(props: &ParticlesProps) -> Html {
    let seed = use_state(particle_seed);
    let field = particle_field(props.count, *seed);
    html! {
        <div class="particle-container" aria-hidden="true">
            { for field.iter().map(|particle| html! {
                <div class="particle" style={particle.style()}></div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub brand: AttrValue,
    pub taglines: Vec<AttrValue>,
    pub particle_count: usize,
    pub parallax_factor: f64,
    pub stagger_s: f64,
    pub tagline_start_ms: u32,
    pub tagline_interval_ms: u32,
    pub tagline_fade_ms: u32,
    #[prop_or(80.0)]
    pub header_offset: f64,
}

#[function_component(Hero)]
pub fn hero(props: &Props) -> Html {
    let delay = |index: usize| format!("animation-delay: {}", stagger_delay(index, props.stagger_s));
    html! {
        <section id="home" class="hero">
            <Particles count={props.particle_count} />
            <ParallaxText text="EAT" class={classes!("hero-bg-text")} factor={props.parallax_factor} />
            <div class="hero-content">
                <span class="hero-eyebrow" style={delay(0)}>{"Accra's most tempting kitchen"}</span>
                <h1 class="hero-title" style={delay(1)}>{ props.brand.clone() }</h1>
                <div style={delay(2)}>
                    <Tagline
                        taglines={props.taglines.clone()}
                        start_ms={props.tagline_start_ms}
                        interval_ms={props.tagline_interval_ms}
                        fade_ms={props.tagline_fade_ms}
                    />
                </div>
                <div class="hero-cta" style={delay(3)}>
                    <SectionLink target="menu" class={classes!("btn", "btn-primary")} header_offset={props.header_offset}>
                        {"See the menu"}
                    </SectionLink>
                    <SectionLink target="order" class={classes!("btn", "btn-outline")} header_offset={props.header_offset}>
                        {"Order now"}
                    </SectionLink>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props() -> Props {
        Props {
            brand: AttrValue::from("EAT ME"),
            taglines: vec![
                AttrValue::from("Feed your cravings"),
                AttrValue::from("Indulge your desires"),
            ],
            particle_count: 30,
            parallax_factor: 0.1,
            stagger_s: 0.2,
            tagline_start_ms: 2000,
            tagline_interval_ms: 4000,
            tagline_fade_ms: 500,
            header_offset: 80.0,
        }
    }

    #[test]
    fn hero_renders_first_tagline_and_particles() {
        let html = block_on(LocalServerRenderer::<Hero>::with_props(props()).render());
        assert!(html.contains("EAT ME"));
        assert!(html.contains("Feed your cravings"));
        assert!(!html.contains("Indulge your desires"));
        assert_eq!(html.matches("class=\"particle\"").count(), 30);
        assert!(html.contains("animation-delay: 0.6s"));
        assert!(html.contains("href=\"#menu\""));
        assert!(html.contains("href=\"#order\""));
    }
}
