use crate::components::reveal::Reveal;
use crate::components::stats::{Stat, StatsCounter};
use eatme_order::SiteConfig;
use yew::prelude::*;

fn default_stats() -> Vec<Stat> {
    [
        ("500+", "Happy eaters"),
        ("25", "Dishes on rotation"),
        ("3", "Cook days a week"),
    ]
    .into_iter()
    .map(|(value, caption)| Stat {
        value: AttrValue::from(value),
        caption: AttrValue::from(caption),
    })
    .collect()
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub site: SiteConfig,
}

#[function_component(About)]
pub fn about(props: &Props) -> Html {
    let effects = &props.site.effects;
    let timings = &props.site.timings;
    html! {
        <section id="about" class="about">
            <Reveal class={classes!("about-content")} threshold={effects.reveal_threshold} stagger_s={effects.stagger_step_s}>
                <span class="section-eyebrow stagger-child">{"Who we are"}</span>
                <h2 class="section-title stagger-child">{"Food worth craving"}</h2>
                <p class="stagger-child">
                    {"Home-style Ghanaian plates cooked fresh on set days. Pick a dish, \
                      choose your extras and send the order straight to our kitchen on WhatsApp."}
                </p>
                <StatsCounter
                    stats={default_stats()}
                    threshold={effects.stats_threshold}
                    steps={timings.counter_steps}
                    step_ms={timings.counter_step_ms()}
                />
            </Reveal>
        </section>
    }
}
