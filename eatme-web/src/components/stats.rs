use crate::dom::{Interval, VisibilityWatch};
use eatme_order::effects::CounterTween;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    /// Final label, e.g. `500+`
    pub value: AttrValue,
    pub caption: AttrValue,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub stats: Vec<Stat>,
    pub threshold: f64,
    pub steps: u32,
    pub step_ms: u32,
}

/// Stat numbers that count up from zero the first time the block is half
/// visible.
#[function_component(StatsCounter)]
pub fn stats_counter(props: &Props) -> Html {
    let node = use_node_ref();
    let labels = use_state(|| {
        props
            .stats
            .iter()
            .map(|stat| stat.value.clone())
            .collect::<Vec<_>>()
    });
    let started = use_state(|| false);
    let finished = use_state(|| false);

    {
        let node = node.clone();
        let started = started.clone();
        use_effect_with(props.threshold, move |threshold| {
            let watch = node
                .cast::<web_sys::Element>()
                .and_then(|el| VisibilityWatch::once(&el, *threshold, move |_| started.set(true)));
            move || drop(watch)
        });
    }

    {
        let labels = labels.clone();
        let finished = finished.clone();
        let values: Vec<AttrValue> = props.stats.iter().map(|s| s.value.clone()).collect();
        let (steps, step_ms) = (props.steps, props.step_ms);
        use_effect_with((*started, *finished), move |(started, done)| {
            let mut interval = None;
            if *started && !*done {
                let tweens: Rc<RefCell<Vec<CounterTween>>> = Rc::new(RefCell::new(
                    values
                        .iter()
                        .map(|value| CounterTween::from_label(value, steps))
                        .collect(),
                ));
                interval = Interval::new(step_ms, move || {
                    let mut tweens = tweens.borrow_mut();
                    let next: Vec<AttrValue> = tweens
                        .iter_mut()
                        .map(|tween| {
                            tween
                                .tick()
                                .unwrap_or_else(|| tween.final_label())
                                .into()
                        })
                        .collect();
                    labels.set(next);
                    if tweens.iter().all(CounterTween::is_finished) {
                        finished.set(true);
                    }
                });
            }
            move || drop(interval)
        });
    }

    html! {
        <div class="about-stats" ref={node}>
            { for props.stats.iter().zip(labels.iter()).map(|(stat, label)| html! {
                <div class="stat">
                    <span class="stat-number">{ label.clone() }</span>
                    <span class="stat-label">{ stat.caption.clone() }</span>
                </div>
            }) }
        </div>
    }
}
