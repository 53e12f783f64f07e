//! Single-slot notification toast.
//!
//! Showing a new toast replaces the current one. A toast dismisses itself
//! after `toast_ms`, playing its exit animation for `exit_ms` first.

use crate::dom::Timeout;
use std::sync::atomic::{AtomicU32, Ordering};
use yew::prelude::*;

static TOAST_IDS: AtomicU32 = AtomicU32::new(0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
}

impl ToastKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Success => "notification-success",
            Self::Info => "notification-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: u32,
    pub text: AttrValue,
    pub kind: ToastKind,
}

impl ToastMessage {
    #[must_use]
    pub fn new(text: impl Into<AttrValue>, kind: ToastKind) -> Self {
        Self {
            id: TOAST_IDS.fetch_add(1, Ordering::Relaxed),
            text: text.into(),
            kind,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub toast: Option<ToastMessage>,
    pub on_dismiss: Callback<u32>,
    #[prop_or(5000)]
    pub toast_ms: u32,
    #[prop_or(300)]
    pub exit_ms: u32,
}

#[function_component(Toast)]
pub fn toast(props: &Props) -> Html {
    let leaving = use_state(|| false);

    {
        let leaving = leaving.clone();
        let on_dismiss = props.on_dismiss.clone();
        let (toast_ms, exit_ms) = (props.toast_ms, props.exit_ms);
        use_effect_with(props.toast.as_ref().map(|t| t.id), move |id| {
            leaving.set(false);
            let mut timers: Vec<Timeout> = Vec::new();
            if let Some(id) = *id {
                let start_exit = leaving.clone();
                timers.extend(Timeout::new(toast_ms, move || start_exit.set(true)));
                timers.extend(Timeout::new(toast_ms + exit_ms, move || on_dismiss.emit(id)));
            }
            move || drop(timers)
        });
    }

    let Some(toast) = props.toast.as_ref() else {
        return Html::default();
    };

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };
    let class = classes!(
        "notification",
        toast.kind.class(),
        (*leaving).then_some("notification-leaving")
    );

    html! {
        <div class={class} role="status" aria-live="polite">
            <p>{ toast.text.clone() }</p>
            <button class="notification-close" aria-label="Dismiss" onclick={on_close}>{"×"}</button>
        </div>
    }
}
