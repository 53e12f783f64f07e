use crate::app::state::AppState;
use crate::components::toast::{ToastKind, ToastMessage};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub notify: Callback<(AttrValue, ToastKind)>,
    pub dismiss_toast: Callback<u32>,
    pub toggle_mobile: Callback<()>,
    pub close_mobile: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            notify: build_notify(state),
            dismiss_toast: build_dismiss_toast(state),
            toggle_mobile: build_toggle_mobile(state),
            close_mobile: build_close_mobile(state),
        }
    }
}

/// Show a toast, replacing whatever is on screen.
fn build_notify(state: &AppState) -> Callback<(AttrValue, ToastKind)> {
    let toast = state.toast.clone();
    Callback::from(move |(text, kind): (AttrValue, ToastKind)| {
        toast.set(Some(ToastMessage::new(text, kind)));
    })
}

/// Clear the toast, unless it has already been replaced by a newer one.
fn build_dismiss_toast(state: &AppState) -> Callback<u32> {
    let toast = state.toast.clone();
    Callback::from(move |id: u32| {
        if (*toast).as_ref().is_some_and(|current| current.id == id) {
            toast.set(None);
        }
    })
}

fn build_toggle_mobile(state: &AppState) -> Callback<()> {
    let mobile_open = state.mobile_open.clone();
    Callback::from(move |()| mobile_open.set(!*mobile_open))
}

fn build_close_mobile(state: &AppState) -> Callback<()> {
    let mobile_open = state.mobile_open.clone();
    Callback::from(move |()| mobile_open.set(false))
}
