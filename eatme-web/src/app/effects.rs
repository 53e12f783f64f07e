use crate::components::toast::ToastKind;
use crate::dom::{self, EventListener, Timeout};
use eatme_order::KeySequenceDetector;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub const EASTER_EGG_NOTICE: &str =
    "🔥 Secret Menu Unlocked! Just kidding... but we like your style! 😏";
const EASTER_EGG_ANIMATION: &str = "hueRotate 2s ease";

/// Mark the body `loaded` once the app has mounted.
#[hook]
pub fn use_page_loaded() {
    use_effect_with((), |()| {
        dom::set_body_class("loaded", true);
        || ()
    });
}

/// Listen for the Konami code; on a match spin the page hue for
/// `duration_ms` and show a toast.
#[hook]
pub fn use_easter_egg(
    sequence: Vec<String>,
    duration_ms: u32,
    notify: Callback<(AttrValue, ToastKind)>,
) {
    use_effect_with(sequence, move |sequence| {
        let detector = RefCell::new(KeySequenceDetector::new(sequence.clone()));
        let reset: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let listener = {
            let reset = reset.clone();
            EventListener::on_document("keydown", move |event| {
                let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>().map(|e| e.key()) else {
                    return;
                };
                if !detector.borrow_mut().push(&key) {
                    return;
                }
                detector.borrow_mut().clear();
                log::info!("Konami code entered");
                dom::set_body_style("animation", EASTER_EGG_ANIMATION);
                notify.emit((AttrValue::from(EASTER_EGG_NOTICE), ToastKind::Success));
                *reset.borrow_mut() =
                    Timeout::new(duration_ms, || dom::set_body_style("animation", ""));
            })
        };
        move || {
            drop(listener);
            reset.borrow_mut().take();
        }
    });
}
