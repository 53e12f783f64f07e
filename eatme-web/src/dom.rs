//! Thin wrappers over the browser APIs the site touches.
//!
//! Timers and event listeners are handed out as guards that undo themselves
//! on `Drop`, so a component can keep one in an effect and release it in the
//! effect's teardown.

use eatme_order::numbers::ms_to_i32;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

#[must_use]
pub fn body() -> Option<HtmlElement> {
    document().and_then(|doc| doc.body())
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Print the styled brand banner to the console.
pub fn console_banner(brand: &str) {
    web_sys::console::log_2(
        &JsValue::from(format!("%c {brand} 😏")),
        &JsValue::from("font-size: 48px; font-weight: bold; color: #E5A830;"),
    );
    web_sys::console::log_2(
        &JsValue::from("%c Satisfy your cravings..."),
        &JsValue::from("font-size: 16px; color: #4A6741;"),
    );
}

/// Current vertical scroll offset of the page.
#[must_use]
pub fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.page_y_offset().ok())
        .unwrap_or(0.0)
}

#[must_use]
pub fn viewport_height() -> f64 {
    window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// Whether the primary pointer is precise (mouse or trackpad).
#[must_use]
pub fn has_fine_pointer() -> bool {
    window()
        .and_then(|win| win.match_media("(pointer: fine)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Smoothly scroll the window to an absolute document offset.
pub fn smooth_scroll_to(top: f64) {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    if let Some(win) = window()
        && let Err(err) = win.open_with_url_and_target(url, "_blank")
    {
        log::warn!("Failed to open {url}: {}", js_error_message(&err));
    }
}

/// Set or clear an inline style property on the document body.
pub fn set_body_style(property: &str, value: &str) {
    if let Some(body) = body() {
        let style = body.style();
        let _ = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
    }
}

pub fn set_body_class(class: &str, enabled: bool) {
    if let Some(body) = body() {
        let list = body.class_list();
        let _ = if enabled {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// One-shot timer, cleared if dropped before it fires.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedule `callback` after `delay_ms`. Returns `None` outside a browser
    /// or if the timer could not be registered.
    pub fn new(delay_ms: u32, callback: impl FnOnce() + 'static) -> Option<Self> {
        let callback = Closure::once(callback);
        let id = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms_to_i32(delay_ms),
            )
            .ok()?;
        Some(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// Repeating timer, cleared on drop.
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: u32, callback: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms_to_i32(period_ms),
            )
            .ok()?;
        Some(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

/// Event listener registration, removed on drop.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Listen on the global `window`.
    pub fn on_window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let win = window()?;
        Self::new(&win, event, handler)
    }

    /// Listen on the `document`.
    pub fn on_document(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let doc = document()?;
        Self::new(&doc, event, handler)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Fires a callback the first time an element becomes visible enough.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    /// Watch `element` until at least `threshold` of it is visible, then call
    /// `on_visible` once with the element and stop observing it.
    pub fn once(
        element: &Element,
        threshold: f64,
        mut on_visible: impl FnMut(&Element) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        observer.unobserve(&target);
                        on_visible(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(element);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
