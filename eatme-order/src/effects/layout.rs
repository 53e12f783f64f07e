use crate::numbers::usize_to_f64;

/// Whether the navbar should switch to its solid `scrolled` style.
#[must_use]
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Document offset to scroll to so a section lands just below the fixed header.
#[must_use]
pub fn smooth_scroll_target(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    element_top + page_offset - header_offset
}

/// An element is on screen while any part of it overlaps the viewport.
#[must_use]
pub fn is_on_screen(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Transform for a centered background word drifting with the page.
#[must_use]
pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translate(-50%, -50%) translateY({}px)", scroll_y * factor)
}

/// CSS `animation-delay` for the n-th staggered child.
#[must_use]
pub fn stagger_delay(index: usize, step_s: f64) -> String {
    let delay = usize_to_f64(index) * step_s;
    format!("{}s", (delay * 1000.0).round() / 1000.0)
}

/// Pointer position relative to an element's top-left corner.
#[must_use]
pub fn pointer_offset(client_x: f64, client_y: f64, left: f64, top: f64) -> (f64, f64) {
    (client_x - left, client_y - top)
}
