//! Order modal: configure a menu item and send the order over WhatsApp.
//!
//! The controller hook owns the active [`SelectionState`](eatme_order::SelectionState);
//! the view renders it and reports user actions back through the controller's
//! callbacks.

mod controller;
mod view;

pub use controller::{OrderController, use_order_controller};
pub use view::{OrderModal, Props};
