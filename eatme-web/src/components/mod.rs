pub mod about;
pub mod cursor;
pub mod footer;
pub mod hero;
pub mod menu_section;
pub mod modal;
pub mod navbar;
pub mod order_form;
pub mod order_modal;
pub mod parallax;
pub mod reveal;
pub mod stats;
pub mod toast;
