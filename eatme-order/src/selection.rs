//! Order selection state.
//!
//! A [`Selection`] is the in-memory record of what the customer is currently
//! configuring in the order modal. It is created fresh every time a menu entry
//! is opened, mutated by the quantity and add-on controls and thrown away when
//! the modal closes. [`SelectionState`] owns it and exposes the mutators the
//! UI calls; recomputing totals and links is done on demand via
//! [`SelectionState::quote`].

use crate::addons::{AddOnCatalog, AddOnId};
use crate::catalog::ItemImage;
use crate::config::SiteConfig;
use crate::message::format_order_message;
use crate::pricing::{compute_total, format_price, parse_price_or_zero};
use smallvec::SmallVec;
use std::fmt;

/// Number of portions ordered, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(10);

    /// Clamp any requested amount into the allowed range.
    #[must_use]
    pub fn clamped(requested: i64) -> Self {
        let bounded = requested.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        u8::try_from(bounded).map_or(Self::MIN, Self)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn increment(self) -> Self {
        Self::clamped(i64::from(self.0) + 1)
    }

    #[must_use]
    pub fn decrement(self) -> Self {
        Self::clamped(i64::from(self.0) - 1)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the modal needs to know about a clicked menu entry, captured
/// once when the entry is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuEntry {
    pub name: String,
    /// Price exactly as displayed on the menu
    pub price_text: String,
    pub unit_price: u32,
    /// Day the item is served, empty when it is not tied to a day
    pub day: String,
    pub image: Option<ItemImage>,
}

impl MenuEntry {
    /// Build an entry from displayed values; unreadable prices count as 0.
    #[must_use]
    pub fn new(name: impl Into<String>, price_text: impl Into<String>, day: impl Into<String>) -> Self {
        let price_text = price_text.into();
        Self {
            name: name.into(),
            unit_price: parse_price_or_zero(&price_text),
            price_text,
            day: day.into(),
            image: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: Option<ItemImage>) -> Self {
        self.image = image;
        self
    }
}

/// The customer's current choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub item_name: String,
    pub price_text: String,
    pub unit_price: u32,
    pub available_day: String,
    pub image: Option<ItemImage>,
    pub quantity: Quantity,
    pub selected_add_ons: SmallVec<[AddOnId; 4]>,
}

impl Selection {
    #[must_use]
    pub fn is_selected(&self, id: &AddOnId) -> bool {
        self.selected_add_ons.contains(id)
    }

    /// Subtitle shown under the item name, empty when no day applies.
    #[must_use]
    pub fn day_label(&self) -> String {
        if self.available_day.is_empty() {
            String::new()
        } else {
            format!("Available on {}", self.available_day)
        }
    }
}

/// Derived values for one render of the order modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuote {
    pub total: u64,
    /// Total with its currency label, e.g. `GH₵ 80`
    pub total_label: String,
    pub add_on_labels: Vec<String>,
    pub message: String,
    /// Messaging deep link carrying the encoded message
    pub link: String,
}

/// Owner of the single active [`Selection`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Selection,
    open: bool,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh selection for `entry`: quantity 1, no add-ons.
    pub fn open(&mut self, entry: MenuEntry) {
        self.current = Selection {
            item_name: entry.name,
            price_text: entry.price_text,
            unit_price: entry.unit_price,
            available_day: entry.day,
            image: entry.image,
            quantity: Quantity::MIN,
            selected_add_ons: SmallVec::new(),
        };
        self.open = true;
    }

    /// Set the quantity, silently clamping it into `1..=10`.
    pub fn set_quantity(&mut self, requested: i64) {
        self.current.quantity = Quantity::clamped(requested);
    }

    pub fn increment(&mut self) {
        self.current.quantity = self.current.quantity.increment();
    }

    pub fn decrement(&mut self) {
        self.current.quantity = self.current.quantity.decrement();
    }

    /// Flip membership of `id` in the selected add-ons.
    pub fn toggle_add_on(&mut self, id: &AddOnId) {
        if let Some(pos) = self.current.selected_add_ons.iter().position(|a| a == id) {
            self.current.selected_add_ons.remove(pos);
        } else {
            self.current.selected_add_ons.push(id.clone());
        }
    }

    /// Drop the selection and mark the modal closed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub const fn current(&self) -> &Selection {
        &self.current
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Compute the total, the order message and its deep link.
    #[must_use]
    pub fn quote(&self, add_ons: &AddOnCatalog, site: &SiteConfig) -> OrderQuote {
        let selection = &self.current;
        let chosen: Vec<_> = add_ons.selected(&selection.selected_add_ons).collect();
        let total = compute_total(
            selection.unit_price,
            chosen.iter().map(|add_on| add_on.price),
            selection.quantity,
        );
        let add_on_labels: Vec<String> = chosen.iter().map(|add_on| add_on.label()).collect();
        let message = format_order_message(
            &site.message,
            &selection.item_name,
            selection.quantity,
            &selection.available_day,
            &add_on_labels,
            total,
        );
        let link = site.messaging.link_for(&message);
        OrderQuote {
            total,
            total_label: format_price(&site.message.currency, total),
            add_on_labels,
            message,
            link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addons::AddOn;

    fn add_ons() -> AddOnCatalog {
        AddOnCatalog::new(vec![
            AddOn::new("extra-sauce", 5),
            AddOn::new("extra-cheese", 10),
        ])
    }

    fn opened(price: &str, day: &str) -> SelectionState {
        let mut state = SelectionState::new();
        state.open(MenuEntry::new("Jollof Rice", price, day));
        state
    }

    #[test]
    fn quantity_clamps_to_bounds() {
        assert_eq!(Quantity::clamped(0), Quantity::MIN);
        assert_eq!(Quantity::clamped(-7), Quantity::MIN);
        assert_eq!(Quantity::clamped(11), Quantity::MAX);
        assert_eq!(Quantity::clamped(i64::MAX), Quantity::MAX);
        assert_eq!(Quantity::clamped(4).get(), 4);
        assert_eq!(Quantity::MAX.increment(), Quantity::MAX);
        assert_eq!(Quantity::MIN.decrement(), Quantity::MIN);
    }

    #[test]
    fn open_resets_quantity_and_add_ons() {
        let mut state = opened("GH₵ 25", "Monday");
        state.set_quantity(6);
        state.toggle_add_on(&AddOnId::from("extra-sauce"));

        state.open(MenuEntry::new("Waakye", "GH₵ 30", ""));
        let current = state.current();
        assert!(state.is_open());
        assert_eq!(current.item_name, "Waakye");
        assert_eq!(current.unit_price, 30);
        assert_eq!(current.quantity, Quantity::MIN);
        assert!(current.selected_add_ons.is_empty());
    }

    #[test]
    fn set_quantity_is_idempotent_at_boundaries() {
        let mut state = opened("GH₵ 25", "");
        state.set_quantity(0);
        assert_eq!(state.current().quantity.get(), 1);
        state.set_quantity(-3);
        assert_eq!(state.current().quantity.get(), 1);
        state.set_quantity(42);
        assert_eq!(state.current().quantity.get(), 10);
        state.set_quantity(42);
        assert_eq!(state.current().quantity.get(), 10);
    }

    #[test]
    fn increment_and_decrement_stop_at_limits() {
        let mut state = opened("GH₵ 25", "");
        state.decrement();
        assert_eq!(state.current().quantity.get(), 1);
        for _ in 0..15 {
            state.increment();
        }
        assert_eq!(state.current().quantity.get(), 10);
    }

    #[test]
    fn toggle_add_on_twice_restores_selection() {
        let mut state = opened("GH₵ 25", "");
        state.toggle_add_on(&AddOnId::from("extra-cheese"));
        let before = state.current().selected_add_ons.clone();
        let sauce = AddOnId::from("extra-sauce");
        state.toggle_add_on(&sauce);
        assert!(state.current().is_selected(&sauce));
        state.toggle_add_on(&sauce);
        assert_eq!(state.current().selected_add_ons, before);
    }

    #[test]
    fn reset_closes_and_clears() {
        let mut state = opened("GH₵ 25", "Friday");
        state.reset();
        assert!(!state.is_open());
        assert_eq!(state.current(), &Selection::default());
    }

    #[test]
    fn quote_matches_worked_example() {
        let mut state = opened("GH₵ 25", "Friday");
        state.toggle_add_on(&AddOnId::from("extra-cheese"));
        state.toggle_add_on(&AddOnId::from("extra-sauce"));
        state.set_quantity(2);

        let quote = state.quote(&add_ons(), &SiteConfig::default());
        assert_eq!(quote.total, 80);
        assert_eq!(quote.total_label, "GH₵ 80");
        assert_eq!(quote.add_on_labels, vec!["extra sauce", "extra cheese"]);
        assert!(quote.message.contains("*2x Jollof Rice*"));
        assert!(quote.message.contains("Extras: extra sauce, extra cheese"));
        assert!(quote.link.starts_with("https://wa.me/2250555708866?text="));
    }

    #[test]
    fn unreadable_price_quotes_zero() {
        let state = opened("Market price", "");
        let quote = state.quote(&add_ons(), &SiteConfig::default());
        assert_eq!(quote.total, 0);
    }

    #[test]
    fn day_label_is_empty_without_day() {
        assert_eq!(opened("GH₵ 25", "").current().day_label(), "");
        assert_eq!(
            opened("GH₵ 25", "Tuesday").current().day_label(),
            "Available on Tuesday"
        );
    }
}
