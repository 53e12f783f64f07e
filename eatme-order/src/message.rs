//! Order summary text sent through the messaging deep link.
use crate::pricing::format_price;
use crate::selection::Quantity;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Fixed wording around the order details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplate {
    pub greeting: String,
    pub closing: String,
    pub currency: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            greeting: String::from("Hi! I'd like to order:"),
            closing: String::from("Please confirm availability. Thank you!"),
            currency: String::from("GH₵"),
        }
    }
}

/// Compose the multi-line order summary.
///
/// The day line is left out when `day` is empty and the extras line when no
/// add-on labels are given. Item and total lines are wrapped in `*` so the
/// messaging app renders them bold.
#[must_use]
pub fn format_order_message(
    template: &MessageTemplate,
    item_name: &str,
    quantity: Quantity,
    day: &str,
    add_on_labels: &[String],
    total: u64,
) -> String {
    let mut message = format!("{}\n\n", template.greeting);
    let _ = writeln!(message, "*{quantity}x {item_name}*");
    if !day.is_empty() {
        let _ = writeln!(message, "Day: {day}");
    }
    if !add_on_labels.is_empty() {
        let _ = writeln!(message, "Extras: {}", add_on_labels.join(", "));
    }
    let _ = write!(
        message,
        "\n*Total: {}*\n\n{}",
        format_price(&template.currency, total),
        template.closing
    );
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_message_layout() {
        let message = format_order_message(
            &MessageTemplate::default(),
            "Jollof Rice",
            Quantity::clamped(2),
            "Friday",
            &[String::from("extra sauce"), String::from("extra cheese")],
            80,
        );
        assert_eq!(
            message,
            "Hi! I'd like to order:\n\n*2x Jollof Rice*\nDay: Friday\nExtras: extra sauce, extra cheese\n\n*Total: GH₵ 80*\n\nPlease confirm availability. Thank you!"
        );
    }

    #[test]
    fn day_line_omitted_iff_day_empty() {
        let template = MessageTemplate::default();
        let without = format_order_message(&template, "Kelewele", Quantity::MIN, "", &[], 15);
        let with = format_order_message(&template, "Kelewele", Quantity::MIN, "Sunday", &[], 15);
        assert!(!without.contains("Day:"));
        assert!(with.contains("Day: Sunday\n"));
    }

    #[test]
    fn message_always_names_quantity_item_and_total() {
        let message = format_order_message(
            &MessageTemplate::default(),
            "Banku & Tilapia",
            Quantity::MIN,
            "",
            &[],
            40,
        );
        assert!(message.contains("1x Banku & Tilapia"));
        assert!(message.contains("Total: GH₵ 40"));
        assert!(!message.contains("Extras:"));
    }
}
