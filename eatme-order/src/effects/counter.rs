use crate::numbers::{floor_f64_to_u64, u64_to_f64};
use crate::pricing::parse_price;

/// Count-up animation for a stat label such as `500+`.
///
/// The label's digits are the target and every other character is kept as a
/// suffix. Each [`tick`](Self::tick) advances by `target / steps`.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTween {
    target: u64,
    suffix: String,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterTween {
    #[must_use]
    pub fn from_label(label: &str, steps: u32) -> Self {
        let target = parse_price(label).map_or(0, u64::from);
        let suffix: String = label.chars().filter(|c| !c.is_ascii_digit()).collect();
        Self {
            target,
            suffix,
            increment: u64_to_f64(target) / f64::from(steps.max(1)),
            current: 0.0,
            finished: target == 0,
        }
    }

    /// Advance one step and return the label to display, or `None` once the
    /// target has already been shown.
    pub fn tick(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= u64_to_f64(self.target) {
            self.finished = true;
            Some(self.final_label())
        } else {
            Some(format!("{}{}", floor_f64_to_u64(self.current), self.suffix))
        }
    }

    #[must_use]
    pub fn final_label(&self) -> String {
        format!("{}{}", self.target, self.suffix)
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}
